/// User activations the counter reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Increment,
    Decrement,
}
