mod counter;
mod error;
mod message;
mod render;
mod state;

pub use counter::CounterWidget;
pub use error::{CounterError, TestIdError};
pub use message::Message;
pub use render::{render, Node, NodeKind, Rendered, TestId};
pub use state::{reduce, CounterState};
