use super::{error::CounterError, message::Message};

/// Snapshot of the widget: the value and the error currently on display.
///
/// `counter` is unsigned, so a negative value is unrepresentable. `error` is
/// only ever set by a rejected decrement and is cleared by the next successful
/// action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counter: u64,
    pub error: Option<CounterError>,
}

impl CounterState {
    pub fn new(counter: u64) -> Self {
        Self {
            counter,
            error: None,
        }
    }

    /// `true` while an error line is shown.
    #[inline]
    pub fn is_flagged(&self) -> bool {
        self.error.is_some()
    }

    fn incremented(self) -> Self {
        // No ceiling; saturate at the representation limit instead of wrapping.
        Self::new(self.counter.saturating_add(1))
    }

    fn decremented(self) -> Result<Self, CounterError> {
        if self.counter == 0 {
            return Err(CounterError::FloorViolation);
        }
        Ok(Self::new(self.counter - 1))
    }
}

/// Applies one message to a state and returns the next state.
pub fn reduce(state: CounterState, message: Message) -> CounterState {
    match message {
        Message::Increment => state.incremented(),
        Message::Decrement => match state.decremented() {
            Ok(next) => next,
            Err(err) => CounterState {
                error: Some(err),
                ..state
            },
        },
    }
}
