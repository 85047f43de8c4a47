use counter_widget::widget::{CounterError, CounterState, Message, TestId, reduce, render};
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Message> {
    prop_oneof![Just(Message::Increment), Just(Message::Decrement)]
}

proptest! {
    #[test]
    fn error_tracks_the_last_rejected_decrement(messages in prop::collection::vec(message(), 0..64)) {
        let mut state = CounterState::default();
        let mut model: i64 = 0;

        for message in messages {
            let rejected = message == Message::Decrement && model == 0;
            match message {
                Message::Increment => model += 1,
                Message::Decrement if model > 0 => model -= 1,
                Message::Decrement => {}
            }
            state = reduce(state, message);

            prop_assert!(model >= 0);
            prop_assert_eq!(state.counter as i64, model);
            prop_assert_eq!(state.error.is_some(), rejected);
            prop_assert_eq!(render(&state).find(TestId::ErrorMsg).len(), usize::from(rejected));
        }
    }

    #[test]
    fn increment_always_clears_error(counter in 0u64..1_000_000, flagged in any::<bool>()) {
        let state = CounterState {
            counter,
            error: flagged.then_some(CounterError::FloorViolation),
        };
        let next = reduce(state, Message::Increment);
        prop_assert_eq!(next, CounterState::new(counter + 1));
    }

    #[test]
    fn increment_then_decrement_round_trips(counter in 0u64..1_000_000) {
        let state = CounterState::new(counter);
        let back = reduce(reduce(state, Message::Increment), Message::Decrement);
        prop_assert_eq!(back, state);
    }
}
