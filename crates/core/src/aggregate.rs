//! Aggregate trait for event-driven domain models.

/// Aggregate execution semantics (pure, deterministic).
///
/// - **Decision logic**: `handle(&self, cmd)` validates a command and returns events.
/// - **State mutation**: `apply(&mut self, event)` evolves state.
///
/// Aggregates must not perform IO. Rejected commands produce an error and no
/// events, so a failed guard never leaves state half-updated.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    ///
    /// Implementations should bump their `version()` by one per applied event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Number of events applied so far.
    fn version(&self) -> u64;

    /// Handle a command and apply the resulting events in order.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use crate::Aggregate;

    #[derive(Debug, Default)]
    struct Counter {
        value: i64,
        version: u64,
    }

    impl Aggregate for Counter {
        type Command = i64;
        type Event = i64;
        type Error = &'static str;

        fn apply(&mut self, event: &i64) {
            self.value += event;
            self.version += 1;
        }

        fn handle(&self, command: &i64) -> Result<Vec<i64>, &'static str> {
            if *command == 0 {
                return Err("zero");
            }
            Ok(vec![*command, *command])
        }

        fn version(&self) -> u64 {
            self.version
        }
    }

    #[test]
    fn execute_applies_every_emitted_event() {
        let mut counter = Counter::default();
        let events = counter.execute(&3).unwrap();

        assert_eq!(events, vec![3, 3]);
        assert_eq!(counter.value, 6);
        assert_eq!(counter.version(), 2);
    }

    #[test]
    fn rejected_command_leaves_state_alone() {
        let mut counter = Counter::default();
        assert_eq!(counter.execute(&0).unwrap_err(), "zero");
        assert_eq!(counter.value, 0);
        assert_eq!(counter.version(), 0);
    }
}
