// Event id generation strategies.

use uuid::Uuid;

/// Supplies unique ids for newly added events.
///
/// Injected into the store so the strategy is explicit instead of an
/// inline timestamp call, and so tests can use a deterministic one.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Collision-resistant random ids. The default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids for tests and deterministic tooling.
#[derive(Debug, Default)]
pub struct CounterIds {
    last: u64,
}

impl CounterIds {
    pub fn starting_at(next: u64) -> Self {
        Self {
            last: next.saturating_sub(1),
        }
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}
