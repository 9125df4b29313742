use std::cell::Cell;

/// Identifies one in-flight load of a dependent selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// Monotonic load counter for a single selector.
///
/// Every load takes a ticket before its request goes out and only applies its
/// result while that ticket is still the newest one, so a slow response can
/// never overwrite the options of a later selection.
#[derive(Debug, Default)]
pub struct Generation {
    current: Cell<u64>,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }

    pub fn current(&self) -> Ticket {
        Ticket(self.current.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_current() {
        let generation = Generation::new();
        let a = generation.begin();
        assert!(generation.is_current(a));

        let b = generation.begin();
        assert!(!generation.is_current(a));
        assert!(generation.is_current(b));
        assert!(b > a);
        assert_eq!(generation.current(), b);
    }
}
