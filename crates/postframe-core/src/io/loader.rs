/// Identifies one load request. Only the most recent ticket is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A load result carrying the ticket it was requested with.
#[derive(Clone, Debug)]
pub struct Tagged<T> {
    pub ticket: LoadTicket,
    pub value: T,
}

impl<T> Tagged<T> {
    pub fn new(ticket: LoadTicket, value: T) -> Self {
        Self { ticket, value }
    }
}

/// Hands out load tickets; a newer request makes all older ones stale.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    generation: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
