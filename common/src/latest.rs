//! "Latest input wins" bookkeeping for lookups that can overlap.
//!
//! Every request is stamped with a [`Ticket`] when issued. When its response
//! arrives the owner asks [`RequestGeneration::is_current`]; a response for
//! an older ticket is dropped instead of overwriting newer results.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default, Clone)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Stamps a new request, making every earlier ticket stale.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }

    /// Invalidates whatever is in flight without issuing a new ticket.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

/// A list filled by overlapping lookups, such as typeahead suggestions.
///
/// Only the answer to the most recently issued ticket is accepted. Closing
/// the list also retires the ticket in flight, so a late answer cannot
/// reopen it.
#[derive(Debug, Clone)]
pub struct LatestList<T> {
    items: Vec<T>,
    generation: RequestGeneration,
}

impl<T> Default for LatestList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            generation: RequestGeneration::default(),
        }
    }
}

impl<T> LatestList<T> {
    pub fn issue(&mut self) -> Ticket {
        self.generation.issue()
    }

    /// Replaces the items if `ticket` is still current. Returns whether it was.
    pub fn accept(&mut self, ticket: Ticket, items: Vec<T>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.items = items;
        true
    }

    /// Empties the list and drops any pending answer. Returns whether
    /// anything was visible.
    pub fn dismiss(&mut self) -> bool {
        self.generation.invalidate();
        let was_open = !self.items.is_empty();
        self.items.clear();
        was_open
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
