use std::fmt;

/// Tracks recursion depth used while parsing, so that deeply (or
/// adversarially) nested input fails with a diagnostic instead of
/// overflowing the call stack. Adapted from apollo-parser's `LimitTracker`.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct LimitTracker {
    current: usize,
    /// High-water mark for this limit.
    pub high: usize,
    pub limit: usize,
}

impl Default for LimitTracker {
    fn default() -> Self {
        Self::new(500)
    }
}

impl LimitTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            current: 0,
            high: 0,
            limit,
        }
    }

    pub fn limited(&self) -> bool {
        self.current > self.limit
    }

    pub fn consume(&mut self) {
        self.current += 1;
        if self.current > self.high {
            self.high = self.current;
        }
    }

    pub fn release(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

impl fmt::Debug for LimitTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recursion limit: {}, high: {}", self.limit, self.high)
    }
}

/// RAII guard returned by `Parser::enter_recursion`: decrements the limit
/// tracker when a recursive grammar production returns.
#[must_use]
pub(crate) struct RecursionGuard<'a> {
    tracker: &'a mut LimitTracker,
}

impl<'a> RecursionGuard<'a> {
    pub(crate) fn enter(tracker: &'a mut LimitTracker) -> Self {
        tracker.consume();
        Self { tracker }
    }

    pub(crate) fn limited(&self) -> bool {
        self.tracker.limited()
    }
}

impl Drop for RecursionGuard<'_> {
    fn drop(&mut self) {
        self.tracker.release();
    }
}
