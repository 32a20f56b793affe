use std::collections::VecDeque;

/// Maximum number of commands a [`History`] keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// A bounded, insertion-ordered log of accepted commands.
///
/// Holds at most [`HISTORY_CAPACITY`] entries. Recording a command into a
/// full history evicts the oldest one.
///
/// # Example
/// ```
/// use tally::history::History;
///
/// let mut history = History::new();
/// for i in 0..11 {
///     history.record(format!("x = {i}"));
/// }
///
/// let entries = history.snapshot();
/// assert_eq!(entries.len(), 10);
/// assert_eq!(entries.first().map(String::as_str), Some("x = 1"));
/// assert_eq!(entries.last().map(String::as_str), Some("x = 10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAPACITY) }
    }

    /// Restores a history from previously saved entries, oldest first.
    ///
    /// Only the most recent [`HISTORY_CAPACITY`] entries are kept.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
        where I: IntoIterator<Item = String>
    {
        let mut history = Self::new();
        for entry in entries {
            history.record(entry);
        }
        history
    }

    /// Appends a command, evicting the oldest entry when full.
    pub fn record(&mut self, line: impl Into<String>) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(line.into());
    }

    /// Returns a copy of the entries, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
