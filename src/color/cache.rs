use crate::color::rgb::Rgb;
use crate::io::configuration::{DEFAULT_COLOR_TOLERANCE, RECENT_COLOR_CAPACITY};
use std::collections::VecDeque;

/// Bounded most-recent-first history of colors applied through a sink
///
/// `None` entries record a no-fill apply and never match a later target.
#[derive(Debug, Clone)]
pub struct RecentColorCache {
    entries: VecDeque<Option<Rgb>>,
    capacity: usize,
    tolerance: u32,
}

impl Default for RecentColorCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentColorCache {
    /// Empty cache with the chooser's capacity and exact matching
    pub fn new() -> Self {
        Self::with_capacity(RECENT_COLOR_CAPACITY)
    }

    /// Empty cache holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            tolerance: DEFAULT_COLOR_TOLERANCE,
        }
    }

    /// Accept matches whose summed channel difference is within `tolerance`
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Most recent entry, if any color has been applied
    pub fn most_recent(&self) -> Option<Option<Rgb>> {
        self.entries.front().copied()
    }

    /// Whether `target` can be reapplied with the cheap repeat-last action
    pub fn matches_most_recent(&self, target: Option<Rgb>) -> bool {
        match (target, self.most_recent()) {
            (Some(target), Some(Some(recent))) => recent.manhattan_distance(target) <= self.tolerance,
            _ => false,
        }
    }

    /// Record an applied color
    pub fn push(&mut self, color: Option<Rgb>) {
        self.entries.push_front(color);
        self.entries.truncate(self.capacity);
    }

    /// Entries from most to least recent
    pub fn iter(&self) -> impl Iterator<Item = &Option<Rgb>> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if nothing has been applied yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
