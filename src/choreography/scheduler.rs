//! Weighted interleaving of several patterns into one action stream
//!
//! Every pattern's remaining actions are precomputed, then the next action
//! is always drawn from a pattern chosen with probability proportional to
//! how many actions it has left. Patterns therefore tend to finish together
//! and the order within a pattern is never changed.

use crate::color::cache::RecentColorCache;
use crate::color::rich::Action;
use crate::io::error::Result;
use crate::io::sink::ActionSink;
use crate::math::probability::weighted_choice;
use crate::patterns::Pattern;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Pull-based interleaving of precomputed action queues
#[derive(Debug, Default)]
pub struct Interleaver {
    queues: Vec<VecDeque<Action>>,
}

impl Interleaver {
    /// Drain the remaining steps of every pattern into queues
    ///
    /// Queue `i` belongs to `patterns[i]`; each pattern's cursor ends up
    /// exhausted.
    pub fn new(patterns: &mut [Box<dyn Pattern>]) -> Self {
        let queues = patterns
            .iter_mut()
            .map(|pattern| {
                let actions: VecDeque<Action> = pattern.all_steps().into();
                debug!(pattern = pattern.name(), actions = actions.len(), "queued");
                actions
            })
            .collect();
        Self { queues }
    }

    /// Interleaver over ready-made action lists
    pub fn from_actions(actions: Vec<Vec<Action>>) -> Self {
        Self {
            queues: actions.into_iter().map(VecDeque::from).collect(),
        }
    }

    /// Actions still queued per pattern
    pub fn remaining(&self) -> Vec<usize> {
        self.queues.iter().map(VecDeque::len).collect()
    }

    /// Total number of actions still queued
    pub fn total_remaining(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Whether every queue is drained
    pub fn is_drained(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Pop the next action and the index of the pattern it came from
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, Action)> {
        if self.is_drained() {
            return None;
        }
        let weights: Vec<f64> = self.queues.iter().map(|queue| queue.len() as f64).collect();
        let index = weighted_choice(rng, &weights);
        self.queues
            .get_mut(index)
            .and_then(VecDeque::pop_front)
            .map(|action| (index, action))
    }
}

/// Interleaved action stream of several patterns, without executing it
pub fn interweave_actions<R: Rng + ?Sized>(
    patterns: &mut [Box<dyn Pattern>],
    rng: &mut R,
) -> Vec<(usize, Action)> {
    let mut interleaver = Interleaver::new(patterns);
    let mut stream = Vec::with_capacity(interleaver.total_remaining());
    while let Some(next) = interleaver.next(rng) {
        stream.push(next);
    }
    stream
}

/// Run several patterns with their steps interleaved
///
/// # Errors
///
/// Stops at and returns the first sink failure
pub fn interweave<R: Rng + ?Sized>(
    patterns: &mut [Box<dyn Pattern>],
    sink: &mut dyn ActionSink,
    cache: &mut RecentColorCache,
    rng: &mut R,
) -> Result<()> {
    let mut interleaver = Interleaver::new(patterns);
    info!(
        patterns = patterns.len(),
        actions = interleaver.total_remaining(),
        "interweaving"
    );
    while let Some((_, action)) = interleaver.next(rng) {
        action.apply(sink, cache)?;
    }
    Ok(())
}

/// Run every remaining step of a single pattern
///
/// # Errors
///
/// Stops at and returns the first sink failure
pub fn run_pattern(
    pattern: &mut dyn Pattern,
    sink: &mut dyn ActionSink,
    cache: &mut RecentColorCache,
) -> Result<()> {
    info!(pattern = pattern.name(), steps = pattern.n_steps(), "running");
    while let Some(action) = pattern.step() {
        action.apply(sink, cache)?;
        pattern.advance();
    }
    Ok(())
}
