//! Per-pattern progress tracking with a rolling window for large interleavings

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while patterns are interleaved
///
/// Shows one bar per pattern for small batches. Larger batches get an
/// overall bar plus a rolling window over the most recently active patterns.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    total_bar: Option<ProgressBar>,
    pattern_bars: Vec<ProgressBar>,
    /// Stores (`name`, `current_step`, `n_steps`) per pattern
    pattern_states: Vec<(String, usize, usize)>,
    // Pattern indices in order of most recent activity
    recent: Vec<usize>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static TOTAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Steps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Progress manager that draws nothing, used for quiet runs and tests
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            total_bar: None,
            pattern_bars: Vec::new(),
            pattern_states: Vec::new(),
            recent: Vec::new(),
        }
    }

    /// Set up bars for a batch of `(name, n_steps)` patterns, replacing any
    /// previous batch
    pub fn start_batch(&mut self, patterns: &[(String, usize)]) {
        self.clear_bars();
        self.pattern_states = patterns
            .iter()
            .map(|(name, n_steps)| (name.clone(), 0, *n_steps))
            .collect();
        self.recent = (0..patterns.len()).collect();

        // Switch to an overall bar for large batches to avoid terminal spam
        if patterns.len() > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let total: usize = patterns.iter().map(|(_, n_steps)| n_steps).sum();
            let total_bar = ProgressBar::new(total as u64);
            total_bar.set_style(TOTAL_STYLE.clone());
            self.total_bar = Some(self.multi_progress.add(total_bar));
        }

        let bars_to_create = patterns.len().min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.pattern_bars.push(self.multi_progress.add(pb));
        }
        self.update_bars();
    }

    /// Record that pattern `index` executed one more step
    pub fn step(&mut self, index: usize) {
        if let Some(state) = self.pattern_states.get_mut(index) {
            state.1 = (state.1 + 1).min(state.2);
        }
        if let Some(ref total_bar) = self.total_bar {
            total_bar.inc(1);
        }
        self.recent.retain(|&i| i != index);
        self.recent.push(index);
        self.update_bars();
    }

    /// Current `(step, n_steps)` of a pattern in the batch
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        self.pattern_states
            .get(index)
            .map(|(_, current, max)| (*current, *max))
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(ref total_bar) = self.total_bar {
            total_bar.finish_with_message("All patterns drawn");
        }
        self.clear_bars();
        let _ = self.multi_progress.clear();
    }

    fn clear_bars(&mut self) {
        for bar in self.pattern_bars.drain(..) {
            bar.finish_and_clear();
            self.multi_progress.remove(&bar);
        }
        if let Some(total_bar) = self.total_bar.take() {
            total_bar.finish_and_clear();
            self.multi_progress.remove(&total_bar);
        }
    }

    /// Update all progress bars to show the most recently active patterns
    fn update_bars(&self) {
        let start_idx = self
            .recent
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = self.recent.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, pattern_idx) in visible.iter().enumerate() {
            if let (Some(bar), Some((name, current, max))) = (
                self.pattern_bars.get(bar_idx),
                self.pattern_states.get(*pattern_idx),
            ) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                let mark = if current == max { "✓ " } else { "" };
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(format!("{mark}{name}"));
            }
        }
    }
}
