use crate::choreography::scheduler::Interleaver;
use crate::color::cache::RecentColorCache;
use crate::color::paint::Color;
use crate::color::rich::SharedColor;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::sink::ActionSink;
use crate::patterns::Pattern;
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::Placement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Everything a show draws with: the sink, the recent-color cache, a seeded
/// random source and optional progress bars
pub struct Stage<'a> {
    sink: &'a mut dyn ActionSink,
    cache: &'a mut RecentColorCache,
    rng: StdRng,
    progress: Option<ProgressManager>,
}

impl<'a> Stage<'a> {
    /// Stage drawing into `sink`, seeded for reproducible shows
    pub fn new(sink: &'a mut dyn ActionSink, cache: &'a mut RecentColorCache, seed: u64) -> Self {
        Self {
            sink,
            cache,
            rng: StdRng::seed_from_u64(seed),
            progress: None,
        }
    }

    /// Report every interleaving through progress bars
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Random source of the stage
    pub const fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Fresh seed for a pattern or color
    pub fn seed(&mut self) -> u64 {
        self.rng.random()
    }

    /// Clear fills and contents of the whole grid
    ///
    /// Selects every cell, removes the fill, then deletes contents with
    /// `backspace` and confirms with `enter`.
    ///
    /// # Errors
    ///
    /// Propagates sink failures
    pub fn reset_grid(&mut self, calib: &CalibrationRecord) -> Result<()> {
        info!(cols = calib.n_cols, rows = calib.n_rows, "resetting grid");
        self.sink.select(&Placement::Rect(calib.grid().full_rect()))?;
        SharedColor::new(Color::NoFill).apply(self.sink, self.cache)?;
        self.sink.press_key("backspace")?;
        self.sink.press_key("enter")
    }

    /// Run patterns with their steps interleaved
    ///
    /// # Errors
    ///
    /// Stops at and returns the first sink failure
    pub fn interweave(&mut self, mut patterns: Vec<Box<dyn Pattern>>) -> Result<()> {
        let names: Vec<(String, usize)> = patterns
            .iter()
            .map(|pattern| {
                (
                    pattern.name().to_string(),
                    pattern.n_steps().saturating_sub(pattern.current_step()),
                )
            })
            .collect();
        let mut interleaver = Interleaver::new(&mut patterns);
        info!(
            patterns = names.len(),
            actions = interleaver.total_remaining(),
            "interweaving"
        );

        if let Some(progress) = self.progress.as_mut() {
            progress.start_batch(&names);
        }
        while let Some((index, action)) = interleaver.next(&mut self.rng) {
            action.apply(self.sink, self.cache)?;
            if let Some(progress) = self.progress.as_mut() {
                progress.step(index);
            }
        }
        if let Some(progress) = self.progress.as_mut() {
            progress.finish();
        }
        Ok(())
    }

    /// Run every step of one pattern
    ///
    /// # Errors
    ///
    /// Stops at and returns the first sink failure
    pub fn run(&mut self, pattern: impl Pattern + 'static) -> Result<()> {
        self.interweave(vec![Box::new(pattern)])
    }
}
