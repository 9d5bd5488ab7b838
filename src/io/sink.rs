//! The action sink boundary and an in-memory recording sink
//!
//! A sink receives the primitive operations a recolor decomposes into. An
//! on-screen driver turns them into pointer and key events; the sinks in this
//! crate record or render them instead.

use crate::color::palette::PaletteSlot;
use crate::color::rgb::Rgb;
use crate::io::error::Result;
use crate::spatial::grid::Placement;

/// Receiver of recolor primitives, in the order they must happen
pub trait ActionSink {
    /// Select the cells of a placement, replacing the previous selection
    ///
    /// # Errors
    ///
    /// Returns an error if the placement cannot be selected
    fn select(&mut self, placement: &Placement) -> Result<()>;

    /// Open the fill color chooser
    ///
    /// # Errors
    ///
    /// Returns an error if the chooser cannot be opened
    fn open_color_chooser(&mut self) -> Result<()>;

    /// Pick a palette swatch in the open chooser
    ///
    /// # Errors
    ///
    /// Returns an error if the chooser is not open or the slot is invalid
    fn choose_standard(&mut self, slot: PaletteSlot) -> Result<()>;

    /// Enter a custom color in the open chooser
    ///
    /// # Errors
    ///
    /// Returns an error if the chooser is not open
    fn choose_custom(&mut self, rgb: Rgb) -> Result<()>;

    /// Pick the no-fill entry in the open chooser
    ///
    /// # Errors
    ///
    /// Returns an error if the chooser is not open
    fn choose_no_fill(&mut self) -> Result<()>;

    /// Reapply the most recently chosen fill
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been chosen yet
    fn repeat_last_color(&mut self) -> Result<()>;

    /// Send a named key such as `backspace` or `enter`
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be delivered
    fn press_key(&mut self, key: &str) -> Result<()>;
}

/// A single primitive received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// Placement selected
    Select(Placement),
    /// Chooser opened
    OpenColorChooser,
    /// Palette swatch picked
    ChooseStandard(PaletteSlot),
    /// Custom color entered
    ChooseCustom(Rgb),
    /// No-fill picked
    ChooseNoFill,
    /// Last fill reapplied
    RepeatLastColor,
    /// Key pressed
    PressKey(String),
}

/// Sink that only logs what it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in arrival order
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Selected placements in arrival order
    pub fn selections(&self) -> Vec<&Placement> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Select(placement) => Some(placement),
                _ => None,
            })
            .collect()
    }

    /// Number of times the chooser was opened
    pub fn chooser_opens(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::OpenColorChooser))
            .count()
    }

    /// Forget every recorded event
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: SinkEvent) -> Result<()> {
        tracing::trace!(?event, "sink event");
        self.events.push(event);
        Ok(())
    }
}

impl ActionSink for RecordingSink {
    fn select(&mut self, placement: &Placement) -> Result<()> {
        self.record(SinkEvent::Select(placement.clone()))
    }

    fn open_color_chooser(&mut self) -> Result<()> {
        self.record(SinkEvent::OpenColorChooser)
    }

    fn choose_standard(&mut self, slot: PaletteSlot) -> Result<()> {
        self.record(SinkEvent::ChooseStandard(slot))
    }

    fn choose_custom(&mut self, rgb: Rgb) -> Result<()> {
        self.record(SinkEvent::ChooseCustom(rgb))
    }

    fn choose_no_fill(&mut self) -> Result<()> {
        self.record(SinkEvent::ChooseNoFill)
    }

    fn repeat_last_color(&mut self) -> Result<()> {
        self.record(SinkEvent::RepeatLastColor)
    }

    fn press_key(&mut self, key: &str) -> Result<()> {
        self.record(SinkEvent::PressKey(key.to_string()))
    }
}
