//! Calibration providers and the portable calibration record encoding

use crate::io::error::{BoxesError, Result};
use crate::spatial::geometry::{CalibrationRecord, ScreenAnchors};
use crate::spatial::grid::GridShape;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Source of a calibration record
pub trait CalibrationProvider {
    /// Produce a calibration, or `None` when the user declines
    ///
    /// # Errors
    ///
    /// Returns an error if the calibration cannot be determined
    fn calibrate(&mut self) -> Result<Option<CalibrationRecord>>;
}

impl CalibrationRecord {
    /// Encode the record as base64 of its JSON form
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if serialization fails
    pub fn to_encoded(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(|e| BoxesError::MalformedRecord {
            reason: e.to_string(),
        })?;
        Ok(STANDARD.encode(json))
    }

    /// Decode and validate a record produced by [`Self::to_encoded`]
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` if the text is not valid base64, not a
    /// record, or describes an invalid calibration
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| BoxesError::MalformedRecord {
                reason: format!("invalid base64: {e}"),
            })?;
        let record: Self =
            serde_json::from_slice(&bytes).map_err(|e| BoxesError::MalformedRecord {
                reason: format!("invalid record: {e}"),
            })?;
        record.validate().map_err(|e| BoxesError::MalformedRecord {
            reason: e.to_string(),
        })?;
        Ok(record)
    }
}

/// Calibration from anchors measured by an external screen locator
///
/// The anchor file is the JSON form of [`ScreenAnchors`]. With a
/// confirmation reader attached, the user must answer `y` or `yes` before
/// the record is produced.
pub struct AnchorFileCalibration {
    path: PathBuf,
    grid: GridShape,
    confirmation: Option<Box<dyn BufRead>>,
}

impl AnchorFileCalibration {
    /// Provider reading `path` for a grid of the given shape
    pub fn new(path: impl Into<PathBuf>, grid: GridShape) -> Self {
        Self {
            path: path.into(),
            grid,
            confirmation: None,
        }
    }

    /// Ask for confirmation on `reader` before calibrating
    #[must_use]
    pub fn with_confirmation(mut self, reader: impl BufRead + 'static) -> Self {
        self.confirmation = Some(Box::new(reader));
        self
    }

    /// Location of the anchor file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_anchors(&self) -> Result<ScreenAnchors> {
        if !self.path.exists() {
            return Err(BoxesError::MissingAsset {
                path: self.path.clone(),
            });
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| BoxesError::FileSystem {
            path: self.path.clone(),
            operation: "read anchors",
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| BoxesError::MalformedRecord {
            reason: format!("invalid anchor file '{}': {e}", self.path.display()),
        })
    }

    // User-facing prompts must reach the terminal even when logging is filtered
    #[allow(clippy::print_stderr)]
    fn confirmed(&mut self) -> Result<bool> {
        let Some(reader) = self.confirmation.as_mut() else {
            return Ok(true);
        };
        eprint!(
            "Calibrate a {}x{} grid from '{}'? [y/N] ",
            self.grid.n_cols,
            self.grid.n_rows,
            self.path.display()
        );
        let mut answer = String::new();
        reader
            .read_line(&mut answer)
            .map_err(|e| BoxesError::FileSystem {
                path: PathBuf::from("<stdin>"),
                operation: "read confirmation",
                source: e,
            })?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl CalibrationProvider for AnchorFileCalibration {
    fn calibrate(&mut self) -> Result<Option<CalibrationRecord>> {
        let anchors = self.read_anchors()?;
        if !self.confirmed()? {
            warn!("calibration declined");
            return Ok(None);
        }
        let record = CalibrationRecord::from_anchors(&anchors, self.grid)?;
        info!(
            cols = record.n_cols,
            rows = record.n_rows,
            aspect = record.aspect_ratio(),
            "calibrated"
        );
        Ok(Some(record))
    }
}

/// Provider returning a predetermined answer
#[derive(Debug, Clone)]
pub struct FixedCalibration {
    record: Option<CalibrationRecord>,
}

impl FixedCalibration {
    /// Provider that always yields `record`
    pub const fn new(record: CalibrationRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// Provider that always declines
    pub const fn declined() -> Self {
        Self { record: None }
    }
}

impl CalibrationProvider for FixedCalibration {
    fn calibrate(&mut self) -> Result<Option<CalibrationRecord>> {
        Ok(self.record.clone())
    }
}
