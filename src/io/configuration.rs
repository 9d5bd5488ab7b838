//! Grid, palette and pattern constants plus runtime configuration defaults

// Grid geometry of the reference sheet
/// Default number of grid columns
pub const DEFAULT_N_COLS: usize = 19;
/// Default number of grid rows
pub const DEFAULT_N_ROWS: usize = 52;

// Columns of the square grid variant; rows are kept
/// Number of columns after switching to the square grid
pub const SQUARE_GRID_COLS: usize = 101;

/// Number of columns in the standard color palette
pub const PALETTE_COLS: usize = 12;
/// Number of rows in the standard color palette
pub const PALETTE_ROWS: usize = 10;

// Recent-color history holds one palette row worth of entries
/// Capacity of the recent-color cache
pub const RECENT_COLOR_CAPACITY: usize = PALETTE_COLS;
/// Default summed channel tolerance for recent-color matches
pub const DEFAULT_COLOR_TOLERANCE: u32 = 0;

// Default values for configurable parameters
/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;
/// Default number of show repetitions
pub const DEFAULT_ROUNDS: usize = 1;

/// Euclidean distance under which two colors share a group
pub const COLOR_GROUPING_TOLERANCE: f64 = 10.0;
/// Alpha values at or below this are treated as transparent
pub const ALPHA_THRESHOLD: u8 = 10;

// Pattern defaults
/// Length of a single icicle growth segment
pub const ICICLE_SEGMENT_SIZE: usize = 8;
/// Weight of staying on the rolled icicle lane
pub const ICICLE_STAY_WEIGHT: f64 = 10.0;
/// Weight shifted toward a lagging neighbor lane
pub const ICICLE_MIGRATE_WEIGHT: f64 = 2.0;
/// Width of a snake band in cells
pub const SNAKE_WIDTH: usize = 2;
/// Length of a snake segment along its band
pub const SNAKE_SEGMENT_SIZE: usize = 4;
/// Radius at which a radial blend reaches its outer color
pub const GAUSSIAN_RADIUS: f64 = 1.5;
/// Random walkers launched per cloud
pub const CLOUD_DIFFUSERS: usize = 3;
/// Steps per cloud walker
pub const CLOUD_DIFFUSER_STEPS: usize = 10;
/// Disc radius of a single cloud walker step
pub const CLOUD_STEP_RADIUS: f64 = 1.8;
/// Rejected disc draws before a walker gives up
pub const CLOUD_MAX_DRAW_ATTEMPTS: usize = 16;
/// Default game of life frame count
pub const LIFE_FRAMES: usize = 100;
/// Default alive density of a random game of life soup
pub const LIFE_SOUP_DENSITY: f64 = 0.3;
/// Grouping tolerance of the logo image
pub const LOGO_COLOR_TOLERANCE: f64 = 40.0;
/// Alpha threshold of the logo image
pub const LOGO_ALPHA_THRESHOLD: u8 = 30;
/// Palette sweep block height in cells
pub const SWEEP_BLOCK_ROWS: usize = 4;
/// Palette sweep block width in cells
pub const SWEEP_BLOCK_COLS: usize = 2;

// Physical cell size of the reference sheet, in centimeters
/// Default cell width
pub const DEFAULT_CELL_WIDTH: f64 = 2.26;
/// Default cell height
pub const DEFAULT_CELL_HEIGHT: f64 = 0.45;

// Preview output settings
/// Pixels per cell edge in exported previews
pub const PREVIEW_CELL_PIXELS: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Background color of cells that were never painted
pub const UNPAINTED_RGB: [u8; 3] = [255, 255, 255];

// Progress bar display settings
/// Number of patterns shown with individual progress bars
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
