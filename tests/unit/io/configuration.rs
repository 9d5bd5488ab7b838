//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use boxes::io::configuration::{
        DEFAULT_N_COLS, DEFAULT_N_ROWS, DEFAULT_SEED, MAX_INDIVIDUAL_PROGRESS_BARS, PALETTE_COLS,
        PALETTE_ROWS, RECENT_COLOR_CAPACITY, SQUARE_GRID_COLS, UNPAINTED_RGB,
    };

    // Tests the default grid matches the sheet the shows were designed for
    // Verified by changing the default dimensions
    #[test]
    fn test_default_grid() {
        assert_eq!(DEFAULT_N_COLS, 19);
        assert_eq!(DEFAULT_N_ROWS, 52);
        assert_eq!(SQUARE_GRID_COLS, 101);
    }

    // Tests the chooser layout and the cache sized to one chooser row
    // Verified by changing the palette dimensions
    #[test]
    fn test_palette_layout() {
        assert_eq!(PALETTE_COLS, 12);
        assert_eq!(PALETTE_ROWS, 10);
        assert_eq!(RECENT_COLOR_CAPACITY, PALETTE_COLS);
    }

    // Tests output defaults
    // Verified by changing the constant values
    #[test]
    fn test_output_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(UNPAINTED_RGB, [255, 255, 255]);
    }
}
