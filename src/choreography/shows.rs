//! Named programs composed from patterns
//!
//! Every show starts from a cleared grid and repeats its program `rounds`
//! times. Shows that need square cells run on a 101-column variant of the
//! calibration, see [`Show::calibration`].

use crate::choreography::stage::Stage;
use crate::color::paint::{Color, CyclerColor, RandomColor};
use crate::color::palette::{PaletteGroup, StandardColor, bounce, filter_colors, random_pool};
use crate::color::rich::SharedColor;
use crate::io::configuration::{
    ICICLE_SEGMENT_SIZE, LIFE_FRAMES, LOGO_ALPHA_THRESHOLD, LOGO_COLOR_TOLERANCE, SQUARE_GRID_COLS,
    SWEEP_BLOCK_COLS, SWEEP_BLOCK_ROWS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_raster;
use crate::patterns::palette_sweep::PaletteFunction;
use crate::patterns::{
    Boxes, Clouds, DiagonalFill, FitMode, GameOfLife, GaussianCells, IcicleDirection, Icicles,
    ImagePattern, LifeSeed, Lights, LightsAxis, Pattern, PaletteSweep, RandomCells, Snake,
    SnakeDirection, Spiral, SpiralKind,
};
use crate::spatial::geometry::CalibrationRecord;
use crate::spatial::grid::Cell;
use clap::ValueEnum;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::f64::consts::PI;
use std::path::Path;
use tracing::info;

/// A named drawing program
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Show {
    /// Alternating inward and outward spirals through bounced golds
    Spirals,
    /// Three palette sweeps followed by a diagonal fill
    Palette,
    /// Snakes in random directions through random hue groups
    Snakes,
    /// Interleaved row and column lights, then a blank-out
    Crosses,
    /// Rising icicle fires, then a night sky
    Fires,
    /// Gray fill, interleaved lights, then an image
    Logo,
    /// A Gosper glider gun on square cells
    Gliders,
    /// Sampler-colored clouds per random hue group
    Clouds,
    /// Palette sweeps of randomly composed channel functions
    RandomFun,
    /// Cycling box packings across all color groups
    Boxes,
    /// Random cells, then a radial blend between two random colors
    Gaussian,
}

impl Show {
    /// Calibration the show draws on
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the square grid cannot be derived
    pub fn calibration(self, calib: &CalibrationRecord) -> Result<CalibrationRecord> {
        match self {
            Self::Logo | Self::Gliders => calib.to_square_grid(SQUARE_GRID_COLS),
            _ => Ok(calib.clone()),
        }
    }
}

/// Clear the grid, then perform a show `rounds` times
///
/// # Errors
///
/// Returns `InvalidParameter` when the logo show has no image, or the first
/// pattern or sink failure
pub fn run_show(
    show: Show,
    calib: &CalibrationRecord,
    stage: &mut Stage<'_>,
    rounds: usize,
    image: Option<&Path>,
) -> Result<()> {
    let calib = show.calibration(calib)?;
    info!(?show, rounds, "show starting");
    stage.reset_grid(&calib)?;

    match show {
        Show::Spirals => spirals(stage, &calib, rounds),
        Show::Palette => palette(stage, &calib, rounds),
        Show::Snakes => snakes(stage, &calib, rounds),
        Show::Crosses => crosses(stage, &calib, rounds),
        Show::Fires => fires(stage, &calib, rounds),
        Show::Logo => {
            let image = image.ok_or_else(|| {
                invalid_parameter("image", &"none", &"the logo show needs an image")
            })?;
            logo(stage, &calib, rounds, image)
        }
        Show::Gliders => gliders(stage, &calib, rounds),
        Show::Clouds => clouds(stage, &calib, rounds),
        Show::RandomFun => random_fun(stage, &calib, rounds),
        Show::Boxes => boxes(stage, &calib, rounds),
        Show::Gaussian => gaussian(stage, &calib, rounds),
    }?;

    info!(?show, "show finished");
    Ok(())
}

fn standard(name: &str) -> Result<SharedColor> {
    Color::named(name).map(SharedColor::new)
}

fn cycler(colors: Vec<StandardColor>, offset: usize) -> Result<SharedColor> {
    CyclerColor::new(colors, offset).map(SharedColor::new)
}

fn random_hue(stage: &mut Stage<'_>) -> PaletteGroup {
    PaletteGroup::HUES
        .choose(stage.rng())
        .copied()
        .unwrap_or(PaletteGroup::Golds)
}

fn spirals(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    let golds = bounce(&filter_colors(&PaletteGroup::Golds.colors(), true, true));
    let n = golds.len();
    let (mut ci, mut cj) = (0, n / 2);
    for _ in 0..rounds {
        for _ in 0..n {
            let (Some(&inward), Some(&outward)) = (golds.get(ci), golds.get(cj)) else {
                break;
            };
            ci = (ci + 1) % n;
            cj = (cj + 1) % n;
            stage.run(Spiral::new(calib, SpiralKind::Inward, SharedColor::new(inward)))?;
            stage.run(Spiral::new(calib, SpiralKind::Outward, SharedColor::new(outward)))?;
        }
    }
    Ok(())
}

fn sin_channel(t: f64) -> f64 {
    (t * PI).sin().mul_add(127.0, 128.0)
}

fn cos_channel(t: f64) -> f64 {
    (t * PI).cos().mul_add(127.0, 128.0)
}

fn palette(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    for _ in 0..rounds {
        let functions: [PaletteFunction; 3] = [
            Box::new(|x, y| [255.0 * x, 255.0 * y, 255.0 * (1.0 - x) * (1.0 - y)]),
            Box::new(|x, y| [255.0 * (1.0 - x) * (1.0 - y), 255.0 * x, 255.0 * (1.0 - y)]),
            Box::new(|x, y| [sin_channel(x), sin_channel(y), sin_channel(x + y)]),
        ];
        for function in functions {
            stage.run(PaletteSweep::with_function(
                calib,
                function,
                SWEEP_BLOCK_ROWS,
                SWEEP_BLOCK_COLS,
                true,
            )?)?;
        }
        let blues = filter_colors(&PaletteGroup::Blues.colors(), true, true);
        stage.run(DiagonalFill::new(calib, cycler(blues, 0)?))?;
    }
    Ok(())
}

fn snakes(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    const DIRECTIONS: [SnakeDirection; 4] = [
        SnakeDirection::Up,
        SnakeDirection::Down,
        SnakeDirection::Left,
        SnakeDirection::Right,
    ];
    for _ in 0..rounds {
        let hue = random_hue(stage);
        let colors = bounce(&filter_colors(&hue.colors(), true, true));
        let width = stage.rng().random_range(1..=3);
        let segment_size = stage.rng().random_range(3..=5);
        let direction = DIRECTIONS
            .choose(stage.rng())
            .copied()
            .unwrap_or(SnakeDirection::Down);
        stage.run(Snake::with_sizes(
            calib,
            direction,
            width,
            segment_size,
            cycler(colors, 0)?,
        )?)?;
    }
    Ok(())
}

fn crosses(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    let warm = [
        PaletteGroup::Golds,
        PaletteGroup::Oranges,
        PaletteGroup::Bricks,
        PaletteGroup::Reds,
    ];
    let cold = [
        PaletteGroup::Indigos,
        PaletteGroup::Blues,
        PaletteGroup::Teals,
        PaletteGroup::Greens,
    ];
    let (mut palettes_a, mut palettes_b) = (warm, cold);

    for _ in 0..rounds {
        let group = palettes_a
            .choose(stage.rng())
            .copied()
            .unwrap_or(PaletteGroup::Golds);
        let colors = group.colors();
        let mut candidates = filter_colors(&colors, false, false);
        candidates.extend(filter_colors(&colors, true, true));
        candidates.shuffle(stage.rng());
        candidates.truncate(colors.len());

        let mut patterns: Vec<Box<dyn Pattern>> = Vec::new();
        let mut axis = LightsAxis::Rows;
        for &color in &candidates {
            let seed = stage.seed();
            patterns.push(Box::new(Lights::new(calib, axis, SharedColor::new(color), seed)));
            axis = match axis {
                LightsAxis::Rows => LightsAxis::Columns,
                LightsAxis::Columns => LightsAxis::Rows,
            };
        }
        stage.interweave(patterns)?;

        let blank = candidates
            .choose(stage.rng())
            .copied()
            .unwrap_or(StandardColor::BLACK);
        let blank = SharedColor::new(blank);
        let (rows_seed, cols_seed) = (stage.seed(), stage.seed());
        stage.interweave(vec![
            Box::new(Lights::new(calib, LightsAxis::Rows, blank.clone(), rows_seed)),
            Box::new(Lights::new(calib, LightsAxis::Columns, blank, cols_seed)),
        ])?;

        if stage.rng().random_bool(0.25) {
            std::mem::swap(&mut palettes_a, &mut palettes_b);
        }
    }
    Ok(())
}

fn fires(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    const GOLDS: [&str; 6] = [
        "dark_gold_1",
        "dark_gold_1",
        "gold",
        "gold",
        "light_gold_1",
        "light_gold_2",
    ];
    const ORANGES: [&str; 6] = [
        "dark_orange_1",
        "dark_orange_1",
        "orange",
        "orange",
        "orange",
        "light_orange_1",
    ];
    const BRICKS: [&str; 7] = [
        "dark_brick_1",
        "dark_brick_1",
        "brick",
        "brick",
        "brick",
        "light_brick_1",
        "light_brick_1",
    ];
    const SKY: [&str; 5] = [
        "blue",
        "dark_blue_1",
        "dark_blue_2",
        "dark_blue_3",
        "dark_indigo_3",
    ];

    for _ in 0..rounds {
        let mut patterns: Vec<Box<dyn Pattern>> = Vec::new();
        for names in [GOLDS.as_slice(), ORANGES.as_slice(), BRICKS.as_slice()] {
            let color = SharedColor::new(CyclerColor::from_names(names, 0)?);
            let seed = stage.seed();
            patterns.push(Box::new(Icicles::with_segment_size(
                calib,
                IcicleDirection::Up,
                ICICLE_SEGMENT_SIZE,
                color,
                seed,
            )?));
        }
        stage.interweave(patterns)?;

        let offset = stage.rng().random_range(0..SKY.len());
        let sky = CyclerColor::from_names(&bounce(&SKY), offset)?;
        stage.run(Snake::new(calib, SnakeDirection::Down, SharedColor::new(sky)))?;
    }
    Ok(())
}

fn logo(
    stage: &mut Stage<'_>,
    calib: &CalibrationRecord,
    rounds: usize,
    image: &Path,
) -> Result<()> {
    const GRAYS: [&str; 4] = ["dark_gray_1", "gray", "light_gray_1", "light_gray_2"];
    const LIGHTS: [&str; 7] = [
        "dark_brick_1",
        "brick",
        "light_brick_1",
        "light_brick_1",
        "light_brick_2",
        "dark_orange_1",
        "orange",
    ];

    let raster = load_raster(image)?;
    for _ in 0..rounds {
        let grays = SharedColor::new(CyclerColor::from_names(&GRAYS, 0)?);
        stage.run(Snake::with_sizes(
            calib,
            SnakeDirection::Down,
            (calib.n_rows / 10).max(1),
            calib.n_cols,
            grays,
        )?)?;

        let mut patterns: Vec<Box<dyn Pattern>> = Vec::new();
        let mut axis = LightsAxis::Rows;
        for name in LIGHTS {
            let seed = stage.seed();
            patterns.push(Box::new(Lights::new(calib, axis, standard(name)?, seed)));
            axis = match axis {
                LightsAxis::Rows => LightsAxis::Columns,
                LightsAxis::Columns => LightsAxis::Rows,
            };
        }
        stage.interweave(patterns)?;

        let seed = stage.seed();
        stage.run(ImagePattern::with_options(
            calib,
            &raster,
            FitMode::Resize,
            LOGO_COLOR_TOLERANCE,
            LOGO_ALPHA_THRESHOLD,
            false,
            seed,
        )?)?;
    }
    Ok(())
}

/// Live cells of a Gosper glider gun as `(col, row)` offsets
#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: [(usize, usize); 36] = [
    // left block
    (1, 5), (1, 6), (2, 5), (2, 6),
    // left-facing blob
    (11, 5), (11, 6), (11, 7),
    (12, 4), (12, 8),
    (13, 3), (13, 9),
    (14, 3), (14, 9),
    (15, 6),
    (16, 4), (16, 8),
    (17, 5), (17, 6), (17, 7),
    (18, 6),
    // ship
    (21, 3), (21, 4), (21, 5),
    (22, 3), (22, 4), (22, 5),
    (23, 2), (23, 6),
    (25, 1), (25, 2), (25, 6), (25, 7),
    // right block
    (35, 3), (35, 4),
    (36, 3), (36, 4),
];

fn gliders(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    let gun: Vec<Cell> = GOSPER_GLIDER_GUN
        .iter()
        .map(|&(col, row)| Cell::new(col + 1, row + 1))
        .collect();
    let seed = stage.seed();
    stage.run(GameOfLife::new(
        calib,
        LifeSeed::Cells(gun),
        LIFE_FRAMES.saturating_mul(rounds),
        false,
        standard("lime")?,
        standard("dark_gray_1")?,
        seed,
    )?)
}

fn clouds(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    for _ in 0..rounds {
        let hue = random_hue(stage);
        let pool = filter_colors(&hue.colors(), true, true);
        let color_seed = stage.seed();
        let color = SharedColor::new(RandomColor::sampler(pool, color_seed)?);
        let seed = stage.seed();
        stage.run(Clouds::new(calib, color, seed))?;
    }
    Ok(())
}

type ChannelFunction = fn(f64, f64) -> f64;

// Building blocks for randomly composed palette functions
const CHANNEL_FUNCTIONS: [ChannelFunction; 14] = [
    |x, _| 255.0 * x,
    |_, y| 255.0 * y,
    |x, _| 255.0 * (1.0 - x),
    |_, y| 255.0 * (1.0 - y),
    |x, y| 255.0 * x * y,
    |x, y| 255.0 * (1.0 - x) * (1.0 - y),
    |x, y| 255.0 * x * (1.0 - y),
    |x, y| 255.0 * (1.0 - x) * y,
    |x, _| sin_channel(x),
    |_, y| sin_channel(y),
    |x, y| sin_channel(x + y),
    |x, _| cos_channel(x),
    |_, y| cos_channel(y),
    |x, y| cos_channel(x + y),
];

/// Palette function whose channels are drawn from a fixed library of
/// gradients and waves
pub fn random_palette_function<R: Rng + ?Sized>(rng: &mut R) -> PaletteFunction {
    let mut pick = || {
        CHANNEL_FUNCTIONS
            .choose(&mut *rng)
            .copied()
            .unwrap_or(|x, _| 255.0 * x)
    };
    let (red, green, blue) = (pick(), pick(), pick());
    Box::new(move |x, y| [red(x, y), green(x, y), blue(x, y)])
}

fn random_fun(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    for _ in 0..rounds {
        let function = random_palette_function(stage.rng());
        let d_rows = stage.rng().random_range(3..=5);
        let d_cols = stage.rng().random_range(1..=3);
        stage.run(PaletteSweep::with_function(
            calib, function, d_rows, d_cols, true,
        )?)?;
    }
    Ok(())
}

fn boxes(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    let groups = std::iter::once(PaletteGroup::Grays).chain(PaletteGroup::HUES);
    let groups: Vec<PaletteGroup> = groups.collect();
    let mut offset = 0;
    for _ in 0..rounds {
        for group in &groups {
            let palette = CyclerColor::new(bounce(&group.colors()), offset)?;
            let color = SharedColor::new(palette);
            let seed = stage.seed();
            stage.run(Boxes::new(calib, color.clone(), seed)?)?;
            if let Some(Color::Cycler(palette)) = color.snapshot() {
                offset = palette.current_index();
            }
        }
    }
    Ok(())
}

fn gaussian(stage: &mut Stage<'_>, calib: &CalibrationRecord, rounds: usize) -> Result<()> {
    let pool = random_pool(true, true);
    for _ in 0..rounds {
        let changing_seed = stage.seed();
        let changing = SharedColor::new(RandomColor::changing(changing_seed)?);
        let seed = stage.seed();
        stage.run(RandomCells::new(calib, changing, seed))?;

        let picks: Vec<StandardColor> = pool.choose_multiple(stage.rng(), 2).copied().collect();
        let (Some(inner), Some(outer)) = (picks.first(), picks.get(1)) else {
            break;
        };
        let seed = stage.seed();
        stage.run(GaussianCells::new(calib, inner.rgb(), outer.rgb(), seed)?)?;
    }
    Ok(())
}
