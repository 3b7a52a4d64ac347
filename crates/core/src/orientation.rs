use serde::{Deserialize, Serialize};

use crate::config::PalletConfig;
use crate::dimensions::BoxDimensions;
use crate::errors::PlanError;

/// Shared tolerance for floored floating-point divisions.
///
/// Deck and height fits floor a quotient of two reals; without the
/// tolerance, an extent that divides the pallet dimension exactly can be
/// floored one short by rounding error.
pub const EPSILON: f64 = 1e-9;

/// Which original box dimension a slot of an orientation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Axis {
    pub fn of(self, dims: &BoxDimensions) -> f64 {
        match self {
            Self::Length => dims.length,
            Self::Width => dims.width,
            Self::Height => dims.height,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Length => 'L',
            Self::Width => 'W',
            Self::Height => 'H',
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = PlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::Length),
            "W" => Ok(Self::Width),
            "H" => Ok(Self::Height),
            other => Err(PlanError::InvalidOrientationToken(other.to_owned())),
        }
    }
}

/// One of the six axis-aligned stances, before any fitting has happened.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationSkeleton {
    pub deck_x: f64,
    pub deck_y: f64,
    pub up_z: f64,
    pub deck_x_axis: Axis,
    pub deck_y_axis: Axis,
    pub up_axis: Axis,
}

/// The six ways to stand a box: each dimension takes a turn as the vertical
/// axis, and the remaining two cover the deck in both orders.
pub fn enumerate_orientations(dims: &BoxDimensions) -> [OrientationSkeleton; 6] {
    let stance = |up: Axis, deck_x: Axis, deck_y: Axis| OrientationSkeleton {
        deck_x: deck_x.of(dims),
        deck_y: deck_y.of(dims),
        up_z: up.of(dims),
        deck_x_axis: deck_x,
        deck_y_axis: deck_y,
        up_axis: up,
    };

    [
        stance(Axis::Height, Axis::Length, Axis::Width),
        stance(Axis::Height, Axis::Width, Axis::Length),
        stance(Axis::Width, Axis::Length, Axis::Height),
        stance(Axis::Width, Axis::Height, Axis::Length),
        stance(Axis::Length, Axis::Width, Axis::Height),
        stance(Axis::Length, Axis::Height, Axis::Width),
    ]
}

/// Best grid fit of one footprint on the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckFit {
    pub per_layer: u64,
    pub nx: u32,
    pub ny: u32,
    /// Whether the winning read of the deck put the 48 in side along x.
    pub swapped: bool,
}

fn grid_count(extent: f64, span: f64) -> u32 {
    if span <= 0.0 {
        return 0;
    }
    let fit = ((extent + EPSILON) / span).floor();
    if fit <= 0.0 {
        0
    } else {
        fit as u32
    }
}

/// Fit a footprint onto the deck, trying both reads of the pallet.
///
/// The box is never rotated here; the forklift may approach the pallet
/// long-edge-first or short-edge-first, so the deck itself can be read as
/// 42-along-x or 48-along-x. The denser read wins; an exact tie keeps the
/// non-swapped (42-along-x) read.
pub fn fit_deck(config: &PalletConfig, deck_x: f64, deck_y: f64) -> DeckFit {
    let reads = [
        (config.deck_long, config.deck_wide, false),
        (config.deck_wide, config.deck_long, true),
    ];

    let mut best = DeckFit { per_layer: 0, nx: 0, ny: 0, swapped: false };
    for (along_x, along_y, swapped) in reads {
        let nx = grid_count(along_x, deck_x);
        let ny = grid_count(along_y, deck_y);
        let fit = DeckFit { per_layer: u64::from(nx) * u64::from(ny), nx, ny, swapped };
        if fit.per_layer > best.per_layer {
            best = fit;
        }
    }
    best
}

/// Number of full layers the height limit allows for one vertical extent.
pub fn max_layers(config: &PalletConfig, up_z: f64) -> u32 {
    if up_z <= 0.0 {
        return 0;
    }
    let fit = ((config.usable_height() + EPSILON) / up_z).floor();
    if fit <= 0.0 {
        0
    } else {
        fit as u32
    }
}

/// A fully fitted orientation: skeleton plus deck and height capacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationCandidate {
    pub deck_x: f64,
    pub deck_y: f64,
    pub up_z: f64,
    pub deck_x_axis: Axis,
    pub deck_y_axis: Axis,
    pub up_axis: Axis,
    pub per_layer: u64,
    pub nx: u32,
    pub ny: u32,
    pub layers_max: u32,
    pub cap: u64,
    pub swapped: bool,
}

/// True when `challenger` strictly beats `incumbent` under the ordered
/// tie-break: more boxes per pallet, then more layers, then more boxes per
/// layer, then the lower stack. Heights within [`EPSILON`] count as a tie,
/// which keeps the earlier-enumerated candidate.
pub fn beats(challenger: &OrientationCandidate, incumbent: &OrientationCandidate) -> bool {
    if challenger.cap != incumbent.cap {
        return challenger.cap > incumbent.cap;
    }
    if challenger.layers_max != incumbent.layers_max {
        return challenger.layers_max > incumbent.layers_max;
    }
    if challenger.per_layer != incumbent.per_layer {
        return challenger.per_layer > incumbent.per_layer;
    }
    challenger.up_z < incumbent.up_z - EPSILON
}

/// Pick the best stance for a box, optionally restricted to orientations
/// whose vertical extent matches one forced dimension.
///
/// Infeasibility is classified for error reporting: when no considered
/// orientation fits even one box on the deck the failure is a footprint
/// problem; when at least one footprint fits but no orientation clears the
/// height limit it is a height problem.
pub fn select_orientation(
    config: &PalletConfig,
    dims: &BoxDimensions,
    forced: Option<Axis>,
) -> Result<OrientationCandidate, PlanError> {
    let mut best: Option<OrientationCandidate> = None;
    let mut any_deck_fit = false;

    for skeleton in enumerate_orientations(dims) {
        if let Some(axis) = forced {
            if (skeleton.up_z - axis.of(dims)).abs() > EPSILON {
                continue;
            }
        }

        let deck = fit_deck(config, skeleton.deck_x, skeleton.deck_y);
        if deck.per_layer > 0 {
            any_deck_fit = true;
        }
        let layers_max = max_layers(config, skeleton.up_z);
        if deck.per_layer == 0 || layers_max == 0 {
            continue;
        }

        let candidate = OrientationCandidate {
            deck_x: skeleton.deck_x,
            deck_y: skeleton.deck_y,
            up_z: skeleton.up_z,
            deck_x_axis: skeleton.deck_x_axis,
            deck_y_axis: skeleton.deck_y_axis,
            up_axis: skeleton.up_axis,
            per_layer: deck.per_layer,
            nx: deck.nx,
            ny: deck.ny,
            layers_max,
            cap: deck.per_layer.saturating_mul(u64::from(layers_max)),
            swapped: deck.swapped,
        };

        let replace = match &best {
            Some(incumbent) => beats(&candidate, incumbent),
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => Ok(candidate),
        None if any_deck_fit => Err(PlanError::HeightInfeasible),
        None => Err(PlanError::FootprintInfeasible),
    }
}

/// How the winning orientation reads against the original box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    LayFlat,
    OnSide,
    StandUp,
}

impl Stance {
    pub fn describe(self) -> &'static str {
        match self {
            Self::LayFlat => "lay flat",
            Self::OnSide => "on its side",
            Self::StandUp => "stand up",
        }
    }
}

/// Classify a vertical extent against the sorted original dimensions:
/// smallest up is lying flat, largest up is standing, the middle is on its
/// side.
pub fn classify_stance(dims: &BoxDimensions, up_z: f64) -> Stance {
    let mut sorted = [dims.length, dims.width, dims.height];
    sorted.sort_by(f64::total_cmp);

    if (up_z - sorted[0]).abs() <= EPSILON {
        Stance::LayFlat
    } else if (up_z - sorted[2]).abs() <= EPSILON {
        Stance::StandUp
    } else {
        Stance::OnSide
    }
}
