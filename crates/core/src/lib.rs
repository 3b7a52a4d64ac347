pub mod config;
pub mod dimensions;
pub mod errors;
pub mod orientation;
pub mod plan;

pub use config::{ConfigError, PalletConfig};
pub use dimensions::{parse_dimensions, BoxDimensions, ParseSizeError};
pub use errors::PlanError;
pub use orientation::{
    enumerate_orientations, fit_deck, max_layers, select_orientation, Axis, DeckFit,
    OrientationCandidate, OrientationSkeleton, Stance, EPSILON,
};
pub use plan::{plan_shipment, split_pallets, PalletLoad, PlanRequest, ShipmentPlan};
