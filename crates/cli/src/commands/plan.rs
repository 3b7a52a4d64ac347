use std::path::PathBuf;
use std::str::FromStr;

use palletizer_core::{plan_shipment, Axis, PalletConfig, PlanError, PlanRequest};
use tracing::info;

use super::CommandResult;
use crate::render;

#[derive(Debug, Clone)]
pub struct PlanArgs {
    pub size: String,
    pub quantity: u64,
    pub weight: f64,
    pub orientation: Option<String>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: PlanArgs) -> CommandResult {
    let config = match PalletConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure("plan", "config", error.to_string(), 2),
    };

    let forced_orientation = match args.orientation.as_deref() {
        Some(token) => match Axis::from_str(token) {
            Ok(axis) => Some(axis),
            Err(error) => {
                return CommandResult::failure("plan", error_class(&error), error.to_string(), 2)
            }
        },
        None => None,
    };

    let request = PlanRequest {
        size: args.size,
        quantity: args.quantity,
        each_weight: args.weight,
        forced_orientation,
    };

    match plan_shipment(&config, &request) {
        Ok(plan) => {
            info!(
                event_name = "engine.plan.computed",
                pallets = plan.pallets.len(),
                boxes = plan.total_boxes(),
                stance = plan.stance.describe(),
                "pallet plan computed"
            );
            if args.json {
                match serde_json::to_string_pretty(&plan) {
                    Ok(output) => CommandResult::success(output),
                    Err(error) => {
                        CommandResult::failure("plan", "serialization", error.to_string(), 3)
                    }
                }
            } else {
                CommandResult::success(render::plan_report(&plan))
            }
        }
        Err(error) => CommandResult::failure(
            "plan",
            error_class(&error),
            format!("{error}. {}", error.user_message()),
            2,
        ),
    }
}

fn error_class(error: &PlanError) -> &'static str {
    match error {
        PlanError::Parse(_) => "parse_size",
        PlanError::InvalidQuantity => "invalid_quantity",
        PlanError::InvalidWeight(_) => "invalid_weight",
        PlanError::InvalidOrientationToken(_) => "invalid_orientation",
        PlanError::FootprintInfeasible => "footprint_infeasible",
        PlanError::HeightInfeasible => "height_infeasible",
    }
}
