use serde::{Deserialize, Serialize};

use crate::config::PalletConfig;
use crate::dimensions::{parse_dimensions, BoxDimensions};
use crate::errors::PlanError;
use crate::orientation::{
    classify_stance, max_layers, select_orientation, Axis, OrientationCandidate, Stance,
};

/// Input contract from the dispatch collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Free-form size string, e.g. `"27.3 x 15.9 x 32.9"`.
    pub size: String,
    pub quantity: u64,
    /// Weight of one box, pounds.
    pub each_weight: f64,
    /// Forces which original dimension stands vertical; `None` auto-selects.
    pub forced_orientation: Option<Axis>,
}

/// One loaded pallet of the plan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PalletLoad {
    pub boxes: u64,
    pub layers_used: u32,
    /// Deck plus stacked layers, inches.
    pub height: f64,
    /// Tare plus boxes, pounds.
    pub weight: f64,
}

/// Complete answer for one request: the chosen stance and the ordered
/// pallet breakdown. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPlan {
    pub dimensions: BoxDimensions,
    pub orientation: OrientationCandidate,
    pub stance: Stance,
    pub pallets: Vec<PalletLoad>,
}

impl ShipmentPlan {
    pub fn total_boxes(&self) -> u64 {
        self.pallets.iter().map(|pallet| pallet.boxes).sum()
    }
}

/// Partition a quantity into pallets for one chosen orientation.
///
/// Peels `min(remaining, cap)` boxes per pallet, so the plan is always
/// `floor(quantity / cap)` full pallets plus at most one partial. Returns
/// an empty plan when the orientation holds no boxes at all; callers are
/// expected to have rejected that upstream.
pub fn split_pallets(
    config: &PalletConfig,
    quantity: u64,
    per_layer: u64,
    up_z: f64,
    each_weight: f64,
) -> Vec<PalletLoad> {
    let layers_max = max_layers(config, up_z);
    // Sliver-sized boxes can push per_layer and layers_max high enough that
    // their product exceeds u64; a saturated cap still splits correctly.
    let cap = per_layer.saturating_mul(u64::from(layers_max));
    if cap == 0 {
        return Vec::new();
    }

    let mut pallets = Vec::with_capacity(quantity.div_ceil(cap) as usize);
    let mut remaining = quantity;
    while remaining > 0 {
        let boxes = remaining.min(cap);
        let layers_used = boxes.div_ceil(per_layer).max(1) as u32;
        pallets.push(PalletLoad {
            boxes,
            layers_used,
            height: config.deck_height + f64::from(layers_used) * up_z,
            weight: config.tare_weight + boxes as f64 * each_weight,
        });
        remaining -= boxes;
    }
    pallets
}

/// Run the whole pipeline: validate, parse, pick a stance, split pallets.
pub fn plan_shipment(
    config: &PalletConfig,
    request: &PlanRequest,
) -> Result<ShipmentPlan, PlanError> {
    if request.quantity == 0 {
        return Err(PlanError::InvalidQuantity);
    }
    if !request.each_weight.is_finite() || request.each_weight <= 0.0 {
        return Err(PlanError::InvalidWeight(request.each_weight));
    }

    let dimensions = parse_dimensions(&request.size)?;
    let orientation = select_orientation(config, &dimensions, request.forced_orientation)?;
    let stance = classify_stance(&dimensions, orientation.up_z);
    let pallets = split_pallets(
        config,
        request.quantity,
        orientation.per_layer,
        orientation.up_z,
        request.each_weight,
    );

    Ok(ShipmentPlan { dimensions, orientation, stance, pallets })
}

#[cfg(test)]
mod tests {
    use crate::config::PalletConfig;
    use crate::errors::PlanError;
    use crate::orientation::Axis;

    use super::{plan_shipment, split_pallets, PalletLoad, PlanRequest};

    fn request(size: &str, quantity: u64, each_weight: f64) -> PlanRequest {
        PlanRequest { size: size.to_owned(), quantity, each_weight, forced_orientation: None }
    }

    #[test]
    fn quantity_below_cap_fills_a_single_pallet() {
        let config = PalletConfig::default();
        let pallets = split_pallets(&config, 100, 10, 5.0, 2.0);

        assert_eq!(
            pallets,
            vec![PalletLoad { boxes: 100, layers_used: 10, height: 55.0, weight: 250.0 }]
        );
    }

    #[test]
    fn quantity_above_cap_peels_full_pallets_then_a_remainder() {
        let config = PalletConfig::default();
        // cap = 10/layer * 12 layers = 120.
        let pallets = split_pallets(&config, 250, 10, 5.0, 2.0);

        let boxes: Vec<u64> = pallets.iter().map(|pallet| pallet.boxes).collect();
        assert_eq!(boxes, vec![120, 120, 10]);
        assert_eq!(pallets.iter().map(|pallet| pallet.boxes).sum::<u64>(), 250);

        assert_eq!(pallets[0].layers_used, 12);
        assert_eq!(pallets[0].height, 65.0);
        assert_eq!(pallets[0].weight, 290.0);

        assert_eq!(pallets[2].layers_used, 1);
        assert_eq!(pallets[2].height, 10.0);
        assert_eq!(pallets[2].weight, 70.0);
    }

    #[test]
    fn exact_multiple_of_cap_has_no_remainder_pallet() {
        let config = PalletConfig::default();
        let pallets = split_pallets(&config, 240, 10, 5.0, 2.0);

        assert_eq!(pallets.len(), 2);
        assert!(pallets.iter().all(|pallet| pallet.boxes == 120));
    }

    #[test]
    fn enormous_capacity_saturates_instead_of_overflowing() {
        let config = PalletConfig::default();
        // layers_max saturates at u32::MAX for a 1e-15 in extent; the cap
        // product must clamp, leaving one pallet holding everything.
        let pallets = split_pallets(&config, 5, 1u64 << 40, 1e-15, 1.0);

        assert_eq!(pallets.len(), 1);
        assert_eq!(pallets[0].boxes, 5);
        assert_eq!(pallets[0].layers_used, 1);
    }

    #[test]
    fn zero_capacity_orientation_yields_empty_plan() {
        let config = PalletConfig::default();
        let pallets = split_pallets(&config, 10, 4, 61.0, 2.0);
        assert!(pallets.is_empty());
    }

    #[test]
    fn partial_layer_still_counts_as_one_layer() {
        let config = PalletConfig::default();
        let pallets = split_pallets(&config, 3, 10, 5.0, 1.0);

        assert_eq!(
            pallets,
            vec![PalletLoad { boxes: 3, layers_used: 1, height: 10.0, weight: 53.0 }]
        );
    }

    #[test]
    fn rejects_zero_quantity_before_any_orientation_work() {
        let config = PalletConfig::default();
        let error = plan_shipment(&config, &request("not a size", 0, 2.0))
            .expect_err("quantity gate comes first");

        assert_eq!(error, PlanError::InvalidQuantity);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_weight() {
        let config = PalletConfig::default();

        let error =
            plan_shipment(&config, &request("10 x 10 x 10", 5, 0.0)).expect_err("zero weight");
        assert_eq!(error, PlanError::InvalidWeight(0.0));

        assert!(matches!(
            plan_shipment(&config, &request("10 x 10 x 10", 5, f64::NAN)),
            Err(PlanError::InvalidWeight(_))
        ));
    }

    #[test]
    fn malformed_size_surfaces_as_parse_error() {
        let config = PalletConfig::default();
        let error = plan_shipment(&config, &request("10 by 20", 5, 2.0)).expect_err("bad size");
        assert!(matches!(error, PlanError::Parse(_)));
    }

    #[test]
    fn forced_orientation_flows_through_to_the_plan() {
        let config = PalletConfig::default();
        let plan = plan_shipment(
            &config,
            &PlanRequest {
                size: "20 x 16 x 12".to_owned(),
                quantity: 27,
                each_weight: 4.0,
                forced_orientation: Some(Axis::Length),
            },
        )
        .expect("feasible forced plan");

        assert_eq!(plan.orientation.up_axis, Axis::Length);
        assert_eq!(plan.pallets.len(), 1);
        assert_eq!(plan.pallets[0].boxes, 27);
        assert_eq!(plan.pallets[0].layers_used, 3);
        assert_eq!(plan.total_boxes(), 27);
    }
}
