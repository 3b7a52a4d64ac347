//! Human-readable rendering of shipment plans.
//!
//! All display rounding lives here so the engine's numeric core stays free
//! of string formatting.

use palletizer_core::ShipmentPlan;

/// Round to one decimal place and trim a trailing `.0`.
pub fn fmt_number(value: f64) -> String {
    let rounded = format!("{value:.1}");
    match rounded.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => rounded,
    }
}

pub fn plan_report(plan: &ShipmentPlan) -> String {
    let dims = &plan.dimensions;
    let orientation = &plan.orientation;

    let mut lines = Vec::with_capacity(plan.pallets.len() + 3);
    lines.push(format!(
        "Box {} x {} x {} in, {} ({} vertical)",
        fmt_number(dims.length),
        fmt_number(dims.width),
        fmt_number(dims.height),
        plan.stance.describe(),
        orientation.up_axis.letter(),
    ));
    lines.push(format!(
        "Deck read {}: grid {} x {} = {} per layer, up to {} layers ({} boxes/pallet)",
        if orientation.swapped { "48-along-x" } else { "42-along-x" },
        orientation.nx,
        orientation.ny,
        orientation.per_layer,
        orientation.layers_max,
        orientation.cap,
    ));

    for (index, pallet) in plan.pallets.iter().enumerate() {
        lines.push(format!(
            "Pallet {}: {} boxes in {} layer(s), {} in tall, {} lb",
            index + 1,
            pallet.boxes,
            pallet.layers_used,
            fmt_number(pallet.height),
            fmt_number(pallet.weight),
        ));
    }

    lines.push(format!(
        "Total: {} boxes on {} pallet(s)",
        plan.total_boxes(),
        plan.pallets.len()
    ));
    lines.join("\n")
}
