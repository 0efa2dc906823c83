//! Forwarding of control edits to the scale model.

use eframe::egui;
use scope_sim::ScaleModel;
use std::ops::RangeInclusive;

/// Smallest value the meters fields let the user enter.
pub const FIELD_MIN_METERS: f64 = 0.1;

/// A validating [`ScaleModel`] setter.
pub type Setter = fn(&mut ScaleModel, f64) -> bool;

/// Range of the distance and target size fields.
pub fn meters_range() -> RangeInclusive<f64> {
    FIELD_MIN_METERS..=f64::MAX
}

/// Applies an edit through `setter` and requests a repaint when the model accepted it.
pub fn apply_input(
    ctx: &egui::Context,
    scale: &mut ScaleModel,
    setter: Setter,
    value: f64,
    name: &str,
) -> bool {
    let applied = setter(scale, value);
    if applied {
        ctx.request_repaint();
    } else {
        log::debug!("{name} input rejected: {value}");
    }
    applied
}
