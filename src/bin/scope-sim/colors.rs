//! Color constants for the scope view.

use eframe::egui::Color32;

// Target box
pub const TARGET_STROKE: Color32 = Color32::from_rgb(63, 81, 181);
pub const TARGET_FILL: Color32 = Color32::from_rgba_premultiplied(13, 16, 36, 51);

// Reticle
pub const RETICLE_LINE: Color32 = Color32::BLACK;
pub const RETICLE_DOT: Color32 = Color32::BLACK;
pub const RETICLE_DOT_OUTLINE: Color32 = Color32::WHITE;

// Eyepiece housing outside the lens
pub const EYEPIECE_MASK: Color32 = Color32::from_rgb(18, 18, 20);
pub const EYEPIECE_RIM: Color32 = Color32::from_rgb(60, 60, 64);

// Procedural backdrop
pub const FALLBACK_SKY: Color32 = Color32::from_rgb(135, 176, 214);
pub const FALLBACK_RIDGE: Color32 = Color32::from_rgb(92, 110, 120);
pub const FALLBACK_GROUND: Color32 = Color32::from_rgb(96, 128, 72);
pub const FALLBACK_HINT: Color32 = Color32::from_rgba_premultiplied(200, 200, 200, 220);
