/// Width of the controls panel in pixels.
pub const CONTROLS_WIDTH: f32 = 240.0;

/// Width-to-height ratio of the scope viewport.
pub const VIEWPORT_ASPECT: f32 = 3.0 / 2.0;

/// Margin kept around the scope viewport inside the central panel.
pub const VIEWPORT_MARGIN: f32 = 16.0;

/// Embedded background photograph, written by `fetch_background`.
pub const BACKGROUND_ASSET: &str = "background.jpg";

/// Embedded default reticle dimensions.
pub const RETICLE_ASSET: &str = "reticle.ron";

/// Zoom presets shown under the slider.
pub const ZOOM_MARKS: [f64; 4] = [1.0, 5.0, 10.0, 20.0];

/// Drag speed of the distance and target size fields.
pub const FIELD_SPEED: f64 = 0.1;
