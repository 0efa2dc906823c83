//! Physical-to-screen scale model for the target box.

/// Pixels per meter of target size when viewed from 1 m away.
pub const SCALE_FACTOR_PX_PER_METER: f64 = 100.0;

/// Smallest size (in pixels) the target box is ever drawn at.
pub const MIN_TARGET_PX: f64 = 10.0;

/// Minimum zoom level (no magnification).
pub const ZOOM_MIN: f64 = 1.0;

/// Maximum zoom level.
pub const ZOOM_MAX: f64 = 20.0;

/// Zoom increment used by the slider and keyboard shortcuts.
pub const ZOOM_STEP: f64 = 0.5;

/// The four user-controlled inputs of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    /// Optical magnification in `[ZOOM_MIN, ZOOM_MAX]`
    pub zoom: f64,
    /// Distance to the target in meters
    pub distance_meters: f64,
    /// Physical target width in meters
    pub target_width_meters: f64,
    /// Physical target height in meters
    pub target_height_meters: f64,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            distance_meters: 10.0,
            target_width_meters: 1.0,
            target_height_meters: 1.0,
        }
    }
}

/// On-screen size of the target box, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSize {
    pub pixel_width: f64,
    pub pixel_height: f64,
}

/// Owns a [`ScaleState`] and only lets valid values into it.
///
/// Setters never fail. A rejected value leaves the state untouched and the
/// setter returns `false`, so the host can skip the repaint (or flag the
/// field) without the model ever holding a non-renderable state.
#[derive(Debug, Clone, Default)]
pub struct ScaleModel {
    state: ScaleState,
}

impl ScaleModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScaleState {
        self.state
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn distance_meters(&self) -> f64 {
        self.state.distance_meters
    }

    pub fn target_width_meters(&self) -> f64 {
        self.state.target_width_meters
    }

    pub fn target_height_meters(&self) -> f64 {
        self.state.target_height_meters
    }

    /// Sets the zoom, clamped to `[ZOOM_MIN, ZOOM_MAX]`. Non-finite values are ignored.
    pub fn set_zoom(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            log::debug!("Ignoring non-finite zoom: {value}");
            return false;
        }
        self.state.zoom = value.clamp(ZOOM_MIN, ZOOM_MAX);
        true
    }

    pub fn set_distance(&mut self, value: f64) -> bool {
        accept_positive(&mut self.state.distance_meters, value, "distance")
    }

    pub fn set_target_width(&mut self, value: f64) -> bool {
        accept_positive(&mut self.state.target_width_meters, value, "target width")
    }

    pub fn set_target_height(&mut self, value: f64) -> bool {
        accept_positive(&mut self.state.target_height_meters, value, "target height")
    }

    /// Steps the zoom up by [`ZOOM_STEP`].
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.state.zoom + ZOOM_STEP)
    }

    /// Steps the zoom down by [`ZOOM_STEP`].
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.state.zoom - ZOOM_STEP)
    }

    /// Restores the session defaults.
    pub fn reset(&mut self) {
        self.state = ScaleState::default();
    }

    /// Target size in pixels at zoom 1, before the minimum-size floor.
    ///
    /// Apparent size shrinks inversely with distance.
    pub fn base_size(&self) -> (f64, f64) {
        let ScaleState {
            distance_meters,
            target_width_meters,
            target_height_meters,
            ..
        } = self.state;
        (
            target_width_meters / distance_meters * SCALE_FACTOR_PX_PER_METER,
            target_height_meters / distance_meters * SCALE_FACTOR_PX_PER_METER,
        )
    }

    /// Size of the target box on screen.
    ///
    /// The zoom applied here is the same factor the background is magnified
    /// by, so the box stays locked to the scene.
    pub fn derived_size(&self) -> DerivedSize {
        let (base_width, base_height) = self.base_size();
        DerivedSize {
            pixel_width: (base_width * self.state.zoom).max(MIN_TARGET_PX),
            pixel_height: (base_height * self.state.zoom).max(MIN_TARGET_PX),
        }
    }
}

fn accept_positive(field: &mut f64, value: f64, name: &str) -> bool {
    if value.is_finite() && value > 0.0 {
        *field = value;
        true
    } else {
        log::debug!("Ignoring invalid {name}: {value}");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn model(zoom: f64, distance: f64, width: f64, height: f64) -> ScaleModel {
        let mut model = ScaleModel::new();
        assert!(model.set_zoom(zoom));
        assert!(model.set_distance(distance));
        assert!(model.set_target_width(width));
        assert!(model.set_target_height(height));
        model
    }

    fn assert_size(size: DerivedSize, width: f64, height: f64) {
        assert!((size.pixel_width - width).abs() < 1e-9, "{size:?}");
        assert!((size.pixel_height - height).abs() < 1e-9, "{size:?}");
    }

    #[test]
    fn test_defaults() {
        let model = ScaleModel::new();
        assert_eq!(
            model.state(),
            ScaleState {
                zoom: 1.0,
                distance_meters: 10.0,
                target_width_meters: 1.0,
                target_height_meters: 1.0,
            }
        );
    }

    #[test]
    fn test_default_scenario_and_full_zoom() {
        let mut model = ScaleModel::new();
        assert_size(model.derived_size(), 10.0, 10.0);

        model.set_zoom(20.0);
        assert_size(model.derived_size(), 200.0, 200.0);
    }

    #[test]
    fn test_zoom_scales_monotonically() {
        let mut model = model(1.0, 10.0, 2.0, 1.0);
        assert_size(model.derived_size(), 20.0, 10.0);

        model.set_zoom(5.0);
        assert_size(model.derived_size(), 100.0, 50.0);

        let mut prev = model.derived_size();
        for step in 10..=40 {
            model.set_zoom(step as f64 * 0.5);
            let size = model.derived_size();
            assert!(size.pixel_width >= prev.pixel_width);
            assert!(size.pixel_height >= prev.pixel_height);
            prev = size;
        }
    }

    #[test]
    fn test_floor_applies_to_tiny_targets() {
        let model = model(1.0, 1000.0, 0.1, 0.1);
        let (base_width, _) = model.base_size();
        assert!((base_width - 0.01).abs() < 1e-12);
        assert_size(model.derived_size(), 10.0, 10.0);
    }

    #[test]
    fn test_doubling_distance_halves_base_size() {
        let mut model = model(3.0, 7.0, 1.3, 0.4);
        let (w1, h1) = model.base_size();

        model.set_distance(14.0);
        let (w2, h2) = model.base_size();

        assert!((w1 / 2.0 - w2).abs() < 1e-12);
        assert!((h1 / 2.0 - h2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_distance_is_ignored() {
        let mut model = model(4.0, 25.0, 1.8, 0.5);
        let before = model.derived_size();

        assert!(!model.set_distance(-5.0));
        assert_eq!(model.derived_size(), before);
        assert_eq!(model.distance_meters(), 25.0);
    }

    #[test]
    fn test_rejects_zero_and_non_finite_dimensions() {
        let mut model = ScaleModel::new();
        let before = model.state();

        for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!model.set_distance(bad));
            assert!(!model.set_target_width(bad));
            assert!(!model.set_target_height(bad));
        }

        assert_eq!(model.state(), before);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut model = ScaleModel::new();

        assert!(model.set_zoom(50.0));
        assert_eq!(model.zoom(), ZOOM_MAX);

        assert!(model.set_zoom(0.2));
        assert_eq!(model.zoom(), ZOOM_MIN);

        assert!(model.set_zoom(-3.0));
        assert_eq!(model.zoom(), ZOOM_MIN);
    }

    #[test]
    fn test_non_finite_zoom_is_ignored() {
        let mut model = ScaleModel::new();
        model.set_zoom(7.5);

        assert!(!model.set_zoom(f64::NAN));
        assert!(!model.set_zoom(f64::INFINITY));
        assert_eq!(model.zoom(), 7.5);
    }

    #[test]
    fn test_zoom_steps_stay_in_bounds() {
        let mut model = ScaleModel::new();

        model.zoom_out();
        assert_eq!(model.zoom(), ZOOM_MIN);

        model.zoom_in();
        assert_eq!(model.zoom(), 1.5);

        for _ in 0..100 {
            model.zoom_in();
        }
        assert_eq!(model.zoom(), ZOOM_MAX);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut model = model(12.0, 300.0, 0.5, 1.7);
        model.reset();
        assert_eq!(model.state(), ScaleState::default());
    }

    #[test]
    fn test_random_setter_sequences_keep_state_valid() {
        let mut rng = StdRng::seed_from_u64(0x5C0_9E);
        let mut model = ScaleModel::new();
        let specials = [0.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

        for _ in 0..10_000 {
            let value = if rng.random_bool(0.1) {
                specials[rng.random_range(0..specials.len())]
            } else {
                rng.random_range(-500.0..500.0)
            };

            match rng.random_range(0..4) {
                0 => model.set_zoom(value),
                1 => model.set_distance(value),
                2 => model.set_target_width(value),
                _ => model.set_target_height(value),
            };

            let state = model.state();
            assert!(state.distance_meters > 0.0);
            assert!(state.target_width_meters > 0.0);
            assert!(state.target_height_meters > 0.0);
            assert!((ZOOM_MIN..=ZOOM_MAX).contains(&state.zoom));

            let size = model.derived_size();
            assert!(size.pixel_width >= MIN_TARGET_PX);
            assert!(size.pixel_height >= MIN_TARGET_PX);
        }
    }
}
