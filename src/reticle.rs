//! Mil-dot reticle layout.
//!
//! The reticle is static: it does not depend on zoom, distance or target
//! size. All positions are in pixels relative to the reticle center, with
//! `+x` to the right and `+y` down.

use serde::{Deserialize, Serialize};

/// Thickness of the two full-bleed centerlines in pixels.
pub const CENTERLINE_THICKNESS_PX: f64 = 1.0;

/// Upper bound on dots per axis.
pub const MAX_DOT_COUNT: u32 = 1000;

/// Upper bound on dot spacing in pixels.
pub const MAX_DOT_SPACING_PX: u32 = 1000;

/// Upper bound on dot diameter in pixels.
pub const MAX_DOT_DIAMETER_PX: u32 = 256;

/// Dimensions of the mil-dot pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReticleSpec {
    /// Number of mil-dots on each axis
    pub dot_count: u32,
    /// Distance between neighbouring dots in pixels
    pub dot_spacing_px: u32,
    /// Rendered dot diameter in pixels
    pub dot_diameter_px: u32,
}

impl ReticleSpec {
    pub const DEFAULT: Self = Self {
        dot_count: 20,
        dot_spacing_px: 20,
        dot_diameter_px: 8,
    };

    /// Copy with every dimension forced into `1..=MAX_*`.
    pub fn clamped(self) -> Self {
        Self {
            dot_count: self.dot_count.clamp(1, MAX_DOT_COUNT),
            dot_spacing_px: self.dot_spacing_px.clamp(1, MAX_DOT_SPACING_PX),
            dot_diameter_px: self.dot_diameter_px.clamp(1, MAX_DOT_DIAMETER_PX),
        }
    }
}

impl Default for ReticleSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A single dot, ready to be painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleDot {
    pub axis: Axis,
    /// Index in the symmetric offset sequence (0 is the center)
    pub offset: i32,
    /// Dot center relative to the reticle center
    pub center: [f64; 2],
    pub radius: f64,
}

/// A centerline spanning the whole viewport along `axis`, drawn beneath the dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centerline {
    pub axis: Axis,
    pub thickness: f64,
}

/// Generates the reticle geometry for a [`ReticleSpec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReticleGrid {
    spec: ReticleSpec,
}

impl ReticleGrid {
    /// Out-of-range dimensions are clamped, so a grid never holds a spec
    /// that `ReticleSpec::validate` would reject.
    pub fn new(spec: ReticleSpec) -> Self {
        let clamped = spec.clamped();
        if clamped != spec {
            log::warn!("Reticle spec {spec:?} out of range, using {clamped:?}");
        }
        Self { spec: clamped }
    }

    pub fn spec(&self) -> ReticleSpec {
        self.spec
    }

    /// Returns `[-half, ..., -1, 0, 1, ..., half - 1]` with `half = dot_count / 2`.
    ///
    /// For odd counts the sequence is still `dot_count` long and ends at `half`.
    pub fn generate_offsets(&self) -> Vec<i32> {
        let count = i32::try_from(self.spec.dot_count).unwrap_or(MAX_DOT_COUNT as i32);
        let half = count / 2;
        (0..count).map(|i| i - half).collect()
    }

    /// Distance of a dot from the center along its axis.
    ///
    /// Dots are placed absolutely: dot `n` is exactly `n * spacing` away,
    /// regardless of how many dots sit between it and the center.
    pub fn dot_distance_px(&self, offset: i32) -> f64 {
        f64::from(offset.unsigned_abs()) * f64::from(self.spec.dot_spacing_px)
    }

    /// Signed position of a dot along its axis.
    pub fn dot_position_px(&self, offset: i32) -> f64 {
        f64::from(offset) * f64::from(self.spec.dot_spacing_px)
    }

    pub fn dot_radius_px(&self) -> f64 {
        f64::from(self.spec.dot_diameter_px) / 2.0
    }

    /// Dots along one axis, in offset order.
    pub fn axis_dots(&self, axis: Axis) -> Vec<ReticleDot> {
        let radius = self.dot_radius_px();
        self.generate_offsets()
            .into_iter()
            .map(|offset| {
                let position = self.dot_position_px(offset);
                let center = match axis {
                    Axis::Horizontal => [position, 0.0],
                    Axis::Vertical => [0.0, position],
                };
                ReticleDot {
                    axis,
                    offset,
                    center,
                    radius,
                }
            })
            .collect()
    }

    /// All dots: the horizontal row followed by the vertical column.
    pub fn dots(&self) -> Vec<ReticleDot> {
        let mut dots = self.axis_dots(Axis::Horizontal);
        dots.extend(self.axis_dots(Axis::Vertical));
        dots
    }

    pub fn centerlines(&self) -> [Centerline; 2] {
        [Axis::Horizontal, Axis::Vertical].map(|axis| Centerline {
            axis,
            thickness: CENTERLINE_THICKNESS_PX,
        })
    }

    /// Distance from the center to the outer edge of the furthest dot.
    pub fn extent_px(&self) -> f64 {
        self.generate_offsets()
            .into_iter()
            .map(|offset| self.dot_distance_px(offset))
            .fold(0.0, f64::max)
            + self.dot_radius_px()
    }
}
