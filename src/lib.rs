//! Geometry for the scope view simulator.
//!
//! - `scale`: turns zoom, distance and target size into the on-screen target box
//! - `reticle`: the static mil-dot layout
//! - `config`: RON loading of reticle dimensions

pub mod config;
pub mod reticle;
pub mod scale;

pub use config::{ConfigError, load_reticle_spec};
pub use reticle::{Axis, Centerline, ReticleDot, ReticleGrid, ReticleSpec};
pub use scale::{DerivedSize, ScaleModel, ScaleState};
