//! Loading of reticle configuration files.
//!
//! Reticle files are RON structs, e.g.
//!
//! ```ron
//! ReticleSpec(
//!     dot_count: 20,
//!     dot_spacing_px: 20,
//!     dot_diameter_px: 8,
//! )
//! ```
//!
//! Omitted fields fall back to [`ReticleSpec::DEFAULT`].

use crate::reticle::{MAX_DOT_COUNT, MAX_DOT_DIAMETER_PX, MAX_DOT_SPACING_PX, ReticleSpec};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up inside the per-user config directory.
pub const RETICLE_FILE_NAME: &str = "reticle.ron";

/// Errors that can occur when loading a reticle configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse reticle config: {0}")]
    Parse(#[from] ron::de::SpannedError),
    #[error("invalid reticle config: {0}")]
    Invalid(&'static str),
}

impl ReticleSpec {
    /// Parses and validates a RON reticle description.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let spec: Self = ron::from_str(text)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DOT_COUNT).contains(&self.dot_count) {
            return Err(ConfigError::Invalid("dot_count must be in 1..=1000"));
        }
        if !(1..=MAX_DOT_SPACING_PX).contains(&self.dot_spacing_px) {
            return Err(ConfigError::Invalid("dot_spacing_px must be in 1..=1000"));
        }
        if !(1..=MAX_DOT_DIAMETER_PX).contains(&self.dot_diameter_px) {
            return Err(ConfigError::Invalid("dot_diameter_px must be in 1..=256"));
        }
        Ok(())
    }
}

/// Reads a reticle configuration from disk.
pub fn load_reticle_spec(path: &Path) -> Result<ReticleSpec, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = ReticleSpec::from_ron_str(&text)?;
    log::info!("Loaded reticle config from {}", path.display());
    Ok(spec)
}

/// Path of the per-user reticle override, if the platform has a config directory.
pub fn user_reticle_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join(env!("CARGO_PKG_NAME"))
            .join(RETICLE_FILE_NAME),
    )
}

/// Where a reticle config may come from, in lookup order.
#[derive(Debug, Clone)]
pub enum ReticleSource {
    /// A file the user asked for explicitly; a missing file is reported.
    Explicit(PathBuf),
    /// A file that is only used if it exists, such as the per-user override.
    IfPresent(PathBuf),
}

/// Result of walking the reticle sources.
#[derive(Debug)]
pub struct ResolvedReticle {
    pub spec: ReticleSpec,
    /// One message per source that existed but failed to load or validate
    pub errors: Vec<String>,
}

/// Picks the first source that loads and validates.
///
/// Files are tried in order, then `bundled`, then [`ReticleSpec::DEFAULT`].
/// Failures are collected and the next source is tried.
pub fn resolve_reticle_spec<E: std::fmt::Display>(
    sources: &[ReticleSource],
    bundled: impl FnOnce() -> Result<ReticleSpec, E>,
) -> ResolvedReticle {
    let mut errors = Vec::new();

    for source in sources {
        let path = match source {
            ReticleSource::Explicit(path) => path,
            ReticleSource::IfPresent(path) if path.exists() => path,
            ReticleSource::IfPresent(path) => {
                log::debug!("No reticle config at {}", path.display());
                continue;
            }
        };
        match load_reticle_spec(path) {
            Ok(spec) => return ResolvedReticle { spec, errors },
            Err(err) => errors.push(err.to_string()),
        }
    }

    let spec = match bundled() {
        Ok(spec) => spec,
        Err(err) => {
            errors.push(err.to_string());
            ReticleSpec::DEFAULT
        }
    };
    ResolvedReticle { spec, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, text: &str) -> PathBuf {
        let file_name = format!("scope-sim-{}-{name}.ron", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, text).unwrap();
        path
    }

    fn bundled_spec() -> Result<ReticleSpec, ConfigError> {
        Ok(ReticleSpec {
            dot_count: 6,
            ..ReticleSpec::DEFAULT
        })
    }

    #[test]
    fn test_parse_full_spec() {
        let spec = ReticleSpec::from_ron_str(
            "ReticleSpec(dot_count: 10, dot_spacing_px: 30, dot_diameter_px: 6)",
        )
        .unwrap();
        assert_eq!(
            spec,
            ReticleSpec {
                dot_count: 10,
                dot_spacing_px: 30,
                dot_diameter_px: 6,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let spec = ReticleSpec::from_ron_str("(dot_spacing_px: 25)").unwrap();
        assert_eq!(spec.dot_count, 20);
        assert_eq!(spec.dot_spacing_px, 25);
        assert_eq!(spec.dot_diameter_px, 8);
    }

    #[test]
    fn test_rejects_zero_values() {
        for text in [
            "(dot_count: 0)",
            "(dot_spacing_px: 0)",
            "(dot_diameter_px: 0)",
        ] {
            let err = ReticleSpec::from_ron_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_rejects_oversized_values() {
        for text in [
            "(dot_count: 3000000000)",
            "(dot_count: 1001)",
            "(dot_spacing_px: 5000)",
            "(dot_diameter_px: 257)",
        ] {
            let err = ReticleSpec::from_ron_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}: {err}");
        }

        let spec = ReticleSpec::from_ron_str("(dot_count: 1000, dot_spacing_px: 1000)").unwrap();
        assert_eq!(spec.dot_count, MAX_DOT_COUNT);
    }

    #[test]
    fn test_rejects_malformed_ron() {
        let err = ReticleSpec::from_ron_str("(dot_count: \"many\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("scope-sim-does-not-exist.ron");
        let err = load_reticle_spec(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("scope-sim-does-not-exist.ron"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("scope-sim-{}.ron", std::process::id()));
        fs::write(&path, "(dot_count: 12)").unwrap();

        let spec = load_reticle_spec(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(spec.unwrap().dot_count, 12);
    }

    #[test]
    fn test_invalid_explicit_file_falls_through() {
        let bad = temp_config("bad", "(dot_count: 0)");
        let user = temp_config("user", "(dot_count: 14)");

        let resolved = resolve_reticle_spec(
            &[
                ReticleSource::Explicit(bad.clone()),
                ReticleSource::IfPresent(user.clone()),
            ],
            bundled_spec,
        );
        let _ = fs::remove_file(&bad);
        let _ = fs::remove_file(&user);

        assert_eq!(resolved.spec.dot_count, 14);
        assert_eq!(resolved.errors.len(), 1);
        assert!(resolved.errors[0].contains("dot_count"));
    }

    #[test]
    fn test_missing_optional_file_is_skipped_silently() {
        let missing = std::env::temp_dir().join("scope-sim-no-user-config.ron");

        let resolved =
            resolve_reticle_spec(&[ReticleSource::IfPresent(missing)], bundled_spec);

        assert_eq!(resolved.spec.dot_count, 6);
        assert!(resolved.errors.is_empty());
    }

    #[test]
    fn test_missing_explicit_file_is_reported() {
        let missing = std::env::temp_dir().join("scope-sim-no-cli-config.ron");

        let resolved = resolve_reticle_spec(&[ReticleSource::Explicit(missing)], bundled_spec);

        assert_eq!(resolved.spec.dot_count, 6);
        assert_eq!(resolved.errors.len(), 1);
        assert!(resolved.errors[0].contains("scope-sim-no-cli-config.ron"));
    }

    #[test]
    fn test_broken_bundle_falls_back_to_default() {
        let resolved = resolve_reticle_spec(&[], || {
            Err::<ReticleSpec, _>(ConfigError::Invalid("dot_count must be in 1..=1000"))
        });

        assert_eq!(resolved.spec, ReticleSpec::DEFAULT);
        assert_eq!(resolved.errors.len(), 1);
    }
}
