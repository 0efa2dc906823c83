use scope_sim::{ReticleGrid, ReticleSpec, load_reticle_spec};
use std::path::PathBuf;

fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(name)
}

#[test]
fn shipped_reticle_matches_default() {
    let spec = load_reticle_spec(&asset_path("reticle.ron")).unwrap();
    assert_eq!(spec, ReticleSpec::default());
}

#[test]
fn shipped_reticle_produces_twenty_dots_per_axis() {
    let spec = load_reticle_spec(&asset_path("reticle.ron")).unwrap();
    let grid = ReticleGrid::new(spec);
    assert_eq!(grid.generate_offsets(), (-10..10).collect::<Vec<_>>());
    assert_eq!(grid.dots().len(), 40);
}
