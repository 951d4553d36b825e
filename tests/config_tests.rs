// Host-side tests for option resolution.
// The main crate is wasm-only, so these exercise surface-core directly.

use surface_core::{resolve, Color, RendererKind, SurfaceConfig, SurfaceError, SurfaceOptions};

#[test]
fn defaults_match_documented_table() {
    let config = SurfaceOptions::default().resolve().unwrap();
    assert_eq!(config.container, "body");
    assert_eq!(config.cellsize, 100.0);
    assert_eq!(config.jitter, 0.33);
    assert_eq!(config.depth, 20.0);
    assert!(config.depth_transform.is_none());
    assert_eq!(config.material_ambient, Color::WHITE);
    assert_eq!(config.material_diffuse, Color::WHITE);
    assert_eq!(config.fill_opacity, 1.0);
    assert_eq!(config.stroke_opacity, 1.0);
    assert_eq!(config.stroke_width, 1.0);
    assert_eq!(config.render_with, RendererKind::Svg);
}

#[test]
fn distortion_is_jitter_times_cellsize() {
    let config = SurfaceOptions::default().resolve().unwrap();
    assert_eq!(config.distortion, 0.33 * 100.0);
    assert_eq!(config.distortion.round(), 33.0);

    for (cellsize, jitter) in [(50.0, 0.1), (64.0, 0.5), (120.0, 1.0), (10.0, 0.0)] {
        let config = SurfaceOptions {
            cellsize: Some(cellsize),
            jitter: Some(jitter),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(config.distortion, jitter * cellsize);
    }
}

#[test]
fn overrides_replace_only_given_keys() {
    let config = SurfaceOptions {
        container: Some("#hero".into()),
        depth: Some(5.0),
        material_diffuse: Some("#ff0000".into()),
        render_with: Some("canvas".into()),
        ..Default::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(config.container, "#hero");
    assert_eq!(config.depth, 5.0);
    assert_eq!(config.material_diffuse, Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(config.render_with, RendererKind::Canvas);
    // untouched keys keep defaults
    assert_eq!(config.cellsize, 100.0);
    assert_eq!(config.material_ambient, Color::WHITE);
}

#[test]
fn merge_uses_supplied_defaults_table() {
    let defaults = SurfaceConfig {
        cellsize: 40.0,
        jitter: 0.5,
        render_with: RendererKind::WebGl,
        ..SurfaceConfig::default()
    };
    let config = resolve(&defaults, SurfaceOptions::default()).unwrap();
    assert_eq!(config.cellsize, 40.0);
    assert_eq!(config.render_with, RendererKind::WebGl);
    assert_eq!(config.distortion, 20.0);
}

#[test]
fn unknown_renderer_is_a_configuration_error() {
    let err = SurfaceOptions {
        render_with: Some("vulkan".into()),
        ..Default::default()
    }
    .resolve()
    .unwrap_err();
    assert!(matches!(err, SurfaceError::Configuration(_)));
    assert!(err.to_string().contains("vulkan"));
}

#[test]
fn every_supported_renderer_parses() {
    for (name, kind) in [
        ("svg", RendererKind::Svg),
        ("canvas", RendererKind::Canvas),
        ("webgl", RendererKind::WebGl),
    ] {
        assert_eq!(name.parse::<RendererKind>().unwrap(), kind);
        assert_eq!(kind.as_str(), name);
    }
}

#[test]
fn non_positive_cellsize_is_rejected() {
    for cellsize in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = SurfaceOptions {
            cellsize: Some(cellsize),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(
            matches!(err, SurfaceError::Configuration(_)),
            "cellsize {cellsize} should be rejected"
        );
    }
}

#[test]
fn malformed_material_color_is_rejected() {
    let err = SurfaceOptions {
        material_ambient: Some("#12".into()),
        ..Default::default()
    }
    .resolve()
    .unwrap_err();
    assert!(matches!(err, SurfaceError::Configuration(_)));
}

#[test]
fn hex_colors_parse_short_and_long_forms() {
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::from_hex("000000").unwrap(), Color::BLACK);
    let c = Color::from_hex("#FF8000").unwrap();
    assert_eq!(c.to_hex(), "#ff8000");
    assert_eq!(c.to_css(), "rgba(255,128,0,1)");
    assert!(Color::from_hex("#ggg").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn hex_parsing_rejects_non_hex_text() {
    for bad in ["#+1+2+3", "##fff", "+ff", "#12 456", "#-0-0-0", ""] {
        assert!(
            matches!(Color::from_hex(bad), Err(SurfaceError::Configuration(_))),
            "{bad:?} should be rejected"
        );
    }
}
