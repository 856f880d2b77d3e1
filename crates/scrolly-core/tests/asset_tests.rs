// Host-side tests for model asset selection and the placeholder fallback.

use scrolly_core::constants::{hex_to_linear, hex_to_srgb, PLACEHOLDER_RGB};
use scrolly_core::{load_percent, AssetError, LoadProgress, ModelAsset, ModelSource};

#[test]
fn failed_load_falls_back_to_placeholder() {
    let err = AssetError::Fetch {
        url: "models/bread.glb".into(),
        message: "404 Not Found".into(),
    };
    let asset = ModelAsset::from_load_result("models/bread.glb", Err(err));
    assert!(asset.is_placeholder());
    assert_eq!(asset.mesh.triangle_count(), 12);
    let expected = hex_to_linear(PLACEHOLDER_RGB);
    assert!(asset.mesh.vertices.iter().all(|v| v.color == expected));
}

#[test]
fn successful_load_keeps_mesh_and_url() {
    let mesh = scrolly_core::mesh::box_mesh(1.0, [1.0; 3], Default::default());
    let asset = ModelAsset::from_load_result("a.glb", Ok(mesh));
    assert_eq!(
        asset.source,
        ModelSource::Loaded {
            url: "a.glb".into()
        }
    );
    assert_eq!(asset.mesh.vertices.len(), 24);
}

#[test]
fn fitted_placeholder_spans_two_units() {
    let asset = ModelAsset::placeholder();
    let fit = asset.mesh.fit();
    assert!((fit.scale - 1.0).abs() < 1e-6);
    assert_eq!(fit.center, glam::Vec3::ZERO);
}

#[test]
fn percent_needs_known_total() {
    assert_eq!(load_percent(50, Some(200)), Some(25.0));
    assert_eq!(load_percent(10, None), None);
    assert_eq!(load_percent(10, Some(0)), None);
    assert_eq!(load_percent(300, Some(200)), Some(100.0));
}

#[test]
fn hex_colours_split_into_channels() {
    assert_eq!(hex_to_srgb(0xff0000), [1.0, 0.0, 0.0]);
    let bg = hex_to_linear(0xb1b36b);
    assert!(bg.iter().all(|c| *c > 0.0 && *c < 1.0));
    // linearization darkens mid-tones
    assert!(bg[0] < hex_to_srgb(0xb1b36b)[0]);
}

#[test]
fn streamed_progress_reports_each_tenth_once() {
    let mut progress = LoadProgress::new(Some(1000));
    let reported: Vec<f64> = std::iter::repeat(50)
        .take(20)
        .filter_map(|chunk| progress.advance(chunk))
        .collect();
    assert_eq!(
        reported,
        vec![5.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    );
    assert_eq!(progress.loaded(), 1000);
    assert_eq!(progress.percent(), Some(100.0));
}

#[test]
fn streamed_progress_is_reported_before_completion() {
    let mut progress = LoadProgress::new(Some(4000));
    assert_eq!(progress.advance(1000), Some(25.0));
    assert_eq!(progress.advance(100), None);
    assert_eq!(progress.advance(1000), Some(52.5));
}

#[test]
fn streamed_progress_without_length_counts_bytes_only() {
    let mut progress = LoadProgress::new(None);
    assert_eq!(progress.advance(512), None);
    assert_eq!(progress.advance(512), None);
    assert_eq!(progress.loaded(), 1024);
    assert_eq!(progress.percent(), None);
}

#[test]
fn compressed_length_caps_progress_at_full() {
    // content-length can describe the encoded body
    let mut progress = LoadProgress::new(Some(100));
    assert_eq!(progress.advance(100), Some(100.0));
    assert_eq!(progress.advance(150), None);
    assert_eq!(progress.percent(), Some(100.0));
}
