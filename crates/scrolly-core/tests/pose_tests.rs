// Host-side tests for the scroll-to-pose mapping.

use scrolly_core::layout::{DeviceClass, LayoutConfig};
use scrolly_core::pose::{compute_pose, Pose};
use scrolly_core::scroll::{max_scroll, scroll_progress, SECTION_BOUNDARIES};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

const EPS: f64 = 1e-9;

/// Largest per-field absolute difference between two poses.
fn max_abs_diff(a: &Pose, b: &Pose) -> f64 {
    [
        a.position_x - b.position_x,
        a.position_y - b.position_y,
        a.rotation_x - b.rotation_x,
        a.rotation_y - b.rotation_y,
        a.rotation_z - b.rotation_z,
    ]
    .into_iter()
    .fold(0.0, |acc, d| acc.max(d.abs()))
}

fn layouts() -> [LayoutConfig; 2] {
    [
        LayoutConfig::for_device(DeviceClass::Mobile),
        LayoutConfig::for_device(DeviceClass::Desktop),
    ]
}

#[test]
fn every_progress_yields_finite_pose() {
    for layout in layouts() {
        for i in 0..=10_000 {
            let p = i as f64 / 10_000.0;
            let pose = compute_pose(p, &layout);
            assert!(pose.is_finite(), "non-finite pose at {p}: {pose:?}");
            assert_eq!(pose.position_y, 0.0);
            assert_eq!(pose.rotation_z, 0.0);
        }
    }
}

#[test]
fn pose_is_continuous_at_section_boundaries() {
    for layout in layouts() {
        for &b in &SECTION_BOUNDARIES[..3] {
            let before = compute_pose(b - 1e-12, &layout);
            let at = compute_pose(b, &layout);
            assert!(
                max_abs_diff(&before, &at) < EPS,
                "jump at {b}: {before:?} vs {at:?}"
            );
        }
    }
}

#[test]
fn top_of_page_rests_at_start_offset() {
    for layout in layouts() {
        let pose = compute_pose(0.0, &layout);
        assert_eq!(
            pose,
            Pose {
                position_x: layout.start_x,
                ..Pose::default()
            }
        );
    }
}

#[test]
fn bottom_of_page_shows_top_side() {
    for layout in layouts() {
        let pose = compute_pose(1.0, &layout);
        assert!(pose.position_x.abs() < EPS);
        assert_eq!(pose.position_y, 0.0);
        assert!((pose.rotation_y + FRAC_PI_2).abs() < EPS);
        assert!((pose.rotation_x - FRAC_PI_2).abs() < EPS);
        assert_eq!(pose.rotation_z, 0.0);
    }
}

#[test]
fn pitch_at_third_and_fourth_section_entry() {
    let layout = LayoutConfig::DESKTOP;
    assert!(compute_pose(0.5, &layout).rotation_x.abs() < EPS);
    assert!((compute_pose(0.75, &layout).rotation_x + FRAC_PI_2).abs() < EPS);
}

#[test]
fn section_entries_match_table() {
    let d = LayoutConfig::DESKTOP;
    let at_quarter = compute_pose(0.25, &d);
    assert!(at_quarter.position_x.abs() < EPS);
    assert!((at_quarter.rotation_y + FRAC_PI_4).abs() < EPS);

    let at_half = compute_pose(0.5, &d);
    assert!((at_half.position_x - d.left_x).abs() < EPS);
    assert!((at_half.rotation_y + FRAC_PI_2).abs() < EPS);

    let at_three_quarters = compute_pose(0.75, &d);
    assert!(at_three_quarters.position_x.abs() < EPS);
}

#[test]
fn device_class_scales_horizontal_travel() {
    let mobile = LayoutConfig::for_device(DeviceClass::Mobile);
    let desktop = LayoutConfig::for_device(DeviceClass::Desktop);
    for &p in &[0.0, 0.1, 0.2, 0.3, 0.4, 0.49] {
        let m = compute_pose(p, &mobile);
        let d = compute_pose(p, &desktop);
        if p < 0.25 {
            let local = p / 0.25;
            assert!((m.position_x - 0.5 * (1.0 - local)).abs() < EPS);
            assert!((d.position_x - 1.5 * (1.0 - local)).abs() < EPS);
            if local < 1.0 {
                assert!(m.position_x != d.position_x);
            }
        } else {
            // second section: desktop travels twice as far as mobile
            assert!(m.position_x != d.position_x);
            assert!((d.position_x - 2.0 * m.position_x).abs() < EPS);
        }
        // rotations do not depend on the device
        assert!((m.rotation_y - d.rotation_y).abs() < EPS);
        assert_eq!(m.rotation_x, d.rotation_x);
    }
}

#[test]
fn unscrollable_page_maps_to_first_pose() {
    let viewport = 900.0;
    let content = 600.0;
    let progress = scroll_progress(0.0, max_scroll(content, viewport));
    assert_eq!(progress, 0.0);
    let zero_max = scroll_progress(0.0, 0.0);
    for layout in layouts() {
        let pose = compute_pose(zero_max, &layout);
        assert!(pose.is_finite());
        assert_eq!(pose, compute_pose(0.0, &layout));
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    let layout = LayoutConfig::DESKTOP;
    assert_eq!(compute_pose(-0.5, &layout), compute_pose(0.0, &layout));
    assert_eq!(compute_pose(1.5, &layout), compute_pose(1.0, &layout));
    assert_eq!(compute_pose(f64::NAN, &layout), compute_pose(0.0, &layout));
    assert_eq!(
        compute_pose(f64::INFINITY, &layout),
        compute_pose(0.0, &layout)
    );
}

#[test]
fn yaw_is_monotonic_through_first_two_sections() {
    let layout = LayoutConfig::DESKTOP;
    let mut prev = compute_pose(0.0, &layout).rotation_y;
    for i in 1..=50 {
        let y = compute_pose(i as f64 * 0.01, &layout).rotation_y;
        assert!(y < prev, "yaw not decreasing at step {i}");
        prev = y;
    }
}

#[test]
fn pose_differences_use_largest_field() {
    let a = Pose::default();
    let b = Pose {
        position_x: 0.1,
        rotation_y: -0.3,
        ..Pose::default()
    };
    assert!((max_abs_diff(&a, &b) - 0.3).abs() < 1e-12);
}
