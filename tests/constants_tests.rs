// Host-side tests for web-side constants and canvas sizing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use scrolly_core::constants::MAX_PIXEL_RATIO;

#[test]
fn dom_ids_are_distinct_and_non_empty() {
    assert!(!CANVAS_ID.is_empty());
    assert!(!LOADING_ID.is_empty());
    assert_ne!(CANVAS_ID, LOADING_ID);
    assert!(MODEL_URL_ATTR.starts_with("data-"));
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(effective_pixel_ratio(1.0, MAX_PIXEL_RATIO), 1.0);
    assert_eq!(effective_pixel_ratio(1.5, MAX_PIXEL_RATIO), 1.5);
    assert_eq!(effective_pixel_ratio(3.0, MAX_PIXEL_RATIO), 2.0);
}

#[test]
fn bogus_pixel_ratio_falls_back_to_one() {
    assert_eq!(effective_pixel_ratio(0.0, MAX_PIXEL_RATIO), 1.0);
    assert_eq!(effective_pixel_ratio(f64::NAN, MAX_PIXEL_RATIO), 1.0);
}

#[test]
fn backing_size_scales_and_never_hits_zero() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(-5.0, 10.0, 1.0), (1, 10));
}
