//! Browser smoke tests for the animation engines.
//!
//! The pure-logic invariants live in the unit tests; these only verify that
//! the engines behave when driven with browser-sourced dimensions and clocks.

#![cfg(target_arch = "wasm32")]

use bsa_backdrop::components::point_net::{PointField, SparkSystem};
use bsa_backdrop::components::rng::Lcg;
use bsa_backdrop::components::sparkle::{TracerField, TracerOptions};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn viewport() -> (f64, f64) {
	let window = web_sys::window().unwrap();
	(
		window.inner_width().unwrap().as_f64().unwrap().max(1.0),
		window.inner_height().unwrap().as_f64().unwrap().max(1.0),
	)
}

#[wasm_bindgen_test]
fn point_field_builds_from_viewport() {
	let (w, h) = viewport();
	let mut rng = Lcg::new(js_sys::Date::now() as u32);
	let field = PointField::new(w, h, 12, &mut rng);
	assert_eq!(field.len(), 144);
	for p in field.points() {
		assert!(!p.neighbors.is_empty());
	}
}

#[wasm_bindgen_test]
fn engines_survive_a_second_of_frames() {
	let (w, h) = viewport();
	let mut rng = Lcg::new(js_sys::Date::now() as u32);
	let mut field = PointField::new(w, h, 12, &mut rng);
	let mut sparks = SparkSystem::new();
	let mut tracers = TracerField::new(w, h, TracerOptions::default());
	for _ in 0..60 {
		field.tick(0.016, &mut rng);
		sparks.tick(&field, 0.016, &mut rng);
		tracers.tick(0.016, &mut rng);
	}
	for p in field.points() {
		assert!(p.active >= 0.05);
	}
}
