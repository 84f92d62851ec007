//! Leptos component for the presale countdown.
//!
//! Two wall-clock intervals drive the display: a one-second tick for the
//! cascading time decrement and a three-second shuffle of the decorative ring
//! arc lengths. Both are cleared together when the component is disposed.
//! Rotation of the rings is left to page CSS (`countdown-ring-spin`).

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::time_left::{ring_geometry, ring_lengths, TimeLeft};
use crate::components::rng::Lcg;

/// Radius of the progress ring, viewBox units.
const PROGRESS_RADIUS: f64 = 160.0;

/// Decorative ring layout: radius, stroke width, spin period (s), start angle.
const RING_CONFIGS: [(f64, f64, f64, f64); 8] = [
	(135.0, 2.0, 20.0, 0.0),
	(145.0, 3.0, 25.0, 45.0),
	(155.0, 1.5, 30.0, 90.0),
	(165.0, 2.5, 18.0, 135.0),
	(125.0, 2.0, 22.0, 180.0),
	(175.0, 1.0, 28.0, 225.0),
	(115.0, 3.0, 15.0, 270.0),
	(185.0, 2.0, 35.0, 315.0),
];

/// Renders the presale countdown: zero-padded digits, a progress ring filling
/// as days elapse, and eight slowly shuffling decorative arcs.
#[component]
pub fn CountdownTimer(
	/// Presale length in whole days.
	#[prop(default = 109)]
	total_days: u32,
) -> impl IntoView {
	let rng = Rc::new(RefCell::new(Lcg::new(js_sys::Date::now() as u32)));

	let (time_left, set_time_left) = signal(TimeLeft::from_days(total_days));
	let (lengths, set_lengths) = signal(ring_lengths(
		RING_CONFIGS.len(),
		&mut rng.borrow_mut(),
	));

	let tick_cb: Closure<dyn FnMut()> = Closure::new(move || {
		set_time_left.update(|t| t.tick());
	});
	let ring_cb: Closure<dyn FnMut()> = {
		let rng = rng.clone();
		Closure::new(move || {
			set_lengths.set(ring_lengths(RING_CONFIGS.len(), &mut rng.borrow_mut()));
		})
	};

	let mut tick_handle = None;
	let mut ring_handle = None;
	if let Some(window) = web_sys::window() {
		tick_handle = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				tick_cb.as_ref().unchecked_ref(),
				1_000,
			)
			.ok();
		ring_handle = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				ring_cb.as_ref().unchecked_ref(),
				3_000,
			)
			.ok();
	}

	let cbs = SendWrapper::new((tick_cb, ring_cb));
	on_cleanup(move || {
		if let Some(window) = web_sys::window() {
			if let Some(h) = tick_handle {
				window.clear_interval_with_handle(h);
			}
			if let Some(h) = ring_handle {
				window.clear_interval_with_handle(h);
			}
		}
		let (tick_cb, ring_cb) = cbs.take();
		drop(tick_cb);
		drop(ring_cb);
	});

	let digits = move || {
		let t = time_left.get();
		format!(
			"{:02}:{:02}:{:02}:{:02}",
			t.days, t.hours, t.minutes, t.seconds
		)
	};
	let progress_ring = move || ring_geometry(PROGRESS_RADIUS, time_left.get().progress(total_days));

	view! {
		<div class="countdown-timer">
			<svg viewBox="0 0 560 560" class="countdown-rings">
				{move || {
					let lengths = lengths.get();
					RING_CONFIGS
						.iter()
						.enumerate()
						.map(|(i, &(radius, stroke_width, period, start_angle))| {
							let frac = lengths.get(i).copied().unwrap_or(0.5);
							let circumference = 2.0 * PI * radius;
							let dash = circumference * frac;
							let gap = circumference * (1.0 - frac);
							let direction = if i % 2 == 0 { "normal" } else { "reverse" };
							view! {
								<g
									class="countdown-ring-spin"
									transform=format!("rotate({start_angle} 280 280)")
									style=format!(
										"animation-duration: {period}s; animation-direction: {direction}; transform-origin: 280px 280px;"
									)
								>
									<circle
										cx="280"
										cy="280"
										r=radius.to_string()
										fill="none"
										stroke="currentColor"
										stroke-width=stroke_width.to_string()
										stroke-linecap="round"
										stroke-dasharray=format!("{dash} {gap}")
									/>
								</g>
							}
						})
						.collect_view()
				}}
				<circle
					cx="280"
					cy="280"
					r="160"
					fill="none"
					stroke="rgba(255, 255, 255, 0.3)"
					stroke-width="4"
				/>
				<circle
					cx="280"
					cy="280"
					r="160"
					fill="none"
					stroke="currentColor"
					stroke-width="4"
					stroke-linecap="round"
					transform="rotate(-90 280 280)"
					stroke-dasharray=move || progress_ring().circumference.to_string()
					stroke-dashoffset=move || progress_ring().dash_offset.to_string()
				/>
			</svg>
			<div class="countdown-digits">{digits}</div>
			<div class="countdown-units">
				<span>"Days"</span>
				<span>"Hours"</span>
				<span>"Mins"</span>
				<span>"Secs"</span>
			</div>
		</div>
	}
}
