//! Leptos component wrapping the point-network canvas.
//!
//! The component creates a full-viewport canvas layered behind the page
//! content and wires up window-level pointer and resize handlers. An animation
//! loop runs via `requestAnimationFrame`, advancing the field and spark system
//! each frame before rendering. Everything is torn down together when the
//! component is disposed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::PointField;
use super::render;
use super::sparks::SparkSystem;
use crate::components::rng::Lcg;
use crate::components::theme::Theme;

/// Per-frame timestep; the loop assumes the display's nominal 60 Hz cadence.
const FRAME_DT: f64 = 0.016;

/// Bundles the field and spark state owned by one mounted backdrop.
struct BackdropContext {
	field: PointField,
	sparks: SparkSystem,
	rng: Lcg,
	theme: Theme,
}

/// Whether the platform reports touch capability. Pointer tracking is
/// suppressed there; activity stays anchored to the viewport center.
fn is_touch_device(window: &Window) -> bool {
	js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

/// Renders the animated point network on a fixed full-viewport canvas.
///
/// Decorative only: the canvas sits behind the page content and ignores
/// pointer interaction. If the 2d context is unavailable the component mounts
/// an inert canvas and draws nothing.
#[component]
pub fn PointNetBackdrop(
	/// Cells per viewport axis for the point grid.
	#[prop(default = 12)]
	grid_divisor: u32,
	/// Visual theme.
	#[prop(default = Theme::default_theme())]
	theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

	let (context_init, animate_init, resize_cb_init, pointer_cb_init, frame_id_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		pointer_cb.clone(),
		frame_id.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = (
			window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
			window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// Best-effort visual: without a 2d context there is nothing to do.
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		let mut rng = Lcg::new(js_sys::Date::now() as u32);
		let field = PointField::new(w, h, grid_divisor, &mut rng);
		info!(
			"point-net backdrop: {} points over {}x{}",
			field.len(),
			w as u32,
			h as u32
		);

		*context_init.borrow_mut() = Some(BackdropContext {
			field,
			sparks: SparkSystem::new(),
			rng,
			theme: theme.clone(),
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = (
				win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
				win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				let BackdropContext {
					field, sparks, rng, ..
				} = c;
				field.resize(nw, nh, rng);
				sparks.clear();
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if !is_touch_device(&window) {
			let context_pointer = context_init.clone();
			*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
				if let Some(ref mut c) = *context_pointer.borrow_mut() {
					// The canvas is viewport-fixed, so client coordinates
					// are canvas coordinates.
					c.field.set_target(ev.client_x() as f64, ev.client_y() as f64);
				}
			}));
			if let Some(ref cb) = *pointer_cb_init.borrow() {
				let _ = window
					.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner, frame_id_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let BackdropContext {
					field,
					sparks,
					rng,
					theme,
				} = c;
				field.tick(FRAME_DT, rng);
				sparks.tick(field, FRAME_DT, rng);
				render::render(field, sparks, &ctx, theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					frame_id_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			frame_id_init.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let cleanup = SendWrapper::new((frame_id, resize_cb, pointer_cb, animate, context));
	on_cleanup(move || {
		let (frame_id, resize_cb, pointer_cb, animate, context) = &*cleanup;
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = pointer_cb.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		animate.borrow_mut().take();
		context.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="point-net-backdrop"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;"
		/>
	}
}
