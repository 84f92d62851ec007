//! Leptos component wrapping the tracer canvas.
//!
//! Same loop shape as the point-network component: one `requestAnimationFrame`
//! closure driving a privately owned state object. The canvas starts fully
//! painted with the background color and is repainted with a translucent veil
//! each frame; resize repaints it opaquely and resets the trails.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::tracer::{TracerField, TracerOptions};
use crate::components::rng::Lcg;
use crate::components::theme::Theme;

/// Per-frame timestep; the loop assumes the display's nominal 60 Hz cadence.
const FRAME_DT: f64 = 0.016;

struct SparkleContext {
	field: TracerField,
	rng: Lcg,
	theme: Theme,
}

fn paint_background(ctx: &CanvasRenderingContext2d, theme: &Theme, w: f64, h: f64) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, w, h);
}

/// Renders the wandering-tracer animation on a fixed full-viewport canvas.
///
/// Decorative only; mounts an inert canvas when the 2d context is
/// unavailable.
#[component]
pub fn SparkleBackdrop(
	/// Maximum number of concurrent tracer lines.
	#[prop(default = 20)]
	max_lines: usize,
	/// Visual theme.
	#[prop(default = Theme::default_theme())]
	theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SparkleContext>>> = Rc::new(RefCell::new(None));
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

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		paint_background(&ctx, &theme, w, h);

		let opts = TracerOptions {
			max_lines,
			..TracerOptions::default()
		};
		*context_init.borrow_mut() = Some(SparkleContext {
			field: TracerField::new(w, h, opts),
			rng: Lcg::new(js_sys::Date::now() as u32),
			theme: theme.clone(),
		});

		let (context_resize, canvas_resize, ctx_resize) =
			(context_init.clone(), canvas.clone(), ctx.clone());
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
				c.field.resize(nw, nh);
				paint_background(&ctx_resize, &c.theme, nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let context_pointer = context_init.clone();
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.field.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, frame_id_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let SparkleContext { field, rng, theme } = c;
				field.tick(FRAME_DT, rng);
				render::render(field, &ctx, theme);
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
			class="sparkle-backdrop"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;"
		/>
	}
}
