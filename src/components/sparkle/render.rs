//! Canvas rendering for the tracer effect.
//!
//! Unlike the point network, the surface is not cleared between frames: a
//! low-alpha veil of the background color is painted over the previous frame,
//! so trails fade out instead of vanishing.

use web_sys::CanvasRenderingContext2d;

use super::tracer::{Tracer, TracerField};
use crate::components::theme::{Theme, TracerStyle};

/// Pointer-proximity opacity boost at zero distance.
const ALPHA_BOOST: f64 = 0.05;

/// Base and maximum stroke widths, px.
const BASE_WIDTH: f64 = 2.0;
const MAX_WIDTH: f64 = 3.0;

/// Stroke alpha and width for a tracer, boosted near the pointer.
pub fn line_style(pointer_dist: f64, pointer_radius: f64, style: &TracerStyle) -> (f64, f64) {
	if pointer_dist < pointer_radius {
		let closeness = 1.0 - pointer_dist / pointer_radius;
		let alpha = (style.stroke.a + closeness * ALPHA_BOOST).min(style.max_alpha);
		(alpha, BASE_WIDTH + closeness * (MAX_WIDTH - BASE_WIDTH))
	} else {
		(style.stroke.a, BASE_WIDTH)
	}
}

/// Paint the fade veil and stroke every tracer's trail.
pub fn render(field: &TracerField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = theme.background;
	ctx.set_fill_style_str(&format!(
		"rgba({}, {}, {}, {})",
		bg.r, bg.g, bg.b, theme.tracer.veil_alpha
	));
	ctx.fill_rect(0.0, 0.0, field.width(), field.height());

	for line in field.lines() {
		draw_trail(line, field, ctx, theme);
	}
}

fn draw_trail(line: &Tracer, field: &TracerField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if line.path.len() < 2 {
		return;
	}

	let (alpha, width) = line_style(
		line.pointer_dist,
		field.opts().pointer_radius,
		&theme.tracer,
	);
	let stroke = theme.tracer.stroke;
	ctx.set_stroke_style_str(&format!(
		"rgba({}, {}, {}, {})",
		stroke.r, stroke.g, stroke.b, alpha
	));
	ctx.set_line_width(width);
	ctx.set_line_cap("round");
	ctx.set_line_join("round");

	ctx.begin_path();
	ctx.move_to(line.path[0].x, line.path[0].y);
	for p in &line.path[1..] {
		ctx.line_to(p.x, p.y);
	}
	ctx.stroke();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn style_at_rest_is_the_base() {
		let theme = Theme::default_theme();
		let (alpha, width) = line_style(1e9, 200.0, &theme.tracer);
		assert_eq!(alpha, theme.tracer.stroke.a);
		assert_eq!(width, BASE_WIDTH);
	}

	#[test]
	fn style_boost_is_capped() {
		let theme = Theme::default_theme();
		let (alpha, width) = line_style(0.0, 200.0, &theme.tracer);
		assert!(alpha <= theme.tracer.max_alpha);
		assert!(alpha > theme.tracer.stroke.a);
		assert_eq!(width, MAX_WIDTH);
	}
}
