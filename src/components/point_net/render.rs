//! Canvas rendering for the point network.
//!
//! One pass per frame: clear, stroke every active point's connection lines and
//! its label, then draw the sparks on top. The field has already settled this
//! frame's activity values by the time this runs, so both endpoints of an edge
//! reflect the same pointer position.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Point, PointField};
use super::sparks::{Spark, SparkSystem};
use crate::components::theme::Theme;

/// Render the complete network to the canvas.
pub fn render(
	field: &PointField,
	sparks: &SparkSystem,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in field.points() {
		if p.active <= 0.0 {
			continue;
		}
		draw_lines(field, ctx, theme, p);
		if p.label_active > 0.0 {
			draw_label(ctx, theme, p);
		}
	}

	for spark in sparks.sparks() {
		draw_spark(field, ctx, theme, spark);
	}
}

fn draw_lines(field: &PointField, ctx: &CanvasRenderingContext2d, theme: &Theme, p: &Point) {
	let line = &theme.network.line;
	ctx.set_stroke_style_str(&format!(
		"rgba({}, {}, {}, {})",
		line.r, line.g, line.b, p.active
	));
	for &j in &p.neighbors {
		let q = &field.points()[j];
		ctx.begin_path();
		ctx.move_to(p.x, p.y);
		ctx.line_to(q.x, q.y);
		ctx.stroke();
	}
}

fn draw_label(ctx: &CanvasRenderingContext2d, theme: &Theme, p: &Point) {
	let label = &theme.network.label;
	ctx.save();
	ctx.set_font(&format!("bold {}px Arial", p.label_size));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&format!(
		"rgba({}, {}, {}, {})",
		label.r, label.g, label.b, p.label_active
	));
	let _ = ctx.fill_text(theme.network.label_text, p.x, p.y);
	ctx.restore();
}

fn draw_spark(field: &PointField, ctx: &CanvasRenderingContext2d, theme: &Theme, spark: &Spark) {
	let (x, y) = spark.position(field);
	let alpha = spark.glow_alpha(field);
	let style = &theme.spark;

	ctx.save();

	let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, style.glow_radius) else {
		ctx.restore();
		return;
	};
	let glow = style.glow;
	let _ = gradient.add_color_stop(0.0, &glow.with_alpha(alpha * 0.8).to_css());
	let _ = gradient.add_color_stop(0.5, &glow.with_alpha(alpha * 0.4).to_css());
	let _ = gradient.add_color_stop(1.0, &glow.with_alpha(0.0).to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	let _ = ctx.arc(x, y, style.glow_radius, 0.0, 2.0 * PI);
	ctx.fill();

	let core = style.core;
	ctx.set_fill_style_str(&format!(
		"rgba({}, {}, {}, {})",
		core.r,
		core.g,
		core.b,
		alpha * 0.9
	));
	ctx.begin_path();
	let _ = ctx.arc(x, y, style.core_radius, 0.0, 2.0 * PI);
	ctx.fill();

	ctx.restore();
}
