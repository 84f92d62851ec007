//! Wandering tracer lines radiating from the viewport center.
//!
//! Each tracer walks a hexagonal lattice: one step per phase, turning ±60°
//! at every phase boundary, with a sine half-wave easing the glide within a
//! phase. A tracer dies (and restarts from the center) by chance at a phase
//! boundary or when it leaves the half-viewport bound. The stroked trail is
//! the timestamped path history trimmed to a trailing window; the canvas is
//! veiled rather than cleared each frame, so older trail segments fade out.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::components::rng::Lcg;

/// Turn per phase boundary: one sixth of a revolution.
const TURN: f64 = TAU / 6.0;

/// Pointer pull distance in px at full influence.
const POINTER_PULL_PX: f64 = 10.0;

/// Tuning for the tracer effect.
#[derive(Clone, Debug)]
pub struct TracerOptions {
	/// Lattice step length in px.
	pub step_len: f64,
	/// Maximum number of live tracers.
	pub max_lines: usize,
	/// Minimum phase duration in frames.
	pub base_time: f64,
	/// Additional randomized phase duration in frames.
	pub added_time: f64,
	/// Probability of dying at a phase boundary.
	pub die_chance: f64,
	/// Probability of spawning a new tracer per frame while under the cap.
	pub spawn_chance: f64,
	/// Trailing window of path history that gets stroked, seconds.
	pub trail_seconds: f64,
	/// Pointer influence radius in px.
	pub pointer_radius: f64,
	/// Maximum fraction of the pointer offset applied as pull.
	pub pointer_pull: f64,
}

impl Default for TracerOptions {
	fn default() -> Self {
		Self {
			step_len: 60.0,
			max_lines: 20,
			base_time: 60.0,
			added_time: 40.0,
			die_chance: 0.05,
			spawn_chance: 0.5,
			trail_seconds: 2.0,
			pointer_radius: 200.0,
			pointer_pull: 0.3,
		}
	}
}

/// One timestamped sample of a tracer's path.
#[derive(Clone, Copy, Debug)]
pub struct PathPoint {
	/// Screen position.
	pub x: f64,
	/// Screen position.
	pub y: f64,
	/// Field clock at the time of the sample, seconds.
	pub time: f64,
}

/// A single wandering line.
#[derive(Clone, Debug)]
pub struct Tracer {
	/// Lattice position, in units of the step length.
	x: f64,
	y: f64,
	/// Unit direction of the current phase.
	added_x: f64,
	added_y: f64,
	/// Accumulated heading, a multiple of [`TURN`].
	rad: f64,
	time: u32,
	target_time: u32,
	/// Distance from the pointer at the latest step, px.
	pub pointer_dist: f64,
	/// Trimmed path history, oldest first.
	pub path: Vec<PathPoint>,
}

impl Tracer {
	fn new(die_x: f64, die_y: f64, opts: &TracerOptions, rng: &mut Lcg) -> Self {
		let mut tracer = Self {
			x: 0.0,
			y: 0.0,
			added_x: 0.0,
			added_y: 0.0,
			rad: 0.0,
			time: 0,
			target_time: 1,
			pointer_dist: f64::MAX,
			path: Vec::new(),
		};
		tracer.begin_phase(die_x, die_y, opts, rng);
		tracer
	}

	/// Restart from the lattice origin with an empty trail.
	fn reset(&mut self, die_x: f64, die_y: f64, opts: &TracerOptions, rng: &mut Lcg) {
		self.x = 0.0;
		self.y = 0.0;
		self.added_x = 0.0;
		self.added_y = 0.0;
		self.rad = 0.0;
		self.path.clear();
		self.begin_phase(die_x, die_y, opts, rng);
	}

	/// Commit the finished step, pick the next turn and duration, and die if
	/// the chance roll or the bounds say so.
	fn begin_phase(&mut self, die_x: f64, die_y: f64, opts: &TracerOptions, rng: &mut Lcg) {
		self.x += self.added_x;
		self.y += self.added_y;
		self.time = 0;
		self.target_time = (opts.base_time + opts.added_time * rng.next_f64()).floor() as u32;
		self.target_time = self.target_time.max(1);
		self.rad += if rng.chance(0.5) { TURN } else { -TURN };
		self.added_x = self.rad.cos();
		self.added_y = self.rad.sin();

		if rng.chance(opts.die_chance)
			|| self.x.abs() > die_x
			|| self.y.abs() > die_y
		{
			self.reset(die_x, die_y, opts, rng);
		}
	}

	/// Advance one frame: ease along the current step, apply pointer pull,
	/// record the sample, and trim the trail window.
	#[allow(clippy::too_many_arguments)]
	fn step(
		&mut self,
		now: f64,
		cx: f64,
		cy: f64,
		pointer: (f64, f64),
		die_x: f64,
		die_y: f64,
		opts: &TracerOptions,
		rng: &mut Lcg,
	) {
		self.time += 1;
		if self.time >= self.target_time {
			self.begin_phase(die_x, die_y, opts, rng);
		}

		let prop = self.time as f64 / self.target_time as f64;
		let wave = (prop * FRAC_PI_2).sin();
		let mut px = cx + (self.x + self.added_x * wave) * opts.step_len;
		let mut py = cy + (self.y + self.added_y * wave) * opts.step_len;

		let dx = pointer.0 - px;
		let dy = pointer.1 - py;
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < opts.pointer_radius && dist > 0.0 {
			let influence = (1.0 - dist / opts.pointer_radius) * opts.pointer_pull;
			let angle = dy.atan2(dx);
			px += angle.cos() * influence * POINTER_PULL_PX;
			py += angle.sin() * influence * POINTER_PULL_PX;
		}
		self.pointer_dist = dist;

		self.path.push(PathPoint {
			x: px,
			y: py,
			time: now,
		});
		let cutoff = now - opts.trail_seconds;
		self.path.retain(|p| p.time > cutoff);
	}
}

/// All live tracers plus the shared clock and pointer target.
pub struct TracerField {
	lines: Vec<Tracer>,
	width: f64,
	height: f64,
	die_x: f64,
	die_y: f64,
	pointer: (f64, f64),
	clock: f64,
	opts: TracerOptions,
}

impl TracerField {
	/// Empty field for a viewport; tracers spawn over the following frames.
	pub fn new(width: f64, height: f64, opts: TracerOptions) -> Self {
		let mut field = Self {
			lines: Vec::new(),
			width: 0.0,
			height: 0.0,
			die_x: 0.0,
			die_y: 0.0,
			pointer: (0.0, 0.0),
			clock: 0.0,
			opts,
		};
		field.set_bounds(width, height);
		field
	}

	fn set_bounds(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.die_x = width / 2.0 / self.opts.step_len;
		self.die_y = height / 2.0 / self.opts.step_len;
		self.pointer = (width / 2.0, height / 2.0);
	}

	/// Adopt new viewport dimensions: trails clear and the pointer recenters,
	/// but live tracers keep their lattice positions (out-of-bound ones die
	/// at their next phase boundary).
	pub fn resize(&mut self, width: f64, height: f64) {
		self.set_bounds(width, height);
		for line in &mut self.lines {
			line.path.clear();
		}
	}

	/// Track a new pointer position.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}

	/// Advance one frame: maybe spawn a tracer, then step every line.
	pub fn tick(&mut self, dt: f64, rng: &mut Lcg) {
		self.clock += dt;

		if self.lines.len() < self.opts.max_lines && rng.chance(self.opts.spawn_chance) {
			self.lines
				.push(Tracer::new(self.die_x, self.die_y, &self.opts, rng));
		}

		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		for line in &mut self.lines {
			line.step(
				self.clock,
				cx,
				cy,
				self.pointer,
				self.die_x,
				self.die_y,
				&self.opts,
				rng,
			);
		}
	}

	/// All live tracers.
	pub fn lines(&self) -> &[Tracer] {
		&self.lines
	}

	/// Effect tuning.
	pub fn opts(&self) -> &TracerOptions {
		&self.opts
	}

	/// Viewport width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height.
	pub fn height(&self) -> f64 {
		self.height
	}
}
