//! Transient sparks traveling along active edges of the point network.
//!
//! Sparks are owned solely by the animation loop: spawned probabilistically on
//! sufficiently active edges at a rate-limited cadence, advanced every frame,
//! and removed once they reach the far endpoint or their edge fades out. A
//! removed spark is never reused.

use std::collections::HashMap;

use crate::components::rng::Lcg;

use super::field::PointField;

/// Seconds between spawn passes.
const SPAWN_INTERVAL: f64 = 0.3;

/// Per-edge spawn probability at each spawn pass.
const SPAWN_CHANCE: f64 = 0.15;

/// An edge hosts at most this many sparks at once.
const MAX_PER_EDGE: usize = 2;

/// Minimum endpoint activity for an edge to emit sparks.
const SPAWN_ACTIVITY: f64 = 0.1;

/// Sparks die when either endpoint's activity decays below this.
const FADE_ACTIVITY: f64 = 0.01;

/// Per-update progress advance bounds.
const SPEED_MIN: f64 = 0.005;
const SPEED_MAX: f64 = 0.015;

/// Identity of an edge, independent of traversal direction.
///
/// Built from the endpoint coordinates quantized to hundredths, ordered so
/// that (a, b) and (b, a) collapse to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
	lo: (i64, i64),
	hi: (i64, i64),
}

impl EdgeKey {
	/// Key for the edge between `(ax, ay)` and `(bx, by)`.
	pub fn new(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
		let a = ((ax * 100.0).round() as i64, (ay * 100.0).round() as i64);
		let b = ((bx * 100.0).round() as i64, (by * 100.0).round() as i64);
		if a <= b {
			Self { lo: a, hi: b }
		} else {
			Self { lo: b, hi: a }
		}
	}
}

/// A glowing marker traveling from one point toward a neighbor.
#[derive(Clone, Debug)]
pub struct Spark {
	/// Index of the departure point.
	pub from: usize,
	/// Index of the arrival point.
	pub to: usize,
	/// Travel progress in `[0, 1)`; strictly increasing until removal.
	pub progress: f64,
	/// Edge identity at spawn time, used for the per-edge cap.
	pub key: EdgeKey,
	speed: f64,
}

impl Spark {
	fn new(from: usize, to: usize, key: EdgeKey, rng: &mut Lcg) -> Self {
		Self {
			from,
			to,
			progress: 0.0,
			key,
			speed: rng.range(SPEED_MIN, SPEED_MAX),
		}
	}

	/// Advance one update step. Returns `true` when the spark has arrived
	/// and must be removed.
	pub fn advance(&mut self) -> bool {
		self.progress += self.speed;
		self.progress >= 1.0
	}

	/// Interpolated position along the edge.
	pub fn position(&self, field: &PointField) -> (f64, f64) {
		let points = field.points();
		let (a, b) = (&points[self.from], &points[self.to]);
		(
			a.x + (b.x - a.x) * self.progress,
			a.y + (b.y - a.y) * self.progress,
		)
	}

	/// Opacity of the spark, the dimmer of its two endpoints.
	pub fn glow_alpha(&self, field: &PointField) -> f64 {
		let points = field.points();
		points[self.from].active.min(points[self.to].active)
	}
}

/// All live sparks plus the spawn rate limiter.
pub struct SparkSystem {
	sparks: Vec<Spark>,
	spawn_timer: f64,
}

impl SparkSystem {
	/// Empty system; the first spawn pass happens one interval after start.
	pub fn new() -> Self {
		Self {
			sparks: Vec::new(),
			spawn_timer: 0.0,
		}
	}

	/// Drop every live spark. Called on viewport resize.
	pub fn clear(&mut self) {
		self.sparks.clear();
		self.spawn_timer = 0.0;
	}

	/// Advance all sparks by one frame and run a spawn pass when the
	/// interval has elapsed. Must run after the field has settled this
	/// frame's activity values.
	pub fn tick(&mut self, field: &PointField, dt: f64, rng: &mut Lcg) {
		let points = field.points();
		self.sparks.retain_mut(|s| {
			if points[s.from].active < FADE_ACTIVITY || points[s.to].active < FADE_ACTIVITY {
				return false;
			}
			!s.advance()
		});

		self.spawn_timer += dt;
		if self.spawn_timer >= SPAWN_INTERVAL {
			self.spawn_timer = 0.0;
			self.spawn(field, rng);
		}
	}

	fn spawn(&mut self, field: &PointField, rng: &mut Lcg) {
		let mut per_edge: HashMap<EdgeKey, usize> = HashMap::new();
		for s in &self.sparks {
			*per_edge.entry(s.key).or_insert(0) += 1;
		}

		for (i, p) in field.points().iter().enumerate() {
			if p.active <= SPAWN_ACTIVITY {
				continue;
			}
			for &j in &p.neighbors {
				let q = &field.points()[j];
				let key = EdgeKey::new(p.x, p.y, q.x, q.y);
				let count = per_edge.get(&key).copied().unwrap_or(0);
				if count < MAX_PER_EDGE && rng.chance(SPAWN_CHANCE) {
					self.sparks.push(Spark::new(i, j, key, rng));
					per_edge.insert(key, count + 1);
				}
			}
		}
	}

	/// All live sparks.
	pub fn sparks(&self) -> &[Spark] {
		&self.sparks
	}

	/// Number of live sparks.
	pub fn len(&self) -> usize {
		self.sparks.len()
	}

	/// Whether no sparks are live.
	pub fn is_empty(&self) -> bool {
		self.sparks.is_empty()
	}
}

impl Default for SparkSystem {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn active_field() -> (PointField, Lcg) {
		let mut rng = Lcg::new(0x5EED);
		let mut field = PointField::new(1200.0, 800.0, 12, &mut rng);
		// Park the pointer on a point so its whole neighborhood is active.
		let (x, y) = {
			let p = &field.points()[40];
			(p.x, p.y)
		};
		field.set_target(x, y);
		field.tick(1e-9, &mut rng);
		(field, rng)
	}

	#[test]
	fn edge_key_is_order_independent() {
		let a = EdgeKey::new(1.234, 5.678, 9.0, 2.0);
		let b = EdgeKey::new(9.0, 2.0, 1.234, 5.678);
		assert_eq!(a, b);
	}

	#[test]
	fn edge_key_distinguishes_distinct_edges() {
		let a = EdgeKey::new(0.0, 0.0, 1.0, 1.0);
		let b = EdgeKey::new(0.0, 0.0, 1.0, 1.01);
		assert_ne!(a, b);
	}

	#[test]
	fn spark_progress_strictly_increases() {
		let mut rng = Lcg::new(11);
		let key = EdgeKey::new(0.0, 0.0, 1.0, 1.0);
		let mut spark = Spark::new(0, 1, key, &mut rng);
		let mut prev = spark.progress;
		loop {
			let done = spark.advance();
			assert!(spark.progress > prev);
			prev = spark.progress;
			if done {
				break;
			}
		}
		assert!(spark.progress >= 1.0);
	}

	#[test]
	fn spark_removed_exactly_at_arrival() {
		let mut rng = Lcg::new(12);
		let key = EdgeKey::new(0.0, 0.0, 1.0, 1.0);
		let mut spark = Spark::new(0, 1, key, &mut rng);
		let mut steps = 0;
		while !spark.advance() {
			steps += 1;
			assert!(spark.progress < 1.0);
			assert!(steps < 1000);
		}
	}

	#[test]
	fn spawn_respects_per_edge_cap() {
		let (field, mut rng) = active_field();
		let mut system = SparkSystem::new();
		// Force many spawn passes without letting sparks travel far.
		for _ in 0..50 {
			system.tick(&field, SPAWN_INTERVAL, &mut rng);
		}
		let mut per_edge: HashMap<EdgeKey, usize> = HashMap::new();
		for s in system.sparks() {
			*per_edge.entry(s.key).or_insert(0) += 1;
		}
		for count in per_edge.values() {
			assert!(*count <= MAX_PER_EDGE);
		}
	}

	/// Run spawn passes until at least one spark exists.
	fn spawn_some(system: &mut SparkSystem, field: &PointField, rng: &mut Lcg) {
		for _ in 0..50 {
			system.tick(field, SPAWN_INTERVAL, rng);
			if !system.is_empty() {
				return;
			}
		}
		panic!("no spark spawned after 50 passes");
	}

	#[test]
	fn no_spawn_before_interval_elapses() {
		let (field, mut rng) = active_field();
		let mut system = SparkSystem::new();
		system.tick(&field, SPAWN_INTERVAL / 2.0, &mut rng);
		assert!(system.is_empty());
	}

	#[test]
	fn baseline_activity_keeps_sparks_alive() {
		let (mut field, mut rng) = active_field();
		let mut system = SparkSystem::new();
		spawn_some(&mut system, &field, &mut rng);

		// Baseline activity is 0.05, which is above the fade threshold, so
		// pulling the pointer away alone does not cull sparks.
		field.set_target(1e9, 1e9);
		field.tick(1e-9, &mut rng);
		system.tick(&field, 1e-6, &mut rng);
		assert!(!system.is_empty());
	}

	#[test]
	fn sparks_on_faded_edges_are_culled() {
		let mut rng = Lcg::new(13);
		// A field that has never ticked still has zero activity everywhere.
		let field = PointField::new(1200.0, 800.0, 12, &mut rng);
		let mut system = SparkSystem::new();
		let key = EdgeKey::new(0.0, 0.0, 1.0, 1.0);
		system.sparks.push(Spark::new(0, 1, key, &mut rng));
		system.tick(&field, 1e-6, &mut rng);
		assert!(system.is_empty());
	}

	#[test]
	fn all_sparks_complete_eventually() {
		let (field, mut rng) = active_field();
		let mut system = SparkSystem::new();
		spawn_some(&mut system, &field, &mut rng);
		// Slowest spark needs 1/0.005 = 200 updates; run with dt well below
		// the spawn interval so no new sparks appear.
		for _ in 0..250 {
			system.tick(&field, 1e-6, &mut rng);
		}
		assert!(system.is_empty());
	}

	#[test]
	fn clear_empties_the_system() {
		let (field, mut rng) = active_field();
		let mut system = SparkSystem::new();
		spawn_some(&mut system, &field, &mut rng);
		system.clear();
		assert!(system.is_empty());
	}

	#[test]
	fn position_interpolates_along_edge() {
		let (field, mut rng) = active_field();
		let key = EdgeKey::new(0.0, 0.0, 1.0, 1.0);
		let spark = Spark::new(0, field.points()[0].neighbors[0], key, &mut rng);
		let (x, y) = spark.position(&field);
		assert_eq!(x, field.points()[0].x);
		assert_eq!(y, field.points()[0].y);
	}
}
