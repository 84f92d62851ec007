//! Point grid, bounded-degree neighbor graph, drift, and pointer activity.
//!
//! The field owns every point in the network. It is created once when the
//! component mounts, then mutated each frame by the animation loop: `tick`
//! advances the drift cycles, periodically re-evaluates connections, and
//! recomputes per-point activity from the pointer target. All activity values
//! are settled before the renderer reads anything, so an edge's opacity always
//! reflects the same frame's pointer position at both endpoints.

use crate::components::rng::Lcg;

/// Degree cap: a point never holds more than this many neighbor links.
pub const MAX_NEIGHBORS: usize = 3;

/// Seconds between connection re-evaluation passes.
const CONNECTION_REFRESH_INTERVAL: f64 = 1.0;

/// Drift target jitter around the origin, in viewport units.
const DRIFT_SPAN: f64 = 50.0;

/// Drift cycle duration bounds, seconds.
const DRIFT_MIN_SECS: f64 = 3.0;
const DRIFT_MAX_SECS: f64 = 5.0;

// Pointer-proximity bands, in squared viewport units.
const NEAR_BAND_SQ: f64 = 4_000.0;
const MID_BAND_SQ: f64 = 20_000.0;
const FAR_BAND_SQ: f64 = 40_000.0;

const BASE_LINE_ALPHA: f64 = 0.05;
const BASE_LABEL_ALPHA: f64 = 0.1;
const NEAR_LINE_ALPHA: f64 = 0.3;
const NEAR_LABEL_ALPHA: f64 = 0.6;
const FAR_LINE_ALPHA: f64 = 0.15;
const FAR_LABEL_ALPHA: f64 = 0.3;

/// One in-flight drift cycle: an eased glide from `start` to `end`.
#[derive(Clone, Debug)]
struct Drift {
	start_x: f64,
	start_y: f64,
	end_x: f64,
	end_y: f64,
	elapsed: f64,
	duration: f64,
}

impl Drift {
	/// Begin a new cycle from the current position toward a jittered target
	/// around the origin.
	fn begin(x: f64, y: f64, origin_x: f64, origin_y: f64, rng: &mut Lcg) -> Self {
		Self {
			start_x: x,
			start_y: y,
			end_x: origin_x + rng.range(-DRIFT_SPAN, DRIFT_SPAN),
			end_y: origin_y + rng.range(-DRIFT_SPAN, DRIFT_SPAN),
			elapsed: 0.0,
			duration: rng.range(DRIFT_MIN_SECS, DRIFT_MAX_SECS),
		}
	}
}

/// A node in the decorative network.
#[derive(Clone, Debug)]
pub struct Point {
	/// Current position.
	pub x: f64,
	/// Current position.
	pub y: f64,
	/// Drift anchor; updated to the arrival point at the end of each cycle.
	pub origin_x: f64,
	/// Drift anchor; updated to the arrival point at the end of each cycle.
	pub origin_y: f64,
	/// Line opacity in `[0, 1]`, derived from pointer distance each frame.
	pub active: f64,
	/// Label opacity in `[0, 1]`, derived from pointer distance each frame.
	pub label_active: f64,
	/// Label font size in px, fixed at creation.
	pub label_size: f64,
	/// Indices of connected points, at most [`MAX_NEIGHBORS`].
	pub neighbors: Vec<usize>,
	drift: Drift,
}

/// Circular ease-in-out over `t` in `[0, 1]`.
fn ease_in_out_circ(t: f64) -> f64 {
	if t < 0.5 {
		0.5 * (1.0 - (1.0 - 4.0 * t * t).max(0.0).sqrt())
	} else {
		let u = 1.0 - t;
		0.5 * ((1.0 - 4.0 * u * u).max(0.0).sqrt() + 1.0)
	}
}

/// Map squared pointer distance to (line alpha, label alpha).
///
/// Step bands near the pointer, linear falloff between them, and a constant
/// floor far away so the network never disappears entirely.
fn activity_for(dist_sq: f64) -> (f64, f64) {
	if dist_sq < NEAR_BAND_SQ {
		(NEAR_LINE_ALPHA, NEAR_LABEL_ALPHA)
	} else if dist_sq < MID_BAND_SQ {
		let factor = 1.0 - (dist_sq - NEAR_BAND_SQ) / (MID_BAND_SQ - NEAR_BAND_SQ);
		(
			BASE_LINE_ALPHA + (NEAR_LINE_ALPHA - BASE_LINE_ALPHA) * factor,
			BASE_LABEL_ALPHA + (NEAR_LABEL_ALPHA - BASE_LABEL_ALPHA) * factor,
		)
	} else if dist_sq < FAR_BAND_SQ {
		let factor = 1.0 - (dist_sq - MID_BAND_SQ) / (FAR_BAND_SQ - MID_BAND_SQ);
		(
			BASE_LINE_ALPHA + (FAR_LINE_ALPHA - BASE_LINE_ALPHA) * factor,
			BASE_LABEL_ALPHA + (FAR_LABEL_ALPHA - BASE_LABEL_ALPHA) * factor,
		)
	} else {
		(BASE_LINE_ALPHA, BASE_LABEL_ALPHA)
	}
}

/// The live point network covering the viewport.
///
/// Mutated exclusively by one animation loop; no other reader or writer
/// exists while the loop runs.
pub struct PointField {
	points: Vec<Point>,
	width: f64,
	height: f64,
	grid_divisor: u32,
	target_x: f64,
	target_y: f64,
	max_dist_sq: f64,
	refresh_timer: f64,
}

impl PointField {
	/// Build the grid for a viewport and wire the initial neighbor graph.
	///
	/// The pointer target starts at the viewport center until the first
	/// pointer event arrives.
	pub fn new(width: f64, height: f64, grid_divisor: u32, rng: &mut Lcg) -> Self {
		let mut field = Self {
			points: Vec::new(),
			width,
			height,
			grid_divisor: grid_divisor.max(1),
			target_x: width / 2.0,
			target_y: height / 2.0,
			max_dist_sq: 0.0,
			refresh_timer: 0.0,
		};
		field.reinit(width, height, rng);
		field
	}

	/// Discard all points and rebuild the grid for new viewport dimensions.
	/// Drift cycles restart; the pointer target recenters.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut Lcg) {
		self.reinit(width, height, rng);
	}

	fn reinit(&mut self, width: f64, height: f64, rng: &mut Lcg) {
		self.width = width;
		self.height = height;
		self.target_x = width / 2.0;
		self.target_y = height / 2.0;
		let max_dist = width.min(height) * 0.25;
		self.max_dist_sq = max_dist * max_dist;
		self.refresh_timer = 0.0;

		let divisor = self.grid_divisor;
		let cell_w = width / divisor as f64;
		let cell_h = height / divisor as f64;

		self.points.clear();
		for col in 0..divisor {
			for row in 0..divisor {
				let px = col as f64 * cell_w + rng.next_f64() * cell_w;
				let py = row as f64 * cell_h + rng.next_f64() * cell_h;
				self.points.push(Point {
					x: px,
					y: py,
					origin_x: px,
					origin_y: py,
					active: 0.0,
					label_active: 0.0,
					label_size: 16.0 + rng.next_f64() * 8.0,
					neighbors: Vec::with_capacity(MAX_NEIGHBORS),
					drift: Drift::begin(px, py, px, py, rng),
				});
			}
		}

		self.init_connections();
		self.repair_isolated();
	}

	/// Assign each point its three geometrically nearest peers, mirroring the
	/// link onto the peer when it still has spare capacity. Mirrors are
	/// opportunistic, not forced: a peer already at the cap stays as it is,
	/// so the graph may be asymmetric.
	fn init_connections(&mut self) {
		let n = self.points.len();
		for i in 0..n {
			let mut dists: Vec<(usize, f64)> = (0..n)
				.filter(|&j| j != i)
				.map(|j| (j, self.dist_sq(i, j)))
				.collect();
			dists.sort_by(|a, b| a.1.total_cmp(&b.1));

			let closest: Vec<usize> =
				dists.iter().take(MAX_NEIGHBORS).map(|&(j, _)| j).collect();
			self.points[i].neighbors = closest.clone();

			for j in closest {
				if !self.points[j].neighbors.contains(&i)
					&& self.points[j].neighbors.len() < MAX_NEIGHBORS
				{
					self.points[j].neighbors.push(i);
				}
			}
		}
	}

	/// Connect any point left with no links to its single nearest peer,
	/// bypassing the cap on the isolated side.
	fn repair_isolated(&mut self) {
		let n = self.points.len();
		for i in 0..n {
			if !self.points[i].neighbors.is_empty() {
				continue;
			}
			let nearest = (0..n)
				.filter(|&j| j != i)
				.min_by(|&a, &b| self.dist_sq(i, a).total_cmp(&self.dist_sq(i, b)));
			if let Some(j) = nearest {
				self.points[i].neighbors.push(j);
				if !self.points[j].neighbors.contains(&i)
					&& self.points[j].neighbors.len() < MAX_NEIGHBORS
				{
					self.points[j].neighbors.push(i);
				}
			}
		}
	}

	/// Re-evaluate the neighbor graph against the distance threshold: sever
	/// links that drifted out of range (from both sides), then greedily top
	/// up under-connected points from the nearest in-range candidates that
	/// themselves have spare capacity.
	pub fn refresh_connections(&mut self) {
		let n = self.points.len();
		for i in 0..n {
			let mut k = 0;
			while k < self.points[i].neighbors.len() {
				let j = self.points[i].neighbors[k];
				if self.dist_sq(i, j) > self.max_dist_sq {
					self.points[i].neighbors.remove(k);
					if let Some(pos) = self.points[j].neighbors.iter().position(|&p| p == i) {
						self.points[j].neighbors.remove(pos);
					}
				} else {
					k += 1;
				}
			}

			if self.points[i].neighbors.len() >= MAX_NEIGHBORS {
				continue;
			}
			let mut candidates: Vec<(usize, f64)> = (0..n)
				.filter(|&j| j != i && !self.points[i].neighbors.contains(&j))
				.map(|j| (j, self.dist_sq(i, j)))
				.filter(|&(_, d2)| d2 <= self.max_dist_sq)
				.collect();
			candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

			for (j, _) in candidates {
				if self.points[i].neighbors.len() >= MAX_NEIGHBORS {
					break;
				}
				if self.points[j].neighbors.len() < MAX_NEIGHBORS {
					self.points[i].neighbors.push(j);
					if !self.points[j].neighbors.contains(&i) {
						self.points[j].neighbors.push(i);
					}
				}
			}
		}
	}

	/// Advance the field by `dt` seconds: run a connection refresh when the
	/// interval elapses, drift every point, then settle activity levels.
	pub fn tick(&mut self, dt: f64, rng: &mut Lcg) {
		self.refresh_timer += dt;
		if self.refresh_timer >= CONNECTION_REFRESH_INTERVAL {
			self.refresh_connections();
			self.refresh_timer = 0.0;
		}

		for p in &mut self.points {
			p.drift.elapsed += dt;
			let t = (p.drift.elapsed / p.drift.duration).min(1.0);
			let eased = ease_in_out_circ(t);
			p.x = p.drift.start_x + (p.drift.end_x - p.drift.start_x) * eased;
			p.y = p.drift.start_y + (p.drift.end_y - p.drift.start_y) * eased;
			if t >= 1.0 {
				p.origin_x = p.x;
				p.origin_y = p.y;
				p.drift = Drift::begin(p.x, p.y, p.origin_x, p.origin_y, rng);
			}
		}

		for p in &mut self.points {
			let dx = self.target_x - p.x;
			let dy = self.target_y - p.y;
			let (active, label_active) = activity_for(dx * dx + dy * dy);
			p.active = active;
			p.label_active = label_active;
		}
	}

	/// Retarget activity toward a new pointer position.
	pub fn set_target(&mut self, x: f64, y: f64) {
		self.target_x = x;
		self.target_y = y;
	}

	/// All points in the field.
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	/// Number of points in the field.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether the field holds no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Viewport width the grid was built for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height the grid was built for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Squared maximum connection distance for the current viewport.
	pub fn max_connection_dist_sq(&self) -> f64 {
		self.max_dist_sq
	}

	fn dist_sq(&self, i: usize, j: usize) -> f64 {
		let (a, b) = (&self.points[i], &self.points[j]);
		let dx = a.x - b.x;
		let dy = a.y - b.y;
		dx * dx + dy * dy
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64) -> PointField {
		let mut rng = Lcg::new(0xBAD5EED);
		PointField::new(width, height, 12, &mut rng)
	}

	#[test]
	fn grid_has_one_point_per_cell() {
		let f = field(1200.0, 800.0);
		assert_eq!(f.len(), 144);
		for p in f.points() {
			assert!(p.x >= 0.0 && p.x <= 1200.0);
			assert!(p.y >= 0.0 && p.y <= 800.0);
		}
	}

	#[test]
	fn grid_points_stay_inside_their_cells() {
		let f = field(1200.0, 800.0);
		// Column-major fill: index = col * 12 + row.
		for (idx, p) in f.points().iter().enumerate() {
			let col = (idx / 12) as f64;
			let row = (idx % 12) as f64;
			assert!(p.x >= col * 100.0 && p.x < (col + 1.0) * 100.0);
			let cell_h = 800.0 / 12.0;
			assert!(p.y >= row * cell_h && p.y < (row + 1.0) * cell_h);
		}
	}

	#[test]
	fn neighbor_count_bounded() {
		let f = field(1200.0, 800.0);
		for p in f.points() {
			assert!(p.neighbors.len() <= MAX_NEIGHBORS);
			assert!(!p.neighbors.is_empty());
		}
	}

	#[test]
	fn no_self_edges() {
		let f = field(1200.0, 800.0);
		for (i, p) in f.points().iter().enumerate() {
			assert!(!p.neighbors.contains(&i));
		}
	}

	#[test]
	fn initial_neighbors_are_the_three_nearest() {
		let f = field(1200.0, 800.0);
		for (i, p) in f.points().iter().enumerate() {
			let mut dists: Vec<(usize, f64)> = (0..f.len())
				.filter(|&j| j != i)
				.map(|j| (j, f.dist_sq(i, j)))
				.collect();
			dists.sort_by(|a, b| a.1.total_cmp(&b.1));
			for (j, _) in dists.iter().take(MAX_NEIGHBORS) {
				assert!(p.neighbors.contains(j));
			}
		}
	}

	#[test]
	fn refresh_drops_overlong_edges() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(1);
		// Drift for a while so some edges stretch past the threshold.
		for _ in 0..600 {
			f.tick(1.0 / 60.0, &mut rng);
		}
		f.refresh_connections();
		let max_d2 = f.max_connection_dist_sq();
		for (i, p) in f.points().iter().enumerate() {
			for &j in &p.neighbors {
				assert!(f.dist_sq(i, j) <= max_d2);
			}
		}
	}

	#[test]
	fn refresh_preserves_degree_cap() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(2);
		for _ in 0..300 {
			f.tick(1.0 / 60.0, &mut rng);
		}
		for p in f.points() {
			assert!(p.neighbors.len() <= MAX_NEIGHBORS);
		}
	}

	#[test]
	fn activity_bands_at_extremes() {
		let (line, label) = activity_for(0.0);
		assert_eq!(line, 0.3);
		assert_eq!(label, 0.6);

		let (line, label) = activity_for(f64::MAX);
		assert_eq!(line, 0.05);
		assert_eq!(label, 0.1);
	}

	#[test]
	fn activity_is_continuous_at_band_edges() {
		for d2 in [4_000.0, 20_000.0, 40_000.0] {
			let below = activity_for(d2 - 1e-6);
			let above = activity_for(d2);
			assert!((below.0 - above.0).abs() < 1e-3);
			assert!((below.1 - above.1).abs() < 1e-3);
		}
	}

	#[test]
	fn activity_never_drops_below_baseline() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(3);
		f.set_target(-10_000.0, -10_000.0);
		f.tick(1.0 / 60.0, &mut rng);
		for p in f.points() {
			assert!(p.active >= 0.05);
			assert!(p.label_active >= 0.1);
		}
	}

	#[test]
	fn pointer_on_point_hits_near_band() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(4);
		let (px, py) = {
			let p = &f.points()[0];
			(p.x, p.y)
		};
		f.set_target(px, py);
		f.tick(1e-9, &mut rng);
		let p = &f.points()[0];
		assert!((p.active - 0.3).abs() < 1e-6);
		assert!((p.label_active - 0.6).abs() < 1e-6);
	}

	#[test]
	fn drift_stays_near_origin() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(5);
		for _ in 0..120 {
			f.tick(1.0 / 60.0, &mut rng);
		}
		// Within a single cycle a point can be at most one full span from
		// the origin it started the cycle with.
		for p in f.points() {
			assert!((p.x - p.origin_x).abs() <= DRIFT_SPAN + 1e-9);
			assert!((p.y - p.origin_y).abs() <= DRIFT_SPAN + 1e-9);
		}
	}

	#[test]
	fn drift_cycles_replace_origin() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(6);
		let before: Vec<(f64, f64)> =
			f.points().iter().map(|p| (p.origin_x, p.origin_y)).collect();
		// Longest cycle is five seconds; six guarantees every point rolled over.
		for _ in 0..360 {
			f.tick(1.0 / 60.0, &mut rng);
		}
		let moved = f
			.points()
			.iter()
			.zip(&before)
			.filter(|(p, (ox, oy))| p.origin_x != *ox || p.origin_y != *oy)
			.count();
		assert_eq!(moved, f.len());
	}

	#[test]
	fn resize_rebuilds_grid() {
		let mut f = field(1200.0, 800.0);
		let mut rng = Lcg::new(7);
		f.resize(600.0, 600.0, &mut rng);
		assert_eq!(f.len(), 144);
		for p in f.points() {
			assert!(p.x >= 0.0 && p.x <= 600.0);
			assert!(p.y >= 0.0 && p.y <= 600.0);
			assert!(!p.neighbors.is_empty());
		}
		let expected = (600.0_f64 * 0.25) * (600.0 * 0.25);
		assert!((f.max_connection_dist_sq() - expected).abs() < 1e-9);
	}

	#[test]
	fn easing_endpoints_and_midpoint() {
		assert_eq!(ease_in_out_circ(0.0), 0.0);
		assert_eq!(ease_in_out_circ(1.0), 1.0);
		assert!((ease_in_out_circ(0.5) - 0.5).abs() < 1e-9);
	}

	#[test]
	fn easing_is_monotonic() {
		let mut prev = 0.0;
		for i in 0..=100 {
			let v = ease_in_out_circ(i as f64 / 100.0);
			assert!(v >= prev - 1e-12);
			prev = v;
		}
	}

	#[test]
	fn tiny_grid_repair_connects_everyone() {
		let mut rng = Lcg::new(8);
		let f = PointField::new(100.0, 100.0, 2, &mut rng);
		assert_eq!(f.len(), 4);
		for p in f.points() {
			assert!(!p.neighbors.is_empty());
			assert!(p.neighbors.len() <= MAX_NEIGHBORS);
		}
	}
}
