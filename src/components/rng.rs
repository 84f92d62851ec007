//! Small deterministic random source shared by the animation engines.
//!
//! The backdrop only needs visual jitter, not statistical quality, and a
//! seeded generator keeps every engine reproducible under test. Seed from
//! `js_sys::Date::now()` at mount for a different look per page load.

/// Linear congruential generator (numerical-recipes constants).
#[derive(Clone, Debug)]
pub struct Lcg {
	state: u32,
}

impl Lcg {
	/// Create a generator from an explicit seed.
	pub fn new(seed: u32) -> Self {
		Self { state: seed }
	}

	/// Next value uniform in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
		self.state as f64 / (u32::MAX as f64 + 1.0)
	}

	/// Uniform value in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + (hi - lo) * self.next_f64()
	}

	/// Bernoulli trial with probability `p`.
	pub fn chance(&mut self, p: f64) -> bool {
		self.next_f64() < p
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn values_stay_in_unit_interval() {
		let mut rng = Lcg::new(7);
		for _ in 0..1000 {
			let v = rng.next_f64();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = Lcg::new(42);
		let mut b = Lcg::new(42);
		for _ in 0..100 {
			assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
		}
	}

	#[test]
	fn range_respects_bounds() {
		let mut rng = Lcg::new(3);
		for _ in 0..1000 {
			let v = rng.range(-50.0, 50.0);
			assert!((-50.0..50.0).contains(&v));
		}
	}

	#[test]
	fn chance_extremes() {
		let mut rng = Lcg::new(9);
		for _ in 0..100 {
			assert!(!rng.chance(0.0));
			assert!(rng.chance(1.0));
		}
	}
}
