//! Presale countdown arithmetic.

use crate::components::rng::Lcg;

/// Remaining time, maintained by a once-per-second cascading decrement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeLeft {
	/// Whole days remaining.
	pub days: u32,
	/// Hours remaining, `0..24`.
	pub hours: u32,
	/// Minutes remaining, `0..60`.
	pub minutes: u32,
	/// Seconds remaining, `0..60`.
	pub seconds: u32,
}

impl TimeLeft {
	/// Countdown starting at a whole number of days.
	pub fn from_days(days: u32) -> Self {
		Self {
			days,
			hours: 0,
			minutes: 0,
			seconds: 0,
		}
	}

	/// Decrement by one second, borrowing through the larger units.
	/// Saturates at zero.
	pub fn tick(&mut self) {
		if self.seconds > 0 {
			self.seconds -= 1;
		} else if self.minutes > 0 {
			self.minutes -= 1;
			self.seconds = 59;
		} else if self.hours > 0 {
			self.hours -= 1;
			self.minutes = 59;
			self.seconds = 59;
		} else if self.days > 0 {
			self.days -= 1;
			self.hours = 23;
			self.minutes = 59;
			self.seconds = 59;
		}
	}

	/// Whether the countdown has expired.
	pub fn is_zero(&self) -> bool {
		self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
	}

	/// Elapsed fraction of the presale in `[0, 1]`, by whole days.
	pub fn progress(&self, total_days: u32) -> f64 {
		if total_days == 0 {
			return 1.0;
		}
		((total_days.saturating_sub(self.days)) as f64 / total_days as f64).clamp(0.0, 1.0)
	}
}

/// Dash geometry for an SVG progress ring.
#[derive(Clone, Copy, Debug)]
pub struct RingGeometry {
	/// Full circumference of the ring.
	pub circumference: f64,
	/// Dash offset hiding the not-yet-elapsed arc.
	pub dash_offset: f64,
}

/// Geometry for a ring of `radius` at `progress` in `[0, 1]`.
pub fn ring_geometry(radius: f64, progress: f64) -> RingGeometry {
	let circumference = 2.0 * std::f64::consts::PI * radius;
	RingGeometry {
		circumference,
		dash_offset: circumference - progress.clamp(0.0, 1.0) * circumference,
	}
}

/// Random arc fractions for the decorative rings, each in `[0.2, 0.8)`.
pub fn ring_lengths(count: usize, rng: &mut Lcg) -> Vec<f64> {
	(0..count).map(|_| rng.range(0.2, 0.8)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tick_decrements_seconds() {
		let mut t = TimeLeft {
			days: 1,
			hours: 2,
			minutes: 3,
			seconds: 4,
		};
		t.tick();
		assert_eq!(t.seconds, 3);
		assert_eq!(t.minutes, 3);
	}

	#[test]
	fn tick_borrows_through_all_units() {
		let mut t = TimeLeft {
			days: 2,
			hours: 0,
			minutes: 0,
			seconds: 0,
		};
		t.tick();
		assert_eq!(
			t,
			TimeLeft {
				days: 1,
				hours: 23,
				minutes: 59,
				seconds: 59,
			}
		);
	}

	#[test]
	fn tick_saturates_at_zero() {
		let mut t = TimeLeft::from_days(0);
		t.tick();
		assert!(t.is_zero());
	}

	#[test]
	fn a_day_is_86400_ticks() {
		let mut t = TimeLeft::from_days(1);
		for _ in 0..86_400 {
			assert!(!t.is_zero());
			t.tick();
		}
		assert!(t.is_zero());
	}

	#[test]
	fn progress_endpoints() {
		assert_eq!(TimeLeft::from_days(109).progress(109), 0.0);
		assert_eq!(TimeLeft::from_days(0).progress(109), 1.0);
	}

	#[test]
	fn progress_handles_zero_total() {
		assert_eq!(TimeLeft::from_days(0).progress(0), 1.0);
	}

	#[test]
	fn ring_geometry_full_and_empty() {
		let g = ring_geometry(160.0, 0.0);
		assert!((g.dash_offset - g.circumference).abs() < 1e-9);
		let g = ring_geometry(160.0, 1.0);
		assert!(g.dash_offset.abs() < 1e-9);
	}

	#[test]
	fn ring_lengths_stay_in_band() {
		let mut rng = Lcg::new(31);
		for len in ring_lengths(8, &mut rng) {
			assert!((0.2..0.8).contains(&len));
		}
	}
}
