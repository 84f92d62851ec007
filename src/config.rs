//! Host-page configuration for the backdrop.

use serde::Deserialize;

/// Tuning knobs the host page may embed as JSON.
///
/// Every field is optional; a missing element, a missing field, or malformed
/// JSON all fall back to the defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Cells per viewport axis for the point grid.
	pub grid_divisor: u32,
	/// Theme name, resolved by `Theme::by_name`.
	pub theme: String,
	/// Maximum number of concurrent tracer lines.
	pub tracer_lines: usize,
	/// Presale length in whole days.
	pub countdown_days: u32,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			grid_divisor: 12,
			theme: "default".to_string(),
			tracer_lines: 20,
			countdown_days: 109,
		}
	}
}
