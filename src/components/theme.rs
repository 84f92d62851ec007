//! Visual theming for the backdrop animations.
//!
//! Colors and per-effect style knobs. The site ships the default blue-on-white
//! look; the alternates exist for dark page sections.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Style for the point-network lines and labels.
#[derive(Clone, Debug)]
pub struct NetworkStyle {
	/// Stroke color for connection lines; alpha comes from point activity.
	pub line: Color,
	/// Fill color for the per-point text label.
	pub label: Color,
	/// Text drawn at each point.
	pub label_text: &'static str,
}

/// Style for edge-traveling sparks.
#[derive(Clone, Debug)]
pub struct SparkStyle {
	/// Glow gradient color.
	pub glow: Color,
	/// Bright core color.
	pub core: Color,
	/// Glow radius in px.
	pub glow_radius: f64,
	/// Core radius in px.
	pub core_radius: f64,
}

/// Style for the wandering-tracer effect.
#[derive(Clone, Debug)]
pub struct TracerStyle {
	/// Stroke color; alpha is the resting opacity away from the pointer.
	pub stroke: Color,
	/// Opacity ceiling when the pointer boost applies.
	pub max_alpha: f64,
	/// Alpha of the per-frame repaint veil that fades old trails.
	pub veil_alpha: f64,
}

/// Complete backdrop theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier, matched by [`Theme::by_name`].
	pub name: &'static str,
	/// Canvas background; also the veil color for the tracer effect.
	pub background: Color,
	/// Point-network style.
	pub network: NetworkStyle,
	/// Spark style.
	pub spark: SparkStyle,
	/// Tracer style.
	pub tracer: TracerStyle,
}

impl Theme {
	/// Site blue on white (default).
	pub fn default_theme() -> Self {
		let blue = Color::rgb(3, 100, 200);
		Self {
			name: "default",
			background: Color::rgb(255, 255, 255),
			network: NetworkStyle {
				line: blue,
				label: blue,
				label_text: "AI",
			},
			spark: SparkStyle {
				glow: blue,
				core: Color::rgb(255, 255, 255),
				glow_radius: 4.0,
				core_radius: 1.5,
			},
			tracer: TracerStyle {
				stroke: blue.with_alpha(0.05),
				max_alpha: 0.15,
				veil_alpha: 0.03,
			},
		}
	}

	/// Light lines on near-black, for dark page sections.
	pub fn midnight() -> Self {
		let ice = Color::rgb(120, 170, 230);
		Self {
			name: "midnight",
			background: Color::rgb(16, 20, 28),
			network: NetworkStyle {
				line: ice,
				label: ice,
				label_text: "AI",
			},
			spark: SparkStyle {
				glow: ice,
				core: Color::rgb(230, 240, 255),
				glow_radius: 4.0,
				core_radius: 1.5,
			},
			tracer: TracerStyle {
				stroke: ice.with_alpha(0.05),
				max_alpha: 0.15,
				veil_alpha: 0.03,
			},
		}
	}

	/// Resolve a theme by its config name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"midnight" => Self::midnight(),
			_ => Self::default_theme(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
