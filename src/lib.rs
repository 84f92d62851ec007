//! bsa-backdrop: decorative animated backdrop for the BSA AI presale site.
//!
//! This crate provides the site's WASM-based visual layer: a full-viewport
//! point-network animation with traveling sparks, a wandering-tracer line
//! effect, and the presale countdown. Everything here is a leaf visual
//! component: it reacts to pointer and resize events and emits no data.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;

pub use components::countdown::CountdownTimer;
pub use components::point_net::PointNetBackdrop;
pub use components::sparkle::SparkleBackdrop;
pub use components::theme::Theme;
pub use config::BackdropConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("bsa-backdrop: logging initialized");
}

/// Load backdrop configuration from a script element with id="backdrop-config".
/// Expected format: JSON matching [`BackdropConfig`]; all fields optional.
fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<BackdropConfig>(&json_text) {
		Ok(config) => {
			info!("bsa-backdrop: loaded config, theme {}", config.theme);
			Some(config)
		}
		Err(e) => {
			warn!("bsa-backdrop: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and stacks the backdrop layers behind the
/// page content, with the countdown as the one foreground element.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let theme = Theme::by_name(&config.theme);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="BSA AI" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SparkleBackdrop max_lines=config.tracer_lines theme=theme.clone() />
		<PointNetBackdrop grid_divisor=config.grid_divisor theme=theme />
		<div class="countdown-overlay">
			<CountdownTimer total_days=config.countdown_days />
		</div>
	}
}
