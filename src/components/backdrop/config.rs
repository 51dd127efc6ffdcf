//! Backdrop tunables, read from the page.
//!
//! The page may embed a JSON object in
//! `<script type="application/json" id="backdrop-config">`. Every field is
//! optional; anything left out keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::theme::Theme;

/// DOM id of the inline configuration element.
pub const CONFIG_ELEMENT_ID: &str = "backdrop-config";

/// Population sizes, distances and theme selection.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackdropConfig {
	/// Stars regenerated on every resize.
	pub star_count: usize,
	/// Particles per pixel of viewport width.
	pub particle_density: f64,
	/// Upper bound on particle count, bounding the pairwise link pass.
	pub max_particles: usize,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	/// Pointer repulsion and pointer-link range.
	pub interaction_radius: f64,
	/// Name passed to [`Theme::by_name`].
	pub theme: String,
	/// Elements that fade in when scrolled into view.
	pub reveal_selector: String,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			star_count: 200,
			particle_density: 0.15,
			max_particles: 150,
			link_distance: 150.0,
			interaction_radius: 150.0,
			theme: "neon".to_string(),
			reveal_selector: ".section-title, .project-card, .contact-form, .hero-content"
				.to_string(),
		}
	}
}

impl BackdropConfig {
	/// Parses a configuration object, `None` on malformed input.
	pub fn from_json(json: &str) -> Option<Self> {
		match serde_json::from_str::<Self>(json) {
			Ok(config) => Some(config),
			Err(e) => {
				warn!("starlit: failed to parse backdrop config: {}", e);
				None
			}
		}
	}

	/// Reads the inline configuration element, falling back to defaults.
	pub fn load() -> Self {
		let Some(json) = config_element_text() else {
			return Self::default();
		};
		let config = Self::from_json(&json).unwrap_or_default();
		info!(
			"starlit: loaded config ({} stars, theme {})",
			config.star_count, config.theme
		);
		config
	}

	/// Particle count for a viewport `width`: `min(floor(width * density), max)`.
	pub fn particle_count(&self, width: f64) -> usize {
		let scaled = (width * self.particle_density).floor();
		if scaled.is_finite() && scaled > 0.0 {
			(scaled as usize).min(self.max_particles)
		} else {
			0
		}
	}

	/// Resolves the configured theme, defaulting on unknown names.
	pub fn theme(&self) -> Theme {
		Theme::by_name(&self.theme).unwrap_or_else(|| {
			warn!("starlit: unknown theme {:?}, using default", self.theme);
			Theme::default()
		})
	}
}

fn config_element_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn particle_count_scales_with_width() {
		let config = BackdropConfig::default();
		assert_eq!(config.particle_count(500.0), 75);
		assert_eq!(config.particle_count(333.0), 49);
	}

	#[test]
	fn particle_count_is_capped() {
		let config = BackdropConfig::default();
		assert_eq!(config.particle_count(1000.0), 150);
		assert_eq!(config.particle_count(2000.0), 150);
	}

	#[test]
	fn degenerate_widths_yield_no_particles() {
		let config = BackdropConfig::default();
		assert_eq!(config.particle_count(0.0), 0);
		assert_eq!(config.particle_count(-40.0), 0);
		assert_eq!(config.particle_count(f64::NAN), 0);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config = BackdropConfig::from_json(r#"{ "star_count": 50, "theme": "mono" }"#).unwrap();
		assert_eq!(config.star_count, 50);
		assert_eq!(config.theme().name, "mono");
		assert_eq!(config.max_particles, 150);
		assert_eq!(config.interaction_radius, 150.0);
	}

	#[test]
	fn malformed_json_is_rejected() {
		assert!(BackdropConfig::from_json("{ star_count: ").is_none());
		assert!(BackdropConfig::from_json(r#"{ "star_count": "many" }"#).is_none());
	}

	#[test]
	fn unknown_theme_falls_back() {
		let config = BackdropConfig {
			theme: "plaid".into(),
			..Default::default()
		};
		assert_eq!(config.theme().name, "neon");
	}
}
