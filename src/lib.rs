//! starlit-backdrop: animated starfield and particle-network backdrop.
//!
//! This crate provides a WASM-based canvas component that draws twinkling
//! stars and drifting, pointer-reactive particles behind a static page, plus
//! the page's smooth anchor scrolling and reveal-on-scroll glue.

// Only referenced for its `js` feature, which backs `rand` in the browser.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::backdrop::{BackdropCanvas, BackdropConfig, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starlit: logging initialized");
}

/// Main application component.
/// Loads the backdrop config from the DOM, mounts the canvas and wires up
/// the page's scroll behaviors.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = BackdropConfig::load();
	let reveal_selector = config.reveal_selector.clone();
	let config_signal = Signal::derive(move || config.clone());

	Effect::new(move |_| {
		components::reveal::install(&reveal_selector);
	});

	view! {
		<Meta name="color-scheme" content="dark" />
		<BackdropCanvas config=config_signal />
	}
}
