//! amor-canvas: an animated night sky with a beating heart of stars.
//!
//! This crate provides a WASM canvas animation: a twinkling starfield, a
//! heart-shaped particle formation with flocking and beating motion, falling
//! messages, and meteor streaks, driven by a per-frame repaint loop.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{SceneConfig, StarfieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("amor-canvas: logging initialized");
}

/// Load scene configuration from a script element with id="scene-config".
/// Expected format: JSON with { messages: [...], star_count, heart_star_count }
fn load_scene_config() -> Option<SceneConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("scene-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SceneConfig>(&json_text) {
		Ok(config) => {
			info!(
				"amor-canvas: loaded {} messages, {} + {} stars",
				config.messages.len(),
				config.star_count,
				config.heart_star_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("amor-canvas: failed to parse scene config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads scene configuration from the DOM and renders the animated sky.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Fall back to the built-in catalog when the page supplies nothing.
	let config = load_scene_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="es" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Amor entre las estrellas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-sky">
			<StarfieldCanvas config=config_signal fullscreen=true />
			<div class="sky-overlay">
				<h1>"Amor"</h1>
				<p class="subtitle">
					"Mueve el cursor entre las estrellas. Haz clic para recomponer el corazón."
				</p>
			</div>
		</div>
	}
}
