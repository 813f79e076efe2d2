//! neural-hero: living "neural network" backdrop for a portfolio hero section.
//!
//! Neurons drift and pulse across a canvas, synapses light up between close
//! pairs, and the pointer pulls nearby neurons in and brightens them. The
//! simulation lives in [`ParticleField`]; [`NeuralFieldCanvas`] hosts it in the
//! page and [`App`] is the stock hero built on top.
//!
//! Tuning is read once at startup from an optional JSON block:
//!
//! ```html
//! <script id="neural-field-config" type="application/json">
//!   { "theme": "aurora", "max_particles": 60, "tick_mode": "elapsed" }
//! </script>
//! ```

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

#[cfg(target_family = "wasm")]
use getrandom as _; // enables the "js" entropy backend for rand

pub use components::neural_field::{
	FieldConfig, FrameDriver, NeuralFieldCanvas, ParticleField, Pointer, RecordingSurface,
	StopHandle, Surface, Theme, TickMode,
};
pub use error::CanvasError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neural-hero: logging initialized");
}

/// Parses field configuration from JSON text. Unknown keys are ignored and
/// missing ones keep their defaults.
pub fn parse_field_config(json_text: &str) -> Result<FieldConfig, serde_json::Error> {
	serde_json::from_str(json_text)
}

/// Reads the page's `neural-field-config` block, if any. A malformed block is
/// reported and ignored so the hero still animates with defaults.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("neural-field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_field_config(&json_text) {
		Ok(config) => {
			info!(
				"neural-hero: loaded config (theme {:?}, max {} neurons)",
				config.theme, config.max_particles
			);
			Some(config)
		}
		Err(e) => {
			warn!("neural-hero: failed to parse field config: {}", e);
			None
		}
	}
}

/// Full-viewport hero: the neuron field with the headline laid over it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Neural Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section id="hero" class="hero" style="width: 100vw; height: 100vh;">
			<NeuralFieldCanvas config=config_signal>
				<header class="hero-content">
					<h1>"Building intelligent systems"</h1>
					<p class="hero-tagline">"Machine learning, computer vision and NLP, end to end."</p>
				</header>
			</NeuralFieldCanvas>
		</section>
	}
}
