//! Input data structures for the neural field component.
//!
//! Every tuning constant of the simulation lives in [`FieldConfig`], which the
//! host page can override by embedding JSON. Missing keys keep their defaults.

use serde::Deserialize;

/// How the animation loop converts display frames into simulation ticks.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
	/// One update per display frame, regardless of refresh rate.
	#[default]
	Fixed,
	/// Updates follow wall-clock time at a nominal 60 Hz.
	Elapsed,
}

/// Pointer position in surface coordinates (origin at the top-left corner).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Population, motion and interaction tuning for a particle field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Upper bound on the number of particles.
	pub max_particles: usize,
	/// Surface area (px²) that one particle accounts for when seeding.
	pub area_per_particle: f64,
	/// How far outside the surface a particle may drift before it respawns.
	pub bounds_margin: f64,
	/// Per-axis velocity is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	pub size_min: f64,
	pub size_spread: f64,
	pub opacity_min: f64,
	pub opacity_spread: f64,
	/// Amplitude of the sinusoidal opacity pulse.
	pub pulse_amplitude: f64,
	pub pulse_speed_min: f64,
	pub pulse_speed_spread: f64,
	/// Pointer influence radius.
	pub attraction_radius: f64,
	/// Displacement per tick at zero distance. Negative values repel.
	pub attraction_strength: f64,
	/// Opacity added at zero distance from the pointer.
	pub attraction_glow: f64,
	/// Ceiling for the pointer opacity boost.
	pub max_opacity: f64,
	/// Theme preset name, see [`Theme::named`](super::theme::Theme::named).
	pub theme: String,
	/// Fixed RNG seed for a reproducible field. `None` draws from entropy.
	pub seed: Option<u64>,
	/// Re-seed the population whenever the surface is resized.
	pub reseed_on_resize: bool,
	pub tick_mode: TickMode,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: 90,
			area_per_particle: 12_000.0,
			bounds_margin: 20.0,
			max_speed: 0.2,
			size_min: 0.8,
			size_spread: 2.5,
			opacity_min: 0.15,
			opacity_spread: 0.5,
			pulse_amplitude: 0.1,
			pulse_speed_min: 0.01,
			pulse_speed_spread: 0.02,
			attraction_radius: 150.0,
			attraction_strength: 1.5,
			attraction_glow: 0.3,
			max_opacity: 0.8,
			theme: "neural".to_string(),
			seed: None,
			reseed_on_resize: false,
			tick_mode: TickMode::Fixed,
		}
	}
}

impl FieldConfig {
	/// Number of particles to seed for a surface of the given size.
	///
	/// `min(max_particles, floor(width * height / area_per_particle))`, with
	/// non-positive dimensions yielding an empty field.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		if !(width > 0.0 && height > 0.0 && self.area_per_particle > 0.0) {
			return 0;
		}
		let by_area = (width * height / self.area_per_particle).floor();
		if !by_area.is_finite() {
			return self.max_particles;
		}
		(by_area as usize).min(self.max_particles)
	}
}
