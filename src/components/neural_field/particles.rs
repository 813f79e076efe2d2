//! Neurons: randomized birth, drift, opacity pulse and pointer attraction.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{Color, NeuronPalette};
use super::types::{FieldConfig, Pointer};

/// A single animated neuron.
///
/// `size`, `color`, `base_opacity` and `pulse_speed` are fixed between
/// respawns; only the position, `opacity` and `phase` evolve per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
	pub base_opacity: f64,
	pub opacity: f64,
	pub phase: f64,
	pub pulse_speed: f64,
}

impl Particle {
	/// Creates a neuron with every attribute drawn from `rng`, positioned
	/// uniformly inside a `width` x `height` surface.
	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		width: f64,
		height: f64,
		config: &FieldConfig,
		palette: &NeuronPalette,
	) -> Self {
		let x = rng.r#gen::<f64>() * width.max(0.0);
		let y = rng.r#gen::<f64>() * height.max(0.0);
		let size = config.size_min + rng.r#gen::<f64>() * config.size_spread;
		let vx = (rng.r#gen::<f64>() - 0.5) * 2.0 * config.max_speed;
		let vy = (rng.r#gen::<f64>() - 0.5) * 2.0 * config.max_speed;
		let base_opacity = config.opacity_min + rng.r#gen::<f64>() * config.opacity_spread;
		let phase = rng.r#gen::<f64>() * TAU;
		let pulse_speed = config.pulse_speed_min + rng.r#gen::<f64>() * config.pulse_speed_spread;
		let color = palette.pick(rng);

		Self {
			x,
			y,
			vx,
			vy,
			size,
			color,
			base_opacity,
			opacity: base_opacity,
			phase,
			pulse_speed,
		}
	}

	/// Redraws every attribute in place. The slot keeps its identity.
	pub fn respawn<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		width: f64,
		height: f64,
		config: &FieldConfig,
		palette: &NeuronPalette,
	) {
		*self = Self::spawn(rng, width, height, config, palette);
	}

	/// One tick of motion: drift, pulse, then pointer attraction.
	pub fn advance(&mut self, pointer: Option<Pointer>, config: &FieldConfig) {
		self.x += self.vx;
		self.y += self.vy;

		self.phase += self.pulse_speed;
		self.opacity = self.base_opacity + self.phase.sin() * config.pulse_amplitude;

		if let Some(pointer) = pointer {
			self.attract(pointer, config);
		}
	}

	/// Nudges the neuron toward `pointer` in proportion to proximity and
	/// brightens it. Outside `attraction_radius` nothing happens.
	fn attract(&mut self, pointer: Pointer, config: &FieldConfig) {
		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if !(dist < config.attraction_radius) {
			return;
		}

		let force = (config.attraction_radius - dist) / config.attraction_radius;
		// Direction is undefined on top of the pointer.
		if dist > 0.0 {
			let push = force * config.attraction_strength;
			self.x += dx / dist * push;
			self.y += dy / dist * push;
		}
		self.opacity = (self.opacity + force * config.attraction_glow).min(config.max_opacity);
	}

	/// Whether the neuron lies inside the surface grown by `margin` on every side.
	pub fn is_within(&self, width: f64, height: f64, margin: f64) -> bool {
		self.x >= -margin && self.x <= width + margin && self.y >= -margin && self.y <= height + margin
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}
