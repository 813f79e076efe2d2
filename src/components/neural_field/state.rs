//! Particle field state.
//!
//! Owns the neuron population, the surface dimensions and the pointer, and
//! advances everything by one tick per [`ParticleField::update`]. Randomness
//! comes from an injected RNG so a field can be replayed from a seed.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::particles::Particle;
use super::theme::NeuronPalette;
use super::types::{FieldConfig, Pointer};

/// A bounded population of neurons drifting over a 2D surface.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop. Resizing only moves the bounds; neurons left outside the
/// new bounds respawn on the next update.
pub struct ParticleField<R = SmallRng> {
	particles: Vec<Particle>,
	pointer: Option<Pointer>,
	width: f64,
	height: f64,
	config: FieldConfig,
	palette: NeuronPalette,
	rng: R,
	ticks: u64,
}

impl ParticleField<SmallRng> {
	/// Seeds a field from `config.seed`, or from entropy when unset.
	pub fn new(width: f64, height: f64, config: FieldConfig, palette: NeuronPalette) -> Self {
		let rng = match config.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_entropy(),
		};
		Self::with_rng(width, height, config, palette, rng)
	}
}

impl<R: Rng> ParticleField<R> {
	pub fn with_rng(
		width: f64,
		height: f64,
		config: FieldConfig,
		palette: NeuronPalette,
		rng: R,
	) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			pointer: None,
			width,
			height,
			config,
			palette,
			rng,
			ticks: 0,
		};
		field.initialize(width, height);
		field
	}

	/// Replaces the population with a fresh one sized for `width` x `height`.
	pub fn initialize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;

		let count = self.config.particle_count(width, height);
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let particle = Particle::spawn(&mut self.rng, width, height, &self.config, &self.palette);
			self.particles.push(particle);
		}
		info!(
			"neural-hero: seeded {} neurons for {}x{} surface",
			count, width, height
		);
	}

	/// Updates the surface bounds. Neurons keep their coordinates unless
	/// `reseed_on_resize` is set.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.config.reseed_on_resize {
			self.initialize(width, height);
			return;
		}
		debug!(
			"neural-hero: resized to {}x{}, keeping {} neurons",
			width,
			height,
			self.particles.len()
		);
		self.width = width;
		self.height = height;
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Pointer::new(x, y));
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	pub fn pointer(&self) -> Option<Pointer> {
		self.pointer
	}

	/// Advances every neuron by one tick and respawns the ones that left the
	/// margin-extended bounds.
	pub fn update(&mut self) {
		let margin = self.config.bounds_margin;
		for p in self.particles.iter_mut() {
			p.advance(self.pointer, &self.config);
			if !p.is_within(self.width, self.height, margin) {
				p.respawn(&mut self.rng, self.width, self.height, &self.config, &self.palette);
			}
		}
		self.ticks += 1;
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of updates applied since creation.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::mock::StepRng;

	fn seeded(width: f64, height: f64, seed: u64) -> ParticleField {
		let config = FieldConfig {
			seed: Some(seed),
			..FieldConfig::default()
		};
		ParticleField::new(width, height, config, NeuronPalette::neural())
	}

	#[test]
	fn test_seed_count() {
		assert_eq!(seeded(800.0, 600.0, 1).len(), 40);
		assert_eq!(seeded(2560.0, 1440.0, 1).len(), 90);
		assert!(seeded(0.0, 600.0, 1).is_empty());
		assert!(seeded(-10.0, 600.0, 1).is_empty());
	}

	#[test]
	fn test_same_seed_same_field() {
		let (mut a, mut b) = (seeded(800.0, 600.0, 42), seeded(800.0, 600.0, 42));
		for _ in 0..50 {
			a.update();
			b.update();
		}
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn test_exiting_particle_respawns_in_bounds() {
		let mut field = seeded(800.0, 600.0, 5);
		field.clear_pointer();
		field.particles[0].x = 825.0;
		field.particles[0].vx = 0.1;
		field.update();
		let p = &field.particles()[0];
		assert!((0.0..=800.0).contains(&p.x));
		assert!((0.0..=600.0).contains(&p.y));
	}

	#[test]
	fn test_bounds_invariant_holds_every_tick() {
		let mut field = seeded(640.0, 480.0, 9);
		for tick in 0..2_000 {
			if tick % 3 == 0 {
				field.set_pointer((tick % 640) as f64, (tick % 480) as f64);
			} else if tick % 7 == 0 {
				field.clear_pointer();
			}
			field.update();
			for p in field.particles() {
				assert!(p.is_within(640.0, 480.0, 20.0), "{:?} escaped", p);
				assert!((0.0..=0.8).contains(&p.opacity), "{:?} opacity", p);
			}
		}
		assert_eq!(field.ticks(), 2_000);
	}

	#[test]
	fn test_fixed_attributes_survive_update() {
		let mut field = seeded(1000.0, 1000.0, 13);
		field.set_pointer(500.0, 500.0);
		let before: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.size, p.pulse_speed, p.base_opacity, p.color, p.vx, p.vy))
			.collect();
		// One tick moves a neuron by at most ~2px, never across the 20px margin.
		field.update();
		let after: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.size, p.pulse_speed, p.base_opacity, p.color, p.vx, p.vy))
			.collect();
		assert_eq!(before, after);
	}

	#[test]
	fn test_resize_keeps_population() {
		let mut field = seeded(800.0, 600.0, 3);
		let before = field.particles().to_vec();
		field.resize(1600.0, 1200.0);
		assert_eq!(field.particles(), before.as_slice());
		assert_eq!((field.width(), field.height()), (1600.0, 1200.0));
	}

	#[test]
	fn test_resize_reseeds_when_enabled() {
		let config = FieldConfig {
			seed: Some(3),
			reseed_on_resize: true,
			..FieldConfig::default()
		};
		let mut field = ParticleField::new(800.0, 600.0, config, NeuronPalette::neural());
		field.resize(1600.0, 1200.0);
		assert_eq!(field.len(), 90);
	}

	#[test]
	fn test_pointer_roundtrip() {
		let mut field = seeded(800.0, 600.0, 3);
		assert_eq!(field.pointer(), None);
		field.set_pointer(10.0, 20.0);
		assert_eq!(field.pointer(), Some(Pointer::new(10.0, 20.0)));
		field.clear_pointer();
		assert_eq!(field.pointer(), None);
	}

	#[test]
	fn test_injected_rng() {
		// StepRng(0, 0) yields zero for every draw.
		let field = ParticleField::with_rng(
			800.0,
			600.0,
			FieldConfig::default(),
			NeuronPalette::neural(),
			StepRng::new(0, 0),
		);
		for p in field.particles() {
			assert_eq!((p.x, p.y), (0.0, 0.0));
			assert_eq!((p.vx, p.vy), (-0.2, -0.2));
			assert_eq!(p.size, 0.8);
			assert_eq!(p.color, NeuronPalette::neural().get(0));
		}
	}
}
