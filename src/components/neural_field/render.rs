//! Rendering for the neural field.
//!
//! Drawing happens in two passes so connections sit above every neuron:
//! 1. Neurons: a faint glow disc, then the solid core
//! 2. Synapses between every pair closer than the theme's threshold

use rand::Rng;

use super::particles::Particle;
use super::state::ParticleField;
use super::surface::Surface;
use super::theme::{SynapseStyle, Theme};

/// A connection between two neurons, identified by their slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Synapse {
	pub from: usize,
	pub to: usize,
	pub distance: f64,
}

/// Every unordered pair `(i, j)`, `i < j`, closer than `max_distance`.
pub fn synapses(particles: &[Particle], max_distance: f64) -> impl Iterator<Item = Synapse> + '_ {
	(0..particles.len()).flat_map(move |i| {
		(i + 1..particles.len()).filter_map(move |j| {
			let distance = particles[i].distance_to(&particles[j]);
			(distance < max_distance).then_some(Synapse {
				from: i,
				to: j,
				distance,
			})
		})
	})
}

/// Line opacity for a synapse, fading linearly to zero at `max_distance`.
pub fn synapse_alpha(distance: f64, style: &SynapseStyle) -> f64 {
	(1.0 - distance / style.max_distance) * style.peak_alpha
}

/// Renders the complete field to the surface.
///
/// A surface without area draws nothing, not even the clear.
pub fn render<R: Rng, S: Surface + ?Sized>(
	field: &ParticleField<R>,
	surface: &mut S,
	theme: &Theme,
) {
	let (width, height) = (field.width(), field.height());
	if !(width > 0.0 && height > 0.0) {
		return;
	}

	surface.clear(width, height);
	draw_neurons(field.particles(), surface, theme);
	draw_synapses(field.particles(), surface, &theme.synapse);
}

fn draw_neurons<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S, theme: &Theme) {
	let style = &theme.neuron;
	for p in particles {
		surface.fill_circle(
			p.x,
			p.y,
			p.size * style.glow_radius,
			p.color.with_alpha(p.opacity * style.glow_alpha),
		);
		surface.fill_circle(p.x, p.y, p.size, p.color.with_alpha(p.opacity));
	}
}

fn draw_synapses<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S, style: &SynapseStyle) {
	for synapse in synapses(particles, style.max_distance) {
		let (a, b) = (&particles[synapse.from], &particles[synapse.to]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			style.line_width,
			a.color.with_alpha(synapse_alpha(synapse.distance, style)),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::neural_field::surface::{DrawCommand, RecordingSurface};
	use crate::components::neural_field::theme::{Color, NeuronPalette};
	use crate::components::neural_field::types::FieldConfig;

	fn neuron_at(x: f64, y: f64, color: Color) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			color,
			base_opacity: 0.5,
			opacity: 0.5,
			phase: 0.0,
			pulse_speed: 0.01,
		}
	}

	#[test]
	fn test_synapse_threshold() {
		let purple = Color::rgb(192, 132, 252);
		let particles = vec![
			neuron_at(0.0, 0.0, purple),
			neuron_at(200.0, 0.0, purple),
			neuron_at(0.0, 159.0, purple),
			neuron_at(0.0, -160.0, purple),
		];
		let found: Vec<_> = synapses(&particles, 160.0).map(|s| (s.from, s.to)).collect();
		assert_eq!(found, vec![(0, 2)]);
	}

	#[test]
	fn test_synapse_alpha_fades_with_distance() {
		let style = Theme::neural().synapse;
		assert!((synapse_alpha(0.0, &style) - 0.12).abs() < 1e-12);
		assert!(synapse_alpha(40.0, &style) > synapse_alpha(80.0, &style));
		assert!(synapse_alpha(80.0, &style) > synapse_alpha(159.9, &style));
		assert!(synapse_alpha(159.9, &style) < 1e-3);
	}

	#[test]
	fn test_synapse_uses_first_neuron_color() {
		let (cyan, pink) = (Color::rgb(0, 229, 255), Color::rgb(244, 114, 182));
		let particles = vec![neuron_at(10.0, 10.0, cyan), neuron_at(90.0, 10.0, pink)];
		let mut surface = RecordingSurface::new();
		draw_synapses(&particles, &mut surface, &Theme::neural().synapse);
		assert_eq!(
			surface.commands,
			vec![DrawCommand::Line {
				from: (10.0, 10.0),
				to: (90.0, 10.0),
				width: 0.6,
				color: cyan.with_alpha(0.5 * 0.12),
			}]
		);
	}

	#[test]
	fn test_neuron_glow_then_core() {
		let cyan = Color::rgb(0, 229, 255);
		let mut surface = RecordingSurface::new();
		draw_neurons(&[neuron_at(5.0, 6.0, cyan)], &mut surface, &Theme::neural());
		assert_eq!(
			surface.commands,
			vec![
				DrawCommand::Circle {
					x: 5.0,
					y: 6.0,
					radius: 6.0,
					color: cyan.with_alpha(0.5 * 0.15),
				},
				DrawCommand::Circle {
					x: 5.0,
					y: 6.0,
					radius: 2.0,
					color: cyan.with_alpha(0.5),
				},
			]
		);
	}

	#[test]
	fn test_render_frame_layout() {
		let config = FieldConfig {
			seed: Some(21),
			..FieldConfig::default()
		};
		let field = ParticleField::new(800.0, 600.0, config, NeuronPalette::neural());
		let mut surface = RecordingSurface::new();
		render(&field, &mut surface, &Theme::neural());

		assert_eq!(
			surface.commands.first(),
			Some(&DrawCommand::Clear {
				width: 800.0,
				height: 600.0
			})
		);
		assert_eq!(surface.circles().count(), 2 * field.len());
		assert_eq!(
			surface.lines().count(),
			synapses(field.particles(), 160.0).count()
		);
	}

	#[test]
	fn test_render_empty_surface_is_noop() {
		let field = ParticleField::new(0.0, 600.0, FieldConfig::default(), NeuronPalette::neural());
		let mut surface = RecordingSurface::new();
		render(&field, &mut surface, &Theme::neural());
		assert!(surface.commands.is_empty());
	}
}
