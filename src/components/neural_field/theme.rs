//! Visual theming for the neural field.
//!
//! Provides the neuron color palettes and the glow/synapse styling constants.

use log::warn;
use rand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The set of colors a neuron can be born with.
#[derive(Clone, Debug)]
pub struct NeuronPalette {
	pub colors: Vec<Color>,
}

impl NeuronPalette {
	/// Saturated neon palette (default)
	pub fn neural() -> Self {
		Self {
			colors: vec![
				Color::rgb(192, 132, 252), // Purple
				Color::rgb(0, 229, 255),   // Cyan
				Color::rgb(96, 165, 250),  // Blue
				Color::rgb(110, 231, 183), // Green
				Color::rgb(244, 114, 182), // Pink
			],
		}
	}

	/// Cool teals and violets
	pub fn aurora() -> Self {
		Self {
			colors: vec![
				Color::rgb(100, 145, 135), // Eucalyptus
				Color::rgb(130, 120, 150), // Wisteria
				Color::rgb(105, 140, 145), // Teal
				Color::rgb(120, 130, 160), // Periwinkle
				Color::rgb(135, 140, 150), // Pewter
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// Uniformly picks one palette entry.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
		self.get(rng.gen_range(0..self.colors.len()))
	}

	pub fn contains(&self, color: Color) -> bool {
		self.colors.contains(&color)
	}
}

/// Neuron (particle) visual style.
#[derive(Clone, Debug)]
pub struct NeuronStyle {
	/// Glow disc radius as a multiple of the neuron size
	pub glow_radius: f64,
	/// Glow opacity as a fraction of the neuron opacity
	pub glow_alpha: f64,
}

/// Synapse (connection line) visual style.
#[derive(Clone, Debug)]
pub struct SynapseStyle {
	/// Pairs at or beyond this distance are not connected
	pub max_distance: f64,
	/// Line opacity for two coincident neurons; fades linearly to 0 at `max_distance`
	pub peak_alpha: f64,
	pub line_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub neuron: NeuronStyle,
	pub synapse: SynapseStyle,
	pub palette: NeuronPalette,
}

impl Theme {
	/// Neon neurons on a transparent canvas (default)
	pub fn neural() -> Self {
		Self {
			name: "neural",
			neuron: NeuronStyle {
				glow_radius: 3.0,
				glow_alpha: 0.15,
			},
			synapse: SynapseStyle {
				max_distance: 160.0,
				peak_alpha: 0.12,
				line_width: 0.6,
			},
			palette: NeuronPalette::neural(),
		}
	}

	/// Muted variant with softer, denser connections
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			neuron: NeuronStyle {
				glow_radius: 4.0,
				glow_alpha: 0.1,
			},
			synapse: SynapseStyle {
				max_distance: 180.0,
				peak_alpha: 0.1,
				line_width: 0.5,
			},
			palette: NeuronPalette::aurora(),
		}
	}

	/// Looks up a preset by name, falling back to [`Theme::neural`].
	pub fn named(name: &str) -> Self {
		match name {
			"neural" => Self::neural(),
			"aurora" => Self::aurora(),
			other => {
				warn!("neural-hero: unknown theme {:?}, using \"neural\"", other);
				Self::neural()
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neural()
	}
}
