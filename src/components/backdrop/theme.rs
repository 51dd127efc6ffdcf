//! Visual theming for the backdrop.
//!
//! Provides the color type and the named palettes stars, particles and links
//! are drawn with.

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

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
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

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	/// Base star color; opacity is replaced by each star's twinkle value
	pub star: Color,
	/// Particle fill colors, one picked uniformly per particle
	pub accents: [Color; 2],
	/// Particle-to-particle link color
	pub link: Color,
	/// Particle-to-pointer link color
	pub pointer_link: Color,
	/// Stroke width for every link, in pixels
	pub link_width: f64,
}

impl Theme {
	/// Cyan and purple accents over white stars (default)
	pub fn neon() -> Self {
		Self {
			name: "neon",
			star: Color::rgb(255, 255, 255),
			accents: [Color::rgb(0, 243, 255), Color::rgb(188, 19, 254)],
			link: Color::rgb(255, 255, 255),
			pointer_link: Color::rgb(0, 243, 255),
			link_width: 0.5,
		}
	}

	/// Muted grayscale variant
	pub fn mono() -> Self {
		Self {
			name: "mono",
			star: Color::rgb(230, 230, 235),
			accents: [Color::rgb(200, 205, 215), Color::rgb(140, 145, 160)],
			link: Color::rgb(180, 185, 195),
			pointer_link: Color::rgb(255, 255, 255),
			link_width: 0.5,
		}
	}

	/// Looks up a theme by its `name`.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"neon" => Some(Self::neon()),
			"mono" => Some(Self::mono()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neon()
	}
}
