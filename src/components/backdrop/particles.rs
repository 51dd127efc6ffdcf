//! Drifting particles that bounce off the viewport edges and flee the pointer.

use rand::Rng;

use super::pointer::Pointer;
use super::theme::Color;

/// Largest velocity component, in pixels per tick.
pub const MAX_SPEED: f64 = 0.25;
/// Smallest and largest particle radius.
pub const RADIUS: (f64, f64) = (1.0, 3.0);
/// Smallest and largest repulsion strength.
pub const DENSITY: (f64, f64) = (1.0, 31.0);

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	/// Repulsion strength, independent of `radius`
	pub density: f64,
}

impl Particle {
	/// Places a particle uniformly inside `width` x `height` with a random
	/// drift and one of the two `accents`.
	pub fn random(rng: &mut impl Rng, width: f64, height: f64, accents: &[Color; 2]) -> Self {
		Self {
			x: rng.gen_range(0.0..=width.max(0.0)),
			y: rng.gen_range(0.0..=height.max(0.0)),
			vx: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
			vy: rng.gen_range(-MAX_SPEED..=MAX_SPEED),
			radius: rng.gen_range(RADIUS.0..=RADIUS.1),
			color: accents[usize::from(rng.gen_bool(0.5))],
			density: rng.gen_range(DENSITY.0..=DENSITY.1),
		}
	}

	/// Advances one tick: drift, edge bounce, then pointer repulsion.
	///
	/// Bouncing flips the velocity sign without clamping, so a particle may
	/// sit up to one step outside the viewport. Repulsion is a positional
	/// kick applied every tick the pointer is in range; it never feeds back
	/// into velocity, and it cannot push a particle past an edge.
	pub fn update(&mut self, width: f64, height: f64, pointer: &Pointer) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}

		let Some((px, py)) = pointer.position else {
			return;
		};
		let distance = (px - self.x).hypot(py - self.y);
		// Coincident with the pointer: no direction to push along this tick.
		if distance == 0.0 || !distance.is_finite() {
			return;
		}
		let force = repulsion(distance, pointer.radius, self.density);
		if force == 0.0 {
			return;
		}
		self.x -= (px - self.x) / distance * force;
		self.y -= (py - self.y) / distance * force;
		self.x = self.x.clamp(0.0, width.max(0.0));
		self.y = self.y.clamp(0.0, height.max(0.0));
	}
}

/// Repulsion magnitude at `distance` from the pointer.
///
/// Falls off linearly from `density` at the pointer to zero at `radius`;
/// zero at or beyond the radius.
pub fn repulsion(distance: f64, radius: f64, density: f64) -> f64 {
	if distance.is_nan() || distance < 0.0 || distance >= radius {
		return 0.0;
	}
	density * (radius - distance) / radius
}

/// Generates a fresh particle population.
pub fn spawn(
	count: usize,
	width: f64,
	height: f64,
	accents: &[Color; 2],
	rng: &mut impl Rng,
) -> Vec<Particle> {
	(0..count)
		.map(|_| Particle::random(rng, width, height, accents))
		.collect()
}

/// Updates every particle against the current viewport and pointer.
pub fn update(particles: &mut [Particle], width: f64, height: f64, pointer: &Pointer) {
	for p in particles {
		p.update(width, height, pointer);
	}
}
