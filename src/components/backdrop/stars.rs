//! Twinkling background stars.

use rand::Rng;

/// Largest star radius, in pixels.
pub const MAX_RADIUS: f64 = 1.5;
/// Slowest and fastest opacity change per tick.
pub const TWINKLE_RATE: (f64, f64) = (0.005, 0.025);

/// A single fixed star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub opacity: f64,
	pub twinkle_rate: f64,
	/// Either `1.0` (brightening) or `-1.0` (dimming)
	pub direction: f64,
}

impl Star {
	/// Places a star uniformly inside `width` x `height`.
	pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
		Self {
			x: rng.gen_range(0.0..=width.max(0.0)),
			y: rng.gen_range(0.0..=height.max(0.0)),
			radius: rng.gen_range(0.0..=MAX_RADIUS),
			opacity: rng.gen_range(0.0..1.0),
			twinkle_rate: rng.gen_range(TWINKLE_RATE.0..=TWINKLE_RATE.1),
			direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
		}
	}

	/// Advances the twinkle by one tick.
	///
	/// Opacity may overshoot `[0, 1]` by at most one step before the
	/// reversed direction brings it back.
	pub fn update(&mut self) {
		self.opacity += self.twinkle_rate * self.direction;
		if self.opacity >= 1.0 || self.opacity <= 0.0 {
			self.direction = -self.direction;
		}
	}

	/// Opacity clamped for drawing.
	pub fn alpha(&self) -> f64 {
		self.opacity.clamp(0.0, 1.0)
	}
}

/// Generates a fresh star field.
pub fn spawn(count: usize, width: f64, height: f64, rng: &mut impl Rng) -> Vec<Star> {
	(0..count).map(|_| Star::random(rng, width, height)).collect()
}

/// Twinkles every star once.
pub fn update(stars: &mut [Star]) {
	for star in stars {
		star.update();
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn spawned_stars_respect_bounds() {
		let mut rng = StdRng::seed_from_u64(7);
		let stars = spawn(200, 640.0, 480.0, &mut rng);
		assert_eq!(stars.len(), 200);
		for s in &stars {
			assert!((0.0..=640.0).contains(&s.x));
			assert!((0.0..=480.0).contains(&s.y));
			assert!(s.radius <= MAX_RADIUS);
			assert!((0.0..1.0).contains(&s.opacity));
			assert!((TWINKLE_RATE.0..=TWINKLE_RATE.1).contains(&s.twinkle_rate));
			assert!(s.direction == 1.0 || s.direction == -1.0);
		}
	}

	#[test]
	fn opacity_stays_within_one_step_of_bounds() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut stars = spawn(50, 100.0, 100.0, &mut rng);
		for _ in 0..5_000 {
			update(&mut stars);
			for s in &stars {
				assert!(s.opacity >= -s.twinkle_rate && s.opacity <= 1.0 + s.twinkle_rate);
			}
		}
	}

	#[test]
	fn direction_flips_at_the_top() {
		let mut star = Star {
			x: 0.0,
			y: 0.0,
			radius: 1.0,
			opacity: 0.99,
			twinkle_rate: 0.02,
			direction: 1.0,
		};
		star.update();
		assert_eq!(star.direction, -1.0);
		assert_eq!(star.alpha(), 1.0);
		star.update();
		assert!(star.opacity < 1.0);
	}

	#[test]
	fn direction_flips_at_the_bottom() {
		let mut star = Star {
			x: 0.0,
			y: 0.0,
			radius: 1.0,
			opacity: 0.01,
			twinkle_rate: 0.02,
			direction: -1.0,
		};
		star.update();
		assert_eq!(star.direction, 1.0);
		assert_eq!(star.alpha(), 0.0);
	}
}
