//! Connective lines between nearby particles and toward the pointer.
//!
//! Links are found with a plain pairwise scan every frame. The particle cap
//! keeps that at roughly eleven thousand distance checks.

use super::particles::Particle;
use super::pointer::Pointer;

/// A line segment to stroke, with its opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// Opacity of a link spanning `distance`, or `None` when no line is drawn.
///
/// Fully opaque for coincident endpoints, fading linearly to transparent at
/// `max_distance`.
pub fn opacity(distance: f64, max_distance: f64) -> Option<f64> {
	if distance.is_nan() || distance >= max_distance {
		return None;
	}
	Some(1.0 - distance / max_distance)
}

/// Every unordered pair `i < j` closer than `max_distance`.
pub fn particle_links(particles: &[Particle], max_distance: f64) -> Vec<Link> {
	let mut links = Vec::new();
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let distance = (a.x - b.x).hypot(a.y - b.y);
			if let Some(opacity) = opacity(distance, max_distance) {
				links.push(Link {
					from: (a.x, a.y),
					to: (b.x, b.y),
					opacity,
				});
			}
		}
	}
	links
}

/// Lines from each particle inside the pointer's radius to the pointer.
pub fn pointer_links(particles: &[Particle], pointer: &Pointer) -> Vec<Link> {
	let Some(target) = pointer.position else {
		return Vec::new();
	};
	particles
		.iter()
		.filter_map(|p| {
			let distance = pointer.distance_to(p.x, p.y)?;
			opacity(distance, pointer.radius).map(|opacity| Link {
				from: (p.x, p.y),
				to: target,
				opacity,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::theme::Color;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			color: Color::rgb(255, 255, 255),
			density: 1.0,
		}
	}

	#[test]
	fn opacity_falls_off_linearly() {
		assert_eq!(opacity(0.0, 150.0), Some(1.0));
		assert_eq!(opacity(75.0, 150.0), Some(0.5));
		assert_eq!(opacity(149.0, 150.0).map(|o| o > 0.0), Some(true));
		assert_eq!(opacity(150.0, 150.0), None);
		assert_eq!(opacity(151.0, 150.0), None);
	}

	#[test]
	fn links_only_close_pairs_once() {
		let particles = [at(0.0, 0.0), at(75.0, 0.0), at(400.0, 0.0)];
		let links = particle_links(&particles, 150.0);
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].from, (0.0, 0.0));
		assert_eq!(links[0].to, (75.0, 0.0));
		assert_eq!(links[0].opacity, 0.5);
	}

	#[test]
	fn dense_cluster_links_every_pair() {
		let particles: Vec<_> = (0..10).map(|i| at(i as f64, 0.0)).collect();
		assert_eq!(particle_links(&particles, 150.0).len(), 45);
	}

	#[test]
	fn no_pointer_no_pointer_links() {
		let particles = [at(0.0, 0.0)];
		assert!(pointer_links(&particles, &Pointer::new(150.0)).is_empty());
	}

	#[test]
	fn pointer_links_within_radius() {
		let mut pointer = Pointer::new(150.0);
		pointer.moved(0.0, 0.0);
		let particles = [at(0.0, 30.0), at(0.0, 200.0)];
		let links = pointer_links(&particles, &pointer);
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].to, (0.0, 0.0));
		assert!((links[0].opacity - 0.8).abs() < 1e-12);
	}
}
