//! Drawing passes for the backdrop.
//!
//! Passes run back to front:
//! 1. Stars
//! 2. Particles
//! 3. Particle-to-particle links, then pointer links on top

use super::links::Link;
use super::particles::Particle;
use super::stars::Star;
use super::surface::Surface;
use super::theme::{Color, Theme};

pub fn draw_stars(surface: &mut impl Surface, stars: &[Star], theme: &Theme) {
	for s in stars {
		surface.fill_circle(s.x, s.y, s.radius, &theme.star.with_alpha(s.alpha()));
	}
}

pub fn draw_particles(surface: &mut impl Surface, particles: &[Particle]) {
	for p in particles {
		surface.fill_circle(p.x, p.y, p.radius, &p.color);
	}
}

/// Strokes `links` in `color`, each at its own opacity.
pub fn draw_links(surface: &mut impl Surface, links: &[Link], color: Color, width: f64) {
	for link in links {
		surface.stroke_line(
			link.from.0,
			link.from.1,
			link.to.0,
			link.to.1,
			&color.with_alpha(link.opacity * color.a),
			width,
		);
	}
}
