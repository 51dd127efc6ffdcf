//! Backdrop simulation state and the per-frame tick.
//!
//! The scene owns both populations and the pointer outright. Input handlers
//! mutate it between frames and the frame callback ticks it; all of this
//! happens on the page's single thread, so no synchronization is involved.

use log::debug;
use rand::Rng;

use super::config::BackdropConfig;
use super::links;
use super::particles::{self, Particle};
use super::pointer::Pointer;
use super::render;
use super::stars::{self, Star};
use super::surface::Surface;
use super::theme::Theme;

/// Loop driver state. There is no terminal state; the loop runs for the
/// lifetime of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
	/// No frame has been drawn yet.
	#[default]
	Idle,
	/// Ticking once per animation frame.
	Running,
}

/// Everything one frame needs.
pub struct Scene {
	/// Background stars, regenerated on resize.
	pub stars: Vec<Star>,
	/// Drifting particles, regenerated on resize.
	pub particles: Vec<Particle>,
	/// Latest pointer input.
	pub pointer: Pointer,
	/// Viewport width in pixels.
	pub width: f64,
	/// Viewport height in pixels.
	pub height: f64,
	/// Whether the first frame has run.
	pub phase: LoopPhase,
	config: BackdropConfig,
	theme: Theme,
}

impl Scene {
	/// Builds a scene sized to the viewport, populated and still idle.
	pub fn new(config: BackdropConfig, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let theme = config.theme();
		let mut scene = Self {
			stars: Vec::new(),
			particles: Vec::new(),
			pointer: Pointer::new(config.interaction_radius),
			width,
			height,
			phase: LoopPhase::Idle,
			config,
			theme,
		};
		scene.populate(rng);
		scene
	}

	/// Adopts a new viewport size and regenerates both populations from
	/// scratch. Nothing survives a resize.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		self.width = width;
		self.height = height;
		self.populate(rng);
	}

	fn populate(&mut self, rng: &mut impl Rng) {
		let (w, h) = (self.width, self.height);
		self.stars = stars::spawn(self.config.star_count, w, h, rng);
		self.particles = particles::spawn(
			self.config.particle_count(w),
			w,
			h,
			&self.theme.accents,
			rng,
		);
		debug!(
			"starlit: populated {}x{} with {} stars, {} particles",
			w,
			h,
			self.stars.len(),
			self.particles.len()
		);
	}

	/// Records the pointer at viewport coordinates `(x, y)`.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer.moved(x, y);
	}

	/// Marks the pointer as absent; repulsion and pointer links stop.
	pub fn pointer_left(&mut self) {
		self.pointer.left();
	}

	/// Runs one frame: clear, twinkle and draw stars, move and draw
	/// particles, then draw particle and pointer links.
	pub fn tick(&mut self, surface: &mut impl Surface) {
		if self.phase == LoopPhase::Idle {
			debug!("starlit: first frame");
			self.phase = LoopPhase::Running;
		}

		surface.clear(self.width, self.height);

		stars::update(&mut self.stars);
		render::draw_stars(surface, &self.stars, &self.theme);

		particles::update(&mut self.particles, self.width, self.height, &self.pointer);
		render::draw_particles(surface, &self.particles);

		let width = self.theme.link_width;
		let pair_links = links::particle_links(&self.particles, self.config.link_distance);
		render::draw_links(surface, &pair_links, self.theme.link, width);
		let pointer_links = links::pointer_links(&self.particles, &self.pointer);
		render::draw_links(surface, &pointer_links, self.theme.pointer_link, width);
	}
}
