//! Drawing surface the backdrop renders onto.
//!
//! The simulation never touches the canvas directly; it issues the three
//! primitives below, which the browser canvas context implements.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Minimal 2D raster sink.
pub trait Surface {
	/// Clears the region `(0, 0)..(width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Fills a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color);
	/// Strokes a straight segment from `(x1, y1)` to `(x2, y2)`.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}
}

/// Records draw commands instead of rasterizing them.
#[cfg(test)]
pub mod recording {
	use super::{Color, Surface};

	#[derive(Clone, Debug, PartialEq)]
	pub enum Command {
		Clear { width: f64, height: f64 },
		Circle { x: f64, y: f64, radius: f64, color: Color },
		Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
	}

	#[derive(Default)]
	pub struct RecordingSurface {
		pub commands: Vec<Command>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> impl Iterator<Item = &Command> {
			self.commands.iter().filter(|c| matches!(c, Command::Circle { .. }))
		}

		pub fn lines(&self) -> impl Iterator<Item = &Command> {
			self.commands.iter().filter(|c| matches!(c, Command::Line { .. }))
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self, width: f64, height: f64) {
			self.commands.push(Command::Clear { width, height });
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Color) {
			self.commands.push(Command::Circle {
				x,
				y,
				radius,
				color: *color,
			});
		}

		fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &Color, width: f64) {
			self.commands.push(Command::Line {
				from: (x1, y1),
				to: (x2, y2),
				color: *color,
				width,
			});
		}
	}
}
