//! Pointer input state.

/// Latest pointer position and the radius it influences.
///
/// Owned by the scene and written only by input handlers; every particle
/// reads it during the update pass of the next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
	/// `None` while the pointer is outside the page.
	pub position: Option<(f64, f64)>,
	pub radius: f64,
}

impl Pointer {
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}

	pub fn moved(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	pub fn left(&mut self) {
		self.position = None;
	}

	/// Euclidean distance from the pointer to `(x, y)`, if present.
	pub fn distance_to(&self, x: f64, y: f64) -> Option<f64> {
		let (px, py) = self.position?;
		Some((px - x).hypot(py - y))
	}
}
