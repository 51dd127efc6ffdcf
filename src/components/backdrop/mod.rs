//! Animated page backdrop.
//!
//! Renders a decorative background on an HTML canvas with:
//! - Twinkling stars at fixed positions
//! - Drifting particles that bounce off the viewport edges
//! - Pointer repulsion, pushing particles away from the cursor
//! - Fading links between nearby particles and toward the cursor
//!
//! # Example
//!
//! ```ignore
//! use starlit_backdrop::{BackdropCanvas, BackdropConfig};
//!
//! let config = BackdropConfig { star_count: 120, ..Default::default() };
//!
//! view! { <BackdropCanvas config=config /> }
//! ```

mod component;
pub mod config;
mod links;
mod particles;
mod pointer;
mod render;
mod scene;
mod stars;
pub mod surface;
pub mod theme;

pub use component::BackdropCanvas;
pub use config::BackdropConfig;
pub use scene::{LoopPhase, Scene};
pub use theme::Theme;
