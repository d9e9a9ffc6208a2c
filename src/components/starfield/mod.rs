//! Animated night-sky component.
//!
//! Renders a decorative real-time animation on an HTML canvas:
//! - A twinkling background starfield with occasional flicker bursts
//! - A heart-shaped formation of stars that fly in, settle, and beat in sync
//! - Falling text messages and meteor streaks spawned on timed gates
//! - Pointer repulsion that brushes heart stars aside, and click-to-reshuffle
//!
//! # Example
//!
//! ```ignore
//! use amor_canvas::{SceneConfig, StarfieldCanvas};
//!
//! let config = SceneConfig::default();
//!
//! view! { <StarfieldCanvas config=config fullscreen=true /> }
//! ```

mod component;
mod heart;
mod render;
mod rng;
mod spawn;
mod state;
pub mod theme;
mod types;

pub use component::StarfieldCanvas;
pub use theme::Theme;
pub use types::SceneConfig;
