//! Overlay drawing.
//!
//! [`present`] turns the current snapshot into draw commands; the host
//! replays them on its canvas each frame.

mod draw;
mod presenter;

pub use draw::*;
pub use presenter::*;
