//! Figure input model
//!
//! Structure:
//! - `model.rs`: Figure, Axis, LineTrace, GridLine, Legend
//! - `color.rs`: matplotlib color specifications → RGBA
//! - `fmt.rs`: format-string shorthand (`"b--"`)
//! - `demo.rs`: demonstration figure

pub mod color;
pub mod demo;
pub mod fmt;
pub mod model;

pub use color::Rgba;
pub use fmt::FormatSpec;
pub use model::{Artist, Axis, Figure, GridLine, Legend, LineTrace};
