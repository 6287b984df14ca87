//! Igor Pro target module
//!
//! Structure:
//! - `markers.rs`: matplotlib marker/line-style tokens → Igor codes
//! - `commands.rs`: command text for the Igor interpreter
//! - `session.rs`: IgorSession trait and the in-memory session
//! - `itx.rs`: Igor Text file session
//! - `error.rs`: Error types

pub mod commands;
pub mod error;
pub mod itx;
pub mod markers;
pub mod session;

// Re-exports for convenience
pub use error::{IgorError, Result};
pub use itx::ItxSession;
pub use markers::{line_style_code, marker_code};
pub use session::{IgorSession, RecordingSession};
