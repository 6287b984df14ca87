//! Igor Plot Operator Library
//!
//! Translates matplotlib-style line figures into Igor Pro commands.
//!
//! Module organization:
//! - `figure`: figure input model (axes, traces, colors, legend)
//! - `igor`: Igor target (marker tables, command text, sessions)
//! - `pipeline`: figure → command translation
//! - `config`: converter configuration

pub mod config;
pub mod figure;
pub mod igor;
pub mod pipeline;

pub use config::ConverterConfig;
pub use figure::Figure;
pub use pipeline::convert;
