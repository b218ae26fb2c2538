//! Transaction Marker - a recognizable call shape for APM transaction naming
//!
//! Wrap a unit of work in [`run`] with a name. An APM agent that hooks
//! [`MARKER_PATH`] reads the name as the transaction label. The wrapped
//! computation runs exactly as it would when called directly.

pub mod marker;

pub use marker::{run, MARKER_PATH};
