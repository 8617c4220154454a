//! Network topology module.
//!
//! This module contains the random regular graph generator and the graph
//! type it produces.

pub mod generator;
pub mod types;

// Re-export key types and functions for easier access
pub use generator::{GraphError, PairingGenerator, RegularGraphGenerator};
pub use types::{Edge, RegularGraph};
