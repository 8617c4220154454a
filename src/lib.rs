//! # RandReg - Random regular topologies for OMNeT++ simulations
//!
//! This library generates random d-regular network topologies and renders
//! them as NED network descriptions: a vector of `node` submodules plus one
//! bidirectional connection with a fixed delay per edge.
//!
//! ## Architecture
//!
//! - `config`: The immutable [`config::Configuration`] record and its validation
//! - `topology`: Random regular graph generation (pairing model with restarts)
//! - `ned`: NED text rendering
//! - `orchestrator`: Validate, generate, render
//! - `utils`: Validation helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use randreg::config::Configuration;
//! use randreg::orchestrator::generate_ned;
//!
//! let config = Configuration::new(4, 3)
//!     .with_delay(10.0)
//!     .with_network_name("Net")
//!     .with_seed(Some(7));
//! let ned = generate_ned(&config)?;
//!
//! assert!(ned.starts_with("network Net\n"));
//! assert_eq!(ned.matches("delay = 10ms;").count(), 6);
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Module-level errors are `thiserror` enums ([`config::ConfigError`],
//! [`topology::GraphError`]); the orchestrator wraps them into
//! `color_eyre::eyre::Error` with context.

pub mod config;
pub mod ned;
pub mod orchestrator;
pub mod topology;
pub mod utils;
