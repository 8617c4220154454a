//! Topology configuration.
//!
//! A [`Configuration`] is the immutable record produced from the command line.
//! It carries everything the generator and the renderer need, and is validated
//! in full before any graph is sampled.

use std::fmt;

use clap::ValueEnum;

use crate::utils::validation::{validate_delay, validate_network_name, validate_regular_params};

/// Default network name written after the `network` keyword
pub const DEFAULT_NETWORK_NAME: &str = "RandReg";

/// Errors raised while validating a configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("node count must be at least 1")]
    NoNodes,

    #[error("degree {degree} must be smaller than the node count {node_count}")]
    DegreeTooLarge { node_count: usize, degree: usize },

    #[error("node count times degree must be even (got {node_count} * {degree})")]
    OddStubCount { node_count: usize, degree: usize },

    #[error("a {degree}-regular graph on {node_count} nodes is too large to build")]
    TooLarge { node_count: usize, degree: usize },

    #[error("delay must be a non-negative finite number of milliseconds, got {0}")]
    InvalidDelay(f64),

    #[error("invalid network name '{0}': expected a letter or '_' followed by letters, digits or '_'")]
    InvalidName(String),
}

/// Simple module instantiated for every node of the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ModuleName {
    /// HoneyBadger node
    #[default]
    #[value(name = "HBNode")]
    HbNode,
    /// Longest-chain node
    #[value(name = "LCNode")]
    LcNode,
}

impl ModuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HbNode => "HBNode",
            Self::LcNode => "LCNode",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gate vector that connections attach to on each node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Endpoint {
    /// `peer` gates, used by the P2P node modules
    #[default]
    Peer,
    /// `link` gates, used by the full-node module
    Link,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to generate and render one random regular network
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub node_count: usize,
    pub degree: usize,
    /// One-way per-edge delay in milliseconds
    pub delay_ms: f64,
    pub network_name: String,
    pub module: ModuleName,
    pub endpoint: Endpoint,
    /// Invocation echoed in the comment header, `None` to omit the header
    pub command: Option<String>,
    /// Fixed RNG seed; `None` samples from OS entropy
    pub seed: Option<u64>,
}

impl Configuration {
    /// Create a configuration with default delay, name, module and endpoint.
    pub fn new(node_count: usize, degree: usize) -> Self {
        Self {
            node_count,
            degree,
            delay_ms: 0.0,
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            module: ModuleName::default(),
            endpoint: Endpoint::default(),
            command: None,
            seed: None,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_network_name(mut self, name: impl Into<String>) -> Self {
        self.network_name = name.into();
        self
    }

    pub fn with_module(mut self, module: ModuleName) -> Self {
        self.module = module;
        self
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of connection lines the rendered network will contain
    pub fn edge_count(&self) -> usize {
        if self.node_count % 2 == 0 {
            (self.node_count / 2).saturating_mul(self.degree)
        } else {
            self.node_count.saturating_mul(self.degree / 2)
        }
    }

    /// Validate the configuration
    ///
    /// Checks that a simple `degree`-regular graph on `node_count` nodes can
    /// exist, that the delay is usable and that the network name is a valid
    /// identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_regular_params(self.node_count, self.degree)?;
        validate_delay(self.delay_ms)?;
        validate_network_name(&self.network_name)?;
        Ok(())
    }
}
