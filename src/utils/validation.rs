//! Configuration validation utilities.
//!
//! This module provides the checks run on a configuration before the
//! generator is invoked.

use crate::config::ConfigError;

/// Validate that a simple regular graph with the given parameters exists
///
/// Checks for:
/// - At least one node
/// - `degree < node_count` (no self-loops, no multi-edges)
/// - `node_count * degree` even (every edge consumes two stubs) and
///   representable as a `usize`
///
/// # Examples
/// ```
/// use randreg::utils::validation::validate_regular_params;
///
/// assert!(validate_regular_params(4, 3).is_ok());
/// assert!(validate_regular_params(5, 5).is_err()); // degree must be below node count
/// assert!(validate_regular_params(5, 1).is_err()); // 5 * 1 is odd
/// ```
pub fn validate_regular_params(node_count: usize, degree: usize) -> Result<(), ConfigError> {
    if node_count == 0 {
        return Err(ConfigError::NoNodes);
    }
    if degree >= node_count {
        return Err(ConfigError::DegreeTooLarge { node_count, degree });
    }
    let stubs = node_count
        .checked_mul(degree)
        .ok_or(ConfigError::TooLarge { node_count, degree })?;
    if stubs % 2 != 0 {
        return Err(ConfigError::OddStubCount { node_count, degree });
    }
    Ok(())
}

/// Validate a per-edge delay in milliseconds
pub fn validate_delay(delay_ms: f64) -> Result<(), ConfigError> {
    if !delay_ms.is_finite() || delay_ms < 0.0 {
        return Err(ConfigError::InvalidDelay(delay_ms));
    }
    Ok(())
}

/// Validate that a network name can be used as a NED identifier
///
/// # Examples
/// ```
/// use randreg::utils::validation::validate_network_name;
///
/// assert!(validate_network_name("RandReg").is_ok());
/// assert!(validate_network_name("_net2").is_ok());
/// assert!(validate_network_name("2net").is_err());
/// assert!(validate_network_name("").is_err());
/// ```
pub fn validate_network_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_regular_params() {
        // Valid combinations
        assert!(validate_regular_params(1, 0).is_ok());
        assert!(validate_regular_params(2, 1).is_ok());
        assert!(validate_regular_params(4, 3).is_ok());
        assert!(validate_regular_params(5, 4).is_ok());
        assert!(validate_regular_params(100, 7).is_ok());

        // Invalid combinations
        assert_eq!(validate_regular_params(0, 0), Err(ConfigError::NoNodes));
        assert_eq!(
            validate_regular_params(3, 3),
            Err(ConfigError::DegreeTooLarge { node_count: 3, degree: 3 })
        );
        assert_eq!(
            validate_regular_params(3, 1),
            Err(ConfigError::OddStubCount { node_count: 3, degree: 1 })
        );
        assert_eq!(
            validate_regular_params(7, 3),
            Err(ConfigError::OddStubCount { node_count: 7, degree: 3 })
        );
        assert_eq!(
            validate_regular_params(usize::MAX, usize::MAX - 1),
            Err(ConfigError::TooLarge { node_count: usize::MAX, degree: usize::MAX - 1 })
        );
    }

    #[test]
    fn test_validate_delay() {
        assert!(validate_delay(0.0).is_ok());
        assert!(validate_delay(10.0).is_ok());
        assert!(validate_delay(0.25).is_ok());
        assert!(validate_delay(-0.5).is_err());
        assert!(validate_delay(f64::NAN).is_err());
        assert!(validate_delay(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_network_name() {
        for name in ["RandReg", "Net", "_x", "net_42"] {
            assert!(validate_network_name(name).is_ok(), "{} should be valid", name);
        }
        for name in ["", "4net", "my-net", "my net", "Réseau"] {
            assert!(validate_network_name(name).is_err(), "{} should be invalid", name);
        }
    }
}
