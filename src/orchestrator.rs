//! Network generation orchestrator.
//!
//! This module coordinates the pipeline from a validated configuration
//! through graph sampling to the rendered NED block.

use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use log::info;

use crate::config::Configuration;
use crate::ned::render_network;
use crate::topology::{PairingGenerator, RegularGraph, RegularGraphGenerator};

/// Sample the graph described by `config` with `generator`
///
/// The configuration is validated before the generator is touched, so an
/// impossible request never reaches it.
pub fn generate_graph<G: RegularGraphGenerator>(
    config: &Configuration,
    generator: &mut G,
) -> Result<RegularGraph> {
    config.validate().wrap_err("Invalid topology configuration")?;

    info!(
        "Generating random {}-regular graph on {} nodes",
        config.degree, config.node_count
    );
    let graph = generator
        .generate(config.degree, config.node_count)
        .wrap_err_with(|| {
            format!(
                "Failed to generate a {}-regular graph on {} nodes",
                config.degree, config.node_count
            )
        })?;

    if graph.edge_count() != config.edge_count() || graph.regular_degree() != Some(config.degree) {
        bail!(
            "Generator returned a graph with {} edges that is not {}-regular",
            graph.edge_count(),
            config.degree
        );
    }

    info!("Generated {} connections", graph.edge_count());
    Ok(graph)
}

/// Generate and render a network with a caller-supplied generator
pub fn generate_ned_with<G: RegularGraphGenerator>(
    config: &Configuration,
    generator: &mut G,
) -> Result<String> {
    let graph = generate_graph(config, generator)?;
    Ok(render_network(config, &graph))
}

/// Generate and render a network using the pairing generator seeded from
/// `config.seed`
///
/// # Examples
/// ```
/// use randreg::config::Configuration;
/// use randreg::orchestrator::generate_ned;
///
/// let config = Configuration::new(4, 3).with_seed(Some(1));
/// let ned = generate_ned(&config)?;
/// assert_eq!(ned.matches("<-->").count(), 2 * 6);
/// # Ok::<(), color_eyre::eyre::Error>(())
/// ```
pub fn generate_ned(config: &Configuration) -> Result<String> {
    // Only build the RNG once the request is known to be satisfiable
    config.validate().wrap_err("Invalid topology configuration")?;
    let mut generator = PairingGenerator::from_seed(config.seed);
    generate_ned_with(config, &mut generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Edge, GraphError};

    /// Generator that records whether it was called and returns a fixed graph
    struct FixedGenerator {
        graph: RegularGraph,
        calls: usize,
    }

    impl RegularGraphGenerator for FixedGenerator {
        fn generate(&mut self, _degree: usize, _node_count: usize) -> std::result::Result<RegularGraph, GraphError> {
            self.calls += 1;
            Ok(self.graph.clone())
        }
    }

    fn square() -> RegularGraph {
        RegularGraph::new(
            4,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(0, 3)],
        )
    }

    #[test]
    fn test_invalid_config_skips_generator() {
        let mut generator = FixedGenerator { graph: square(), calls: 0 };
        let config = Configuration::new(5, 5);
        assert!(generate_graph(&config, &mut generator).is_err());
        assert_eq!(generator.calls, 0);
    }

    #[test]
    fn test_rendering_uses_generator_order() {
        let mut generator = FixedGenerator { graph: square(), calls: 0 };
        let config = Configuration::new(4, 2).with_delay(3.0);
        let ned = generate_ned_with(&config, &mut generator).unwrap();
        assert_eq!(generator.calls, 1);

        let lines: Vec<&str> = ned.lines().filter(|l| l.contains("<-->")).collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("        node[0].peer++"));
        assert!(lines[3].ends_with("node[3].peer++;"));
        assert!(lines.iter().all(|l| l.contains("delay = 3ms;")));
    }

    #[test]
    fn test_rejects_non_regular_generator_output() {
        let path = RegularGraph::new(4, vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(0, 2)]);
        let mut generator = FixedGenerator { graph: path, calls: 0 };
        let config = Configuration::new(4, 2);
        assert!(generate_graph(&config, &mut generator).is_err());
    }

    #[test]
    fn test_generate_ned_with_seed() {
        let config = Configuration::new(10, 3).with_seed(Some(99));
        let first = generate_ned(&config).unwrap();
        let second = generate_ned(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches("<-->").count(), 2 * 15);
    }
}
