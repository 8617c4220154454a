//! NED network description rendering.
//!
//! Turns a configuration and a sampled graph into the text block the
//! simulator reads: an optional comment header, a `node[N]` submodule vector
//! and one bidirectional connection per edge.

use crate::config::{Configuration, Endpoint};
use crate::topology::{Edge, RegularGraph};

/// Render a single connection line, terminated by a newline
///
/// # Examples
/// ```
/// use randreg::config::Endpoint;
/// use randreg::ned::render_connection;
/// use randreg::topology::Edge;
///
/// assert_eq!(
///     render_connection(&Edge::new(0, 3), Endpoint::Peer, 10.0),
///     "        node[0].peer++ <--> {  delay = 10ms; } <--> node[3].peer++;\n"
/// );
/// ```
pub fn render_connection(edge: &Edge, endpoint: Endpoint, delay_ms: f64) -> String {
    format!(
        "        node[{a}].{gate}++ <--> {{  delay = {delay}ms; }} <--> node[{b}].{gate}++;\n",
        a = edge.a,
        b = edge.b,
        gate = endpoint,
        delay = delay_ms,
    )
}

/// Render the complete network block
///
/// Connection lines follow the edge order of `graph`. Rendering is pure: the
/// same configuration and graph always give the same text.
pub fn render_network(config: &Configuration, graph: &RegularGraph) -> String {
    let mut out = String::new();

    if let Some(command) = &config.command {
        out.push_str("// Generated with the following command:\n");
        out.push_str(&format!("// {}\n", command));
        out.push('\n');
    }

    out.push_str(&format!("network {}\n", config.network_name));
    out.push_str("{\n");
    out.push_str("    submodules:\n");
    out.push_str(&format!("        node[{}]: {};\n", graph.node_count(), config.module));
    out.push_str("    connections:\n");
    for edge in graph.edges() {
        out.push_str(&render_connection(edge, config.endpoint, config.delay_ms));
    }
    out.push_str("}\n");

    out
}
