//! Topology type definitions.
//!
//! This file contains the graph produced by the generator and consumed by the
//! renderer.

/// Undirected edge between two node indices, stored with `a < b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge with its endpoints in canonical order
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Simple undirected graph on nodes `0..node_count`
///
/// Edges keep the order in which the generator produced them; the renderer
/// emits them in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularGraph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl RegularGraph {
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Self {
        Self { node_count, edges }
    }

    /// Graph with `node_count` isolated nodes
    pub fn empty(node_count: usize) -> Self {
        Self::new(node_count, Vec::new())
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Degree of every node, indexed by node
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];
        for edge in &self.edges {
            degrees[edge.a] += 1;
            degrees[edge.b] += 1;
        }
        degrees
    }

    /// Returns the common degree if every node has the same degree
    pub fn regular_degree(&self) -> Option<usize> {
        let degrees = self.degrees();
        match degrees.first() {
            Some(&first) if degrees.iter().all(|&d| d == first) => Some(first),
            Some(_) => None,
            None => Some(0),
        }
    }
}
