//! Random regular graph generation.
//!
//! The generator uses the pairing model with partial restarts: every node
//! contributes `degree` stubs, the stubs are shuffled and paired, and pairs
//! that would form a self-loop or a duplicate edge are thrown back into the
//! pool for the next round. When the pool can no longer produce a new edge
//! directly, the leftover stubs are attached by edge switching; only if that
//! fails too is the attempt discarded and started over.
//!
//! Requests denser than half the possible degree are served by sampling the
//! complementary sparse graph and inverting it.

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::topology::types::{Edge, RegularGraph};

/// Default number of full attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Random edges probed per existing edge when attaching one stuck stub pair
const SWITCH_TRIES_PER_EDGE: usize = 8;

/// Errors that can occur while sampling a regular graph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("n * d must be even (n = {node_count}, d = {degree})")]
    OddStubCount { node_count: usize, degree: usize },

    #[error("the 0 <= d < n inequality must be satisfied (n = {node_count}, d = {degree})")]
    DegreeOutOfRange { node_count: usize, degree: usize },

    #[error("a {degree}-regular graph on {node_count} nodes is too large to build")]
    TooLarge { node_count: usize, degree: usize },

    #[error("no {degree}-regular graph on {node_count} nodes found after {attempts} attempts")]
    Exhausted {
        node_count: usize,
        degree: usize,
        attempts: usize,
    },
}

/// Source of random simple regular graphs
pub trait RegularGraphGenerator {
    /// Sample a simple graph on `node_count` nodes where every node has
    /// exactly `degree` neighbours.
    fn generate(&mut self, degree: usize, node_count: usize) -> Result<RegularGraph, GraphError>;
}

/// Pairing-model generator driven by any [`Rng`]
#[derive(Debug)]
pub struct PairingGenerator<R> {
    rng: R,
    max_attempts: usize,
}

impl PairingGenerator<StdRng> {
    /// Generator seeded from `seed`, or from OS entropy when `None`
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Seeding graph generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> PairingGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Cap the number of full restarts. Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sample a graph with `1 <= degree <= (node_count - 1) / 2`
    fn sample_sparse(&mut self, degree: usize, node_count: usize) -> Result<Vec<Edge>, GraphError> {
        for attempt in 1..=self.max_attempts {
            if let Some(edges) = self.try_creation(degree, node_count) {
                debug!(
                    "Sampled {}-regular graph on {} nodes after {} attempt(s)",
                    degree, node_count, attempt
                );
                return Ok(edges);
            }
            debug!("Attempt {} got stuck, restarting", attempt);
        }

        warn!(
            "Giving up on {}-regular graph with {} nodes after {} attempts",
            degree, node_count, self.max_attempts
        );
        Err(GraphError::Exhausted {
            node_count,
            degree,
            attempts: self.max_attempts,
        })
    }

    /// One pass of the pairing model. Returns `None` when the attempt got
    /// stuck and must be restarted from scratch.
    fn try_creation(&mut self, degree: usize, node_count: usize) -> Option<Vec<Edge>> {
        let edge_count = node_count * degree / 2;
        let mut edges = Vec::with_capacity(edge_count);
        let mut seen: HashSet<Edge> = HashSet::with_capacity(edge_count);
        let mut stubs: Vec<usize> = (0..degree).flat_map(|_| 0..node_count).collect();

        while !stubs.is_empty() {
            // Node -> number of stubs that failed to pair this round
            let mut potential: BTreeMap<usize, usize> = BTreeMap::new();
            stubs.shuffle(&mut self.rng);

            for pair in stubs.chunks_exact(2) {
                let edge = Edge::new(pair[0], pair[1]);
                if !edge.is_loop() && seen.insert(edge) {
                    edges.push(edge);
                } else {
                    *potential.entry(edge.a).or_default() += 1;
                    *potential.entry(edge.b).or_default() += 1;
                }
            }

            stubs = potential
                .iter()
                .flat_map(|(&node, &count)| std::iter::repeat(node).take(count))
                .collect();

            if !is_suitable(&seen, &potential) {
                debug!("Pairing stuck with {} stubs left, switching them in", stubs.len());
                return self.attach_by_switching(edges, seen, stubs);
            }
        }

        Some(edges)
    }

    /// Attach leftover stubs by pairing them directly where possible and
    /// otherwise replacing a random edge `x-y` with `u-x` and `v-y`. Every
    /// node keeps its stub count, so regularity is preserved.
    fn attach_by_switching(
        &mut self,
        mut edges: Vec<Edge>,
        mut seen: HashSet<Edge>,
        mut stubs: Vec<usize>,
    ) -> Option<Vec<Edge>> {
        stubs.shuffle(&mut self.rng);

        while let (Some(u), Some(v)) = (stubs.pop(), stubs.pop()) {
            let direct = Edge::new(u, v);
            if !direct.is_loop() && seen.insert(direct) {
                edges.push(direct);
            } else if !self.switch_in(&mut edges, &mut seen, u, v) {
                return None;
            }
        }

        Some(edges)
    }

    fn switch_in(&mut self, edges: &mut Vec<Edge>, seen: &mut HashSet<Edge>, u: usize, v: usize) -> bool {
        if edges.is_empty() {
            return false;
        }

        let tries = SWITCH_TRIES_PER_EDGE * edges.len() + 16;
        for _ in 0..tries {
            let i = self.rng.gen_range(0..edges.len());
            let Edge { a, b } = edges[i];
            let (x, y) = if self.rng.gen::<bool>() { (a, b) } else { (b, a) };

            let ux = Edge::new(u, x);
            let vy = Edge::new(v, y);
            if ux.is_loop() || vy.is_loop() || ux == vy || seen.contains(&ux) || seen.contains(&vy) {
                continue;
            }

            seen.remove(&edges[i]);
            seen.insert(ux);
            seen.insert(vy);
            edges[i] = ux;
            edges.push(vy);
            return true;
        }

        false
    }
}

impl<R: Rng> RegularGraphGenerator for PairingGenerator<R> {
    fn generate(&mut self, degree: usize, node_count: usize) -> Result<RegularGraph, GraphError> {
        if node_count % 2 == 1 && degree % 2 == 1 {
            return Err(GraphError::OddStubCount { node_count, degree });
        }
        if degree >= node_count {
            return Err(GraphError::DegreeOutOfRange { node_count, degree });
        }
        if node_count.checked_mul(node_count).is_none() {
            return Err(GraphError::TooLarge { node_count, degree });
        }

        let complement_degree = node_count - 1 - degree;
        if degree > complement_degree {
            // n(n - 1) is even, so the complement always has a valid stub count
            debug!(
                "Sampling {}-regular complement for dense request (d = {})",
                complement_degree, degree
            );
            let sparse = if complement_degree == 0 {
                Vec::new()
            } else {
                self.sample_sparse(complement_degree, node_count)?
            };
            let mut edges = complement(node_count, &sparse);
            edges.shuffle(&mut self.rng);
            return Ok(RegularGraph::new(node_count, edges));
        }

        if degree == 0 {
            return Ok(RegularGraph::empty(node_count));
        }
        let edges = self.sample_sparse(degree, node_count)?;
        Ok(RegularGraph::new(node_count, edges))
    }
}

/// Every edge of the complete graph on `node_count` nodes not in `edges`
fn complement(node_count: usize, edges: &[Edge]) -> Vec<Edge> {
    let present: HashSet<Edge> = edges.iter().copied().collect();
    (0..node_count)
        .flat_map(|a| (a + 1..node_count).map(move |b| Edge::new(a, b)))
        .filter(|edge| !present.contains(edge))
        .collect()
}

/// Whether the leftover stubs can still form at least one new edge
fn is_suitable(edges: &HashSet<Edge>, potential: &BTreeMap<usize, usize>) -> bool {
    if potential.is_empty() {
        return true;
    }

    let nodes: Vec<usize> = potential.keys().copied().collect();
    nodes.iter().enumerate().any(|(i, &s1)| {
        nodes[i + 1..]
            .iter()
            .any(|&s2| !edges.contains(&Edge::new(s1, s2)))
    })
}
