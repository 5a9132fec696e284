// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Projection - Dense CSR snapshot for traversal.
//!
//! A `GraphProjection` is an immutable, traversal-optimized copy of an
//! undirected graph. It provides:
//! - Dense vertex indexing (0..V) for array-based traversal state
//! - CSR format for cache-friendly neighbor iteration
//! - Symmetric adjacency (every edge listed at both endpoints)
//! - Up-front validation so traversal never sees out-of-range ids

use lowlink_common::{LowlinkError, ProjectionConfig, Result, UndirectedGraph};
use tracing::{debug, instrument};

/// Dense CSR representation of an undirected graph.
#[derive(Debug, Clone)]
pub struct GraphProjection {
    /// Number of vertices in the projection
    pub(crate) vertex_count: usize,

    pub(crate) offsets: Vec<u32>,   // [V+1] vertex slot -> adjacency start
    pub(crate) neighbors: Vec<u32>, // [2E] neighbor slots
}

impl GraphProjection {
    /// Number of vertices in the projection.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges in the projection.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    /// Neighbors of a vertex (by slot), in insertion order.
    #[inline]
    pub fn neighbors(&self, slot: u32) -> &[u32] {
        let start = self.offsets[slot as usize] as usize;
        let end = self.offsets[slot as usize + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Degree of a vertex.
    #[inline]
    pub fn degree(&self, slot: u32) -> u32 {
        self.offsets[slot as usize + 1] - self.offsets[slot as usize]
    }

    /// Memory usage in bytes.
    pub fn memory_size(&self) -> usize {
        self.offsets.len() * 4 + self.neighbors.len() * 4
    }

    /// Project an undirected edge list over `vertex_count` nodes.
    ///
    /// Each `(u, v)` is listed at both endpoints in input order. Self-loops
    /// are dropped. Parallel edges are rejected unless the config allows them.
    #[instrument(skip(edges, config), fields(edge_count = edges.len()), level = "debug")]
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(u32, u32)],
        config: &ProjectionConfig,
    ) -> Result<Self> {
        check_limits(vertex_count, edges.len() * 2, config)?;

        let mut arcs = Vec::with_capacity(edges.len() * 2);
        let mut self_loops = 0usize;
        for &(u, v) in edges {
            for node in [u, v] {
                if node as usize >= vertex_count {
                    return Err(LowlinkError::invalid_input(format!(
                        "edge ({}, {}) references node {} outside 0..{}",
                        u, v, node, vertex_count
                    )));
                }
            }
            if u == v {
                self_loops += 1;
                continue;
            }
            arcs.push((u, v));
            arcs.push((v, u));
        }
        if self_loops > 0 {
            debug!(self_loops, "Dropped self-loops from projection");
        }

        let (offsets, neighbors) = build_csr(vertex_count, &arcs);
        let projection = Self {
            vertex_count,
            offsets,
            neighbors,
        };

        if config.reject_parallel_edges {
            if let Some((node, neighbor)) = find_parallel_edge(&projection) {
                return Err(LowlinkError::NonSimpleGraph { node, neighbor });
            }
        }

        debug!(
            vertices = projection.vertex_count,
            edges = projection.edge_count(),
            bytes = projection.memory_size(),
            "Built graph projection"
        );
        Ok(projection)
    }
}

/// Builder for constructing a `GraphProjection` from an `UndirectedGraph`.
pub struct ProjectionBuilder<'a> {
    graph: &'a UndirectedGraph,
    config: ProjectionConfig,
}

impl<'a> ProjectionBuilder<'a> {
    /// Create a new projection builder.
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self {
            graph,
            config: ProjectionConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ProjectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the vertex limit.
    pub fn max_vertices(mut self, max_vertices: usize) -> Self {
        self.config.max_vertices = max_vertices;
        self
    }

    /// Build the projection.
    ///
    /// The container is simple by construction, so only the size limits are
    /// checked here.
    #[instrument(skip(self), level = "debug")]
    pub fn build(self) -> Result<GraphProjection> {
        let vertex_count = self.graph.node_count();
        let arc_count = self.graph.edge_count() * 2;
        check_limits(vertex_count, arc_count, &self.config)?;

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut neighbors = Vec::with_capacity(arc_count);
        offsets.push(0u32);
        for slot in 0..vertex_count as u32 {
            neighbors.extend_from_slice(self.graph.neighbors(slot));
            offsets.push(neighbors.len() as u32);
        }

        let projection = GraphProjection {
            vertex_count,
            offsets,
            neighbors,
        };
        debug!(
            vertices = projection.vertex_count,
            edges = projection.edge_count(),
            "Built graph projection from container"
        );
        Ok(projection)
    }
}

fn check_limits(vertex_count: usize, arc_count: usize, config: &ProjectionConfig) -> Result<()> {
    if vertex_count > config.max_vertices {
        return Err(LowlinkError::invalid_input(format!(
            "projection of {} vertices exceeds limit of {}",
            vertex_count, config.max_vertices
        )));
    }
    let estimated = (vertex_count + 1) * 4 + arc_count * 4;
    if estimated > config.max_projection_memory {
        return Err(LowlinkError::invalid_input(format!(
            "projection needs {} bytes, limit is {}",
            estimated, config.max_projection_memory
        )));
    }
    if arc_count > u32::MAX as usize {
        return Err(LowlinkError::invalid_input(format!(
            "{} adjacency entries do not fit 32-bit offsets",
            arc_count
        )));
    }
    Ok(())
}

/// Build CSR from a directed arc list, keeping per-source arc order.
fn build_csr(vertex_count: usize, arcs: &[(u32, u32)]) -> (Vec<u32>, Vec<u32>) {
    if vertex_count == 0 {
        return (vec![0], Vec::new());
    }

    // Count degrees
    let mut degrees = vec![0u32; vertex_count];
    for &(src, _) in arcs {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; vertex_count + 1];
    for i in 0..vertex_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbors
    let mut neighbors = vec![0u32; arcs.len()];
    let mut current = offsets.clone();
    for &(src, dst) in arcs {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        current[src as usize] += 1;
    }

    (offsets, neighbors)
}

/// First `(node, neighbor)` pair listed twice in the same adjacency slice.
fn find_parallel_edge(graph: &GraphProjection) -> Option<(u32, u32)> {
    // last_seen[v] == u means v already appeared in u's adjacency
    let mut last_seen = vec![u32::MAX; graph.vertex_count];
    for u in 0..graph.vertex_count as u32 {
        for &v in graph.neighbors(u) {
            if last_seen[v as usize] == u {
                return Some((u, v));
            }
            last_seen[v as usize] = u;
        }
    }
    None
}
