//! Topology graph checks
//!
//! Two passes over the edge list. Edge uniqueness: every edge must
//! reference declared clusters and every (source, target) pair may appear
//! once. Shape: the directed graph must be a star — one center with an
//! edge to every other cluster and no incoming edges, every other cluster
//! a pure leaf. The shape constraint structurally forbids cycles, so no
//! separate cycle check exists.
//!
//! An empty edge list passes both checks; a configuration may be admitted
//! before any replication relationship is set up.

use std::collections::{HashMap, HashSet};

use crate::config::{ReplicaCluster, TopologyEdge};

use super::errors::{ValidationError, ValidationResult};

/// Validates edge endpoints and pairwise uniqueness.
pub(super) fn check_edge_uniqueness(
    edges: &[Option<TopologyEdge>],
    cluster_index: &HashMap<&str, &ReplicaCluster>,
) -> ValidationResult<()> {
    if edges.is_empty() {
        return Ok(());
    }

    let mut seen_edges: HashSet<String> = HashSet::new();
    for (i, slot) in edges.iter().enumerate() {
        let edge = slot.as_ref().ok_or(ValidationError::NilEdge { index: i })?;

        if !cluster_index.contains_key(edge.source_cluster_id.as_str()) {
            return Err(ValidationError::UnknownSourceCluster {
                index: i,
                cluster_id: edge.source_cluster_id.clone(),
            });
        }
        if !cluster_index.contains_key(edge.target_cluster_id.as_str()) {
            return Err(ValidationError::UnknownTargetCluster {
                index: i,
                cluster_id: edge.target_cluster_id.clone(),
            });
        }
        if !seen_edges.insert(edge.key()) {
            return Err(ValidationError::DuplicateEdge {
                edge_source: edge.source_cluster_id.clone(),
                target: edge.target_cluster_id.clone(),
            });
        }
    }
    Ok(())
}

/// Validates that the directed graph is a star.
///
/// The center is the cluster with out-degree = |clusters| - 1 and
/// in-degree = 0 (a PRIMARY originates replication to every other
/// cluster); every other cluster must have in-degree = 1 and
/// out-degree = 0. Clusters are scanned in declaration order so the
/// reported violation is deterministic.
pub(super) fn check_star_shape(
    edges: &[Option<TopologyEdge>],
    clusters: &[Option<ReplicaCluster>],
) -> ValidationResult<()> {
    if edges.is_empty() {
        return Ok(());
    }

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut out_degree: HashMap<&str, usize> = HashMap::new();
    for cluster in clusters.iter().flatten() {
        in_degree.insert(cluster.cluster_id.as_str(), 0);
        out_degree.insert(cluster.cluster_id.as_str(), 0);
    }
    for edge in edges.iter().flatten() {
        *out_degree.entry(edge.source_cluster_id.as_str()).or_insert(0) += 1;
        *in_degree.entry(edge.target_cluster_id.as_str()).or_insert(0) += 1;
    }

    let cluster_count = in_degree.len();
    let mut center: Option<&str> = None;
    for cluster in clusters.iter().flatten() {
        let cluster_id = cluster.cluster_id.as_str();
        if out_degree[cluster_id] == cluster_count - 1 && in_degree[cluster_id] == 0 {
            if center.is_some() {
                return Err(ValidationError::MultipleCenterNodes);
            }
            center = Some(cluster_id);
        }
    }
    let center = center.ok_or(ValidationError::NoCenterNode)?;

    for cluster in clusters.iter().flatten() {
        let cluster_id = cluster.cluster_id.as_str();
        if cluster_id == center {
            continue;
        }
        if in_degree[cluster_id] != 1 || out_degree[cluster_id] != 0 {
            return Err(ValidationError::NotStarPattern {
                cluster_id: cluster_id.to_string(),
                in_degree: in_degree[cluster_id],
                out_degree: out_degree[cluster_id],
            });
        }
    }
    Ok(())
}
