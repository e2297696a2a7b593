//! Transition checks against the installed configuration
//!
//! A configuration change must not invalidate checkpoints, replication
//! streams, or channel-index mappings already in service. For every
//! cluster present on both sides: connection params are frozen and the
//! installed pchannel list must survive as a positional prefix of the new
//! one (append-only growth).
//!
//! When any cluster's slot list grows, replication positions keyed by
//! slot index would become ambiguous if membership or topology changed in
//! the same step, so growth freezes the cluster set and the edge set;
//! operators must split such a change into two admissions.

use std::collections::{HashMap, HashSet};

use crate::config::{ReplicaCluster, ReplicateConfiguration};

use super::errors::{ValidationError, ValidationResult};

/// Compares the incoming configuration against the installed one.
///
/// Returns whether any cluster's pchannel list grew.
pub(super) fn check_transition(
    incoming: &ReplicateConfiguration,
    current: &ReplicateConfiguration,
    cluster_index: &HashMap<&str, &ReplicaCluster>,
) -> ValidationResult<bool> {
    let mut current_index: HashMap<&str, &ReplicaCluster> = HashMap::new();
    for cluster in current.clusters.iter().flatten() {
        current_index.insert(cluster.cluster_id.as_str(), cluster);
    }

    let mut growth_detected = false;
    for cluster in incoming.clusters.iter().flatten() {
        if let Some(&installed) = current_index.get(cluster.cluster_id.as_str()) {
            growth_detected |= check_cluster_consistency(installed, cluster)?;
        }
        // Clusters absent from the installed config are new members,
        // permitted here; growth mode forbids the combination below.
    }

    if growth_detected {
        check_growth_constraints(&current_index, cluster_index, current, incoming)?;
    }
    Ok(growth_detected)
}

/// Per-cluster consistency: frozen connection params, append-only
/// pchannels. Returns whether this cluster's slot list grew.
fn check_cluster_consistency(
    installed: &ReplicaCluster,
    incoming: &ReplicaCluster,
) -> ValidationResult<bool> {
    let installed_pchannels = &installed.pchannels;
    let incoming_pchannels = &incoming.pchannels;

    if incoming_pchannels.len() < installed_pchannels.len() {
        return Err(ValidationError::PchannelsDecreased {
            cluster_id: installed.cluster_id.clone(),
            current: installed_pchannels.len(),
            incoming: incoming_pchannels.len(),
        });
    }
    // Positional comparison: a cluster may only append new slots at the
    // end, never reorder or replace installed ones.
    if incoming_pchannels[..installed_pchannels.len()] != installed_pchannels[..] {
        return Err(ValidationError::PchannelPrefixAltered {
            cluster_id: installed.cluster_id.clone(),
            current: installed_pchannels.clone(),
            incoming: incoming_pchannels.clone(),
        });
    }

    if installed.uri() != incoming.uri() {
        return Err(ValidationError::UriChanged {
            cluster_id: installed.cluster_id.clone(),
            current: installed.uri().to_string(),
            incoming: incoming.uri().to_string(),
        });
    }
    if installed.token() != incoming.token() {
        return Err(ValidationError::TokenChanged {
            cluster_id: installed.cluster_id.clone(),
        });
    }

    Ok(incoming_pchannels.len() > installed_pchannels.len())
}

/// Growth-mode tightening: the cluster set and the edge set must be
/// identical to the installed configuration.
fn check_growth_constraints(
    current_index: &HashMap<&str, &ReplicaCluster>,
    cluster_index: &HashMap<&str, &ReplicaCluster>,
    current: &ReplicateConfiguration,
    incoming: &ReplicateConfiguration,
) -> ValidationResult<()> {
    if current_index.len() != cluster_index.len() {
        return Err(ValidationError::GrowthClusterCountChanged {
            current: current_index.len(),
            incoming: cluster_index.len(),
        });
    }
    // Declaration order, so the reported cluster is deterministic.
    for cluster in current.clusters.iter().flatten() {
        if !cluster_index.contains_key(cluster.cluster_id.as_str()) {
            return Err(ValidationError::GrowthClusterRemoved {
                cluster_id: cluster.cluster_id.clone(),
            });
        }
    }

    let current_edges: HashSet<String> = current
        .cross_cluster_topology
        .iter()
        .flatten()
        .map(|edge| edge.key())
        .collect();
    let incoming_edges: Vec<String> = incoming
        .cross_cluster_topology
        .iter()
        .flatten()
        .map(|edge| edge.key())
        .collect();
    if current_edges.len() != incoming_edges.len() {
        return Err(ValidationError::GrowthEdgeCountChanged {
            current: current_edges.len(),
            incoming: incoming_edges.len(),
        });
    }
    for edge in &incoming_edges {
        if !current_edges.contains(edge) {
            return Err(ValidationError::GrowthEdgeAdded { edge: edge.clone() });
        }
    }
    Ok(())
}
