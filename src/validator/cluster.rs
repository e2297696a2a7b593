//! Per-cluster format checks and local-membership check
//!
//! The cluster-basic pass validates every declared cluster in isolation
//! and for mutual uniqueness, and builds the cluster index the later
//! checks resolve IDs against. The relevance pass ties the configuration
//! to the cluster actually running the admission: a node must never
//! accept a topology it is not part of.

use std::collections::{HashMap, HashSet};

use crate::config::ReplicaCluster;

use super::errors::{ValidationError, ValidationResult};
use super::multiset::equal_ignore_order;
use super::uri::is_valid_request_uri;

const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Validates every cluster declaration and returns the ID -> cluster
/// index on success.
///
/// Single pass; the first violation aborts. The first cluster fixes the
/// slot count every later cluster must match.
pub(super) fn check_cluster_basic(
    clusters: &[Option<ReplicaCluster>],
) -> ValidationResult<HashMap<&str, &ReplicaCluster>> {
    let mut expected_slot_count = 0;
    let mut first_cluster_id = "";
    let mut uri_owners: HashMap<&str, &str> = HashMap::new();
    let mut cluster_index: HashMap<&str, &ReplicaCluster> = HashMap::new();

    for (i, slot) in clusters.iter().enumerate() {
        let cluster = slot
            .as_ref()
            .ok_or(ValidationError::NilCluster { index: i })?;

        let cluster_id = cluster.cluster_id.as_str();
        if cluster_id.is_empty() {
            return Err(ValidationError::EmptyClusterId { index: i });
        }
        if cluster_id.contains(WHITESPACE) {
            return Err(ValidationError::WhitespaceClusterId {
                index: i,
                cluster_id: cluster_id.to_string(),
            });
        }

        let connection = cluster.connection_param.as_ref().ok_or_else(|| {
            ValidationError::NilConnectionParam {
                cluster_id: cluster_id.to_string(),
            }
        })?;
        let uri = connection.uri.as_str();
        if uri.is_empty() {
            return Err(ValidationError::EmptyUri {
                cluster_id: cluster_id.to_string(),
            });
        }
        if !is_valid_request_uri(uri) {
            return Err(ValidationError::InvalidUriFormat {
                cluster_id: cluster_id.to_string(),
                uri: uri.to_string(),
            });
        }
        if let Some(owner) = uri_owners.insert(uri, cluster_id) {
            return Err(ValidationError::DuplicateUri {
                uri: uri.to_string(),
                first: owner.to_string(),
                second: cluster_id.to_string(),
            });
        }

        if cluster.pchannels.is_empty() {
            return Err(ValidationError::EmptyPchannels {
                cluster_id: cluster_id.to_string(),
            });
        }
        let mut seen_pchannels: HashSet<&str> = HashSet::new();
        for (j, pchannel) in cluster.pchannels.iter().enumerate() {
            if pchannel.is_empty() {
                return Err(ValidationError::EmptyPchannel {
                    cluster_id: cluster_id.to_string(),
                    index: j,
                });
            }
            if !seen_pchannels.insert(pchannel.as_str()) {
                return Err(ValidationError::DuplicatePchannel {
                    cluster_id: cluster_id.to_string(),
                    pchannel: pchannel.to_string(),
                });
            }
        }

        // The first cluster establishes the configuration's slot count.
        if i == 0 {
            expected_slot_count = cluster.pchannels.len();
            first_cluster_id = cluster_id;
        } else if cluster.pchannels.len() != expected_slot_count {
            return Err(ValidationError::PchannelCountMismatch {
                cluster_id: cluster_id.to_string(),
                actual: cluster.pchannels.len(),
                expected: expected_slot_count,
                first_cluster_id: first_cluster_id.to_string(),
            });
        }

        // First occurrence wins; the repeat is the one reported.
        if cluster_index.insert(cluster_id, cluster).is_some() {
            return Err(ValidationError::DuplicateClusterId {
                cluster_id: cluster_id.to_string(),
            });
        }
    }

    Ok(cluster_index)
}

/// Ensures the local cluster is a declared member and its slot
/// declaration matches the locally observed pchannels as a multiset.
pub(super) fn check_relevance(
    cluster_index: &HashMap<&str, &ReplicaCluster>,
    local_cluster_id: &str,
    local_pchannels: &[String],
) -> ValidationResult<()> {
    let local_cluster =
        cluster_index
            .get(local_cluster_id)
            .ok_or_else(|| ValidationError::LocalClusterMissing {
                cluster_id: local_cluster_id.to_string(),
            })?;

    if !equal_ignore_order(local_pchannels, &local_cluster.pchannels) {
        return Err(ValidationError::LocalPchannelsMismatch {
            local: local_pchannels.to_vec(),
            declared: local_cluster.pchannels.clone(),
        });
    }
    Ok(())
}
