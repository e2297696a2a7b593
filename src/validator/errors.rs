//! Admission error types
//!
//! One variant per violation the admission checks can report. The first
//! violation encountered aborts the call and is returned verbatim; the
//! caller never sees a partially accepted configuration.
//!
//! Messages identify the offending cluster by index while its ID is
//! unusable and by ID afterwards. Callers match on variants; operator
//! tooling matches on message substrings.

use thiserror::Error;

/// Result type for admission checks
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single admission violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ==================
    // Shape
    // ==================
    /// No incoming configuration was supplied.
    #[error("config cannot be nil")]
    NilConfig,

    /// The incoming configuration declares no clusters.
    #[error("clusters list cannot be empty")]
    EmptyClusters,

    /// A cluster list slot is null.
    #[error("cluster at index {index} is nil")]
    NilCluster { index: usize },

    /// A topology list slot is null.
    #[error("topology at index {index} is nil")]
    NilEdge { index: usize },

    // ==================
    // Identity
    // ==================
    /// A cluster has an empty identifier.
    #[error("cluster at index {index} has empty clusterID")]
    EmptyClusterId { index: usize },

    /// A cluster identifier contains whitespace.
    #[error("cluster at index {index} has clusterID '{cluster_id}' containing whitespace characters")]
    WhitespaceClusterId { index: usize, cluster_id: String },

    /// Two clusters declare the same identifier.
    #[error("duplicate clusterID found: '{cluster_id}'")]
    DuplicateClusterId { cluster_id: String },

    /// Two clusters declare the same connection URI.
    #[error("duplicate URI found: '{uri}' is used by both cluster '{first}' and cluster '{second}'")]
    DuplicateUri {
        uri: String,
        first: String,
        second: String,
    },

    // ==================
    // Connection param
    // ==================
    /// A cluster declares no connection param.
    #[error("cluster '{cluster_id}' has nil connection_param")]
    NilConnectionParam { cluster_id: String },

    /// A cluster declares an empty connection URI.
    #[error("cluster '{cluster_id}' has empty URI")]
    EmptyUri { cluster_id: String },

    /// A cluster's connection URI is not an absolute request URI.
    #[error("cluster '{cluster_id}' has invalid URI format: '{uri}'")]
    InvalidUriFormat { cluster_id: String, uri: String },

    // ==================
    // Channel slots
    // ==================
    /// A cluster declares no pchannels.
    #[error("cluster '{cluster_id}' has empty pchannels")]
    EmptyPchannels { cluster_id: String },

    /// A pchannel entry is empty.
    #[error("cluster '{cluster_id}' has empty pchannel at index {index}")]
    EmptyPchannel { cluster_id: String, index: usize },

    /// A pchannel appears twice within one cluster.
    #[error("cluster '{cluster_id}' has duplicate pchannel: '{pchannel}'")]
    DuplicatePchannel { cluster_id: String, pchannel: String },

    /// A cluster's slot count differs from the first cluster's.
    #[error("cluster '{cluster_id}' has {actual} pchannels, but expected {expected} (same as cluster '{first_cluster_id}')")]
    PchannelCountMismatch {
        cluster_id: String,
        actual: usize,
        expected: usize,
        first_cluster_id: String,
    },

    // ==================
    // Relevance
    // ==================
    /// The cluster running the check is not declared in the configuration.
    #[error("current cluster '{cluster_id}' must be included in the clusters list")]
    LocalClusterMissing { cluster_id: String },

    /// The local pchannel list disagrees with the declaration.
    #[error("current pchannels do not match the pchannels in the config, current pchannels: {local:?}, config pchannels: {declared:?}")]
    LocalPchannelsMismatch {
        local: Vec<String>,
        declared: Vec<String>,
    },

    // ==================
    // Topology edges
    // ==================
    /// An edge names a source cluster that is not declared.
    #[error("topology at index {index} references non-existent source cluster: '{cluster_id}'")]
    UnknownSourceCluster { index: usize, cluster_id: String },

    /// An edge names a target cluster that is not declared.
    #[error("topology at index {index} references non-existent target cluster: '{cluster_id}'")]
    UnknownTargetCluster { index: usize, cluster_id: String },

    /// The same source -> target pair appears twice.
    #[error("duplicate topology relationship found: '{edge_source}->{target}'")]
    DuplicateEdge { edge_source: String, target: String },

    // ==================
    // Topology shape
    // ==================
    /// No cluster satisfies the center degree constraints.
    #[error("no center node found, star topology must have exactly one center node")]
    NoCenterNode,

    /// More than one cluster satisfies the center degree constraints.
    #[error("multiple center nodes found, only one center node is allowed in star topology")]
    MultipleCenterNodes,

    /// A non-center cluster does not satisfy the leaf degree constraints.
    #[error("cluster '{cluster_id}' does not follow star topology pattern (in-degree={in_degree}, out-degree={out_degree})")]
    NotStarPattern {
        cluster_id: String,
        in_degree: usize,
        out_degree: usize,
    },

    // ==================
    // Transition
    // ==================
    /// A cluster's slot list shrank relative to the installed config.
    #[error("cluster '{cluster_id}' pchannels cannot decrease: current={current}, incoming={incoming}")]
    PchannelsDecreased {
        cluster_id: String,
        current: usize,
        incoming: usize,
    },

    /// A cluster's existing slots were reordered or replaced.
    #[error("cluster '{cluster_id}' existing pchannels must be preserved at the same positions: current={current:?}, incoming={incoming:?}")]
    PchannelPrefixAltered {
        cluster_id: String,
        current: Vec<String>,
        incoming: Vec<String>,
    },

    /// A cluster's connection URI changed.
    #[error("cluster '{cluster_id}' connection_param.uri cannot be changed: current={current}, incoming={incoming}")]
    UriChanged {
        cluster_id: String,
        current: String,
        incoming: String,
    },

    /// A cluster's connection token changed.
    #[error("cluster '{cluster_id}' connection_param.token cannot be changed")]
    TokenChanged { cluster_id: String },

    // ==================
    // Growth mode
    // ==================
    /// Slot growth combined with a cluster-count change.
    #[error("when pchannels are increasing, cluster set must remain identical: current has {current} clusters, incoming has {incoming}")]
    GrowthClusterCountChanged { current: usize, incoming: usize },

    /// Slot growth combined with a cluster-membership change.
    #[error("when pchannels are increasing, cluster set must remain identical: cluster '{cluster_id}' missing from incoming config")]
    GrowthClusterRemoved { cluster_id: String },

    /// Slot growth combined with an edge-count change.
    #[error("when pchannels are increasing, topology must remain identical: current has {current} edges, incoming has {incoming}")]
    GrowthEdgeCountChanged { current: usize, incoming: usize },

    /// Slot growth combined with an edge-membership change.
    #[error("when pchannels are increasing, topology must remain identical: edge '{edge}' not in current config")]
    GrowthEdgeAdded { edge: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_identify_the_offender() {
        let err = ValidationError::DuplicatePchannel {
            cluster_id: "cluster-1".to_string(),
            pchannel: "ch-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cluster 'cluster-1' has duplicate pchannel: 'ch-1'"
        );

        let err = ValidationError::NilCluster { index: 2 };
        assert_eq!(err.to_string(), "cluster at index 2 is nil");
    }

    #[test]
    fn test_slot_count_message_names_the_reference_cluster() {
        let err = ValidationError::PchannelCountMismatch {
            cluster_id: "cluster-2".to_string(),
            actual: 1,
            expected: 2,
            first_cluster_id: "cluster-1".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("has 1 pchannels, but expected 2"));
        assert!(message.contains("same as cluster 'cluster-1'"));
    }
}
