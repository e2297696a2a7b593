//! Replicate-Configuration Admission
//!
//! Gate between a user-supplied topology description and the CDC
//! machinery that will act on it. One `validate()` call runs, in fixed
//! order:
//!
//! 1. Cluster-basic: every declared cluster in isolation + mutual
//!    uniqueness
//! 2. Relevance: the local cluster is a member and its slot declaration
//!    matches reality
//! 3. Topology: edges reference known clusters, are unique, and form a
//!    star
//! 4. Transition (when a config is already installed): field-by-field
//!    comparison, with stricter rules while pchannels grow
//!
//! The check order is part of the contract: it decides which violation
//! surfaces when several hold at once. Validation is deterministic,
//! side-effect free, and fail-fast; no partial acceptance is observable.

mod cluster;
mod errors;
mod multiset;
mod topology;
mod transition;
mod uri;

pub use errors::{ValidationError, ValidationResult};
pub use multiset::equal_ignore_order;
pub use uri::is_valid_request_uri;

use std::collections::HashMap;

use crate::config::{ReplicaCluster, ReplicateConfiguration};

/// Admission validator for one candidate configuration.
///
/// Borrows its inputs and mutates only its own derived state; create one
/// instance per candidate and discard it after the call. Instances are
/// not meant to be shared.
pub struct ReplicateConfigValidator<'a> {
    /// Proposed configuration.
    incoming: Option<&'a ReplicateConfiguration>,

    /// Configuration currently in service, absent on first install.
    current: Option<&'a ReplicateConfiguration>,

    /// Identifier of the cluster running the check.
    local_cluster_id: &'a str,

    /// Physical channels the local cluster actually owns.
    local_pchannels: &'a [String],

    /// ID -> cluster index over the incoming configuration, built by the
    /// cluster-basic check.
    cluster_index: HashMap<&'a str, &'a ReplicaCluster>,

    /// Set when any cluster's pchannel list grew relative to `current`.
    growth_detected: bool,
}

impl<'a> ReplicateConfigValidator<'a> {
    /// Creates a validator over the four admission inputs.
    pub fn new(
        incoming: Option<&'a ReplicateConfiguration>,
        current: Option<&'a ReplicateConfiguration>,
        local_cluster_id: &'a str,
        local_pchannels: &'a [String],
    ) -> Self {
        Self {
            incoming,
            current,
            local_cluster_id,
            local_pchannels,
            cluster_index: HashMap::new(),
            growth_detected: false,
        }
    }

    /// Runs every admission check in order and returns the first
    /// violation, if any.
    pub fn validate(&mut self) -> ValidationResult<()> {
        let incoming = self.incoming.ok_or(ValidationError::NilConfig)?;
        if incoming.clusters.is_empty() {
            return Err(ValidationError::EmptyClusters);
        }

        self.cluster_index = cluster::check_cluster_basic(&incoming.clusters)?;
        cluster::check_relevance(
            &self.cluster_index,
            self.local_cluster_id,
            self.local_pchannels,
        )?;
        topology::check_edge_uniqueness(&incoming.cross_cluster_topology, &self.cluster_index)?;
        topology::check_star_shape(&incoming.cross_cluster_topology, &incoming.clusters)?;

        if let Some(current) = self.current {
            self.growth_detected =
                transition::check_transition(incoming, current, &self.cluster_index)?;
        }
        Ok(())
    }

    /// Whether any cluster's pchannel list is growing. Meaningful after a
    /// successful `validate()`; the caller branches to the slot-expansion
    /// workflow on `true`.
    pub fn growth_detected(&self) -> bool {
        self.growth_detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectionParam, TopologyEdge};

    fn cluster(id: &str, uri: &str, pchannels: &[&str]) -> ReplicaCluster {
        ReplicaCluster::new(
            id,
            ConnectionParam::new(uri, "test-token"),
            pchannels.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn chans(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn valid_config() -> ReplicateConfiguration {
        ReplicateConfiguration::new(
            vec![
                cluster("cluster-1", "localhost:19530", &["ch-1", "ch-2"]),
                cluster("cluster-2", "localhost:19531", &["ch-1", "ch-2"]),
            ],
            vec![TopologyEdge::new("cluster-1", "cluster-2")],
        )
    }

    #[test]
    fn test_valid_configuration_is_admitted() {
        let config = valid_config();
        let local = chans(&["ch-1", "ch-2"]);
        let mut validator = ReplicateConfigValidator::new(Some(&config), None, "cluster-1", &local);
        assert!(validator.validate().is_ok());
        assert!(!validator.growth_detected());
    }

    #[test]
    fn test_nil_config_is_rejected() {
        let local = chans(&["ch-1"]);
        let mut validator = ReplicateConfigValidator::new(None, None, "cluster-1", &local);
        let err = validator.validate().unwrap_err();
        assert_eq!(err, ValidationError::NilConfig);
    }

    #[test]
    fn test_empty_cluster_list_is_rejected() {
        let config = ReplicateConfiguration::default();
        let local = chans(&["ch-1"]);
        let mut validator = ReplicateConfigValidator::new(Some(&config), None, "cluster-1", &local);
        let err = validator.validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyClusters);
    }

    #[test]
    fn test_check_order_reports_cluster_basic_before_relevance() {
        // The local cluster is missing AND a cluster id has whitespace;
        // the cluster-basic violation wins.
        let config = ReplicateConfiguration::new(
            vec![cluster("bad id", "localhost:19530", &["ch-1"])],
            vec![],
        );
        let local = chans(&["ch-1"]);
        let mut validator = ReplicateConfigValidator::new(Some(&config), None, "cluster-1", &local);
        let err = validator.validate().unwrap_err();
        assert!(err.to_string().contains("containing whitespace characters"));
    }

    #[test]
    fn test_check_order_reports_edges_before_shape() {
        // A duplicate edge also breaks the star shape; the uniqueness
        // violation wins.
        let mut config = valid_config();
        config
            .cross_cluster_topology
            .push(Some(TopologyEdge::new("cluster-1", "cluster-2")));
        let local = chans(&["ch-1", "ch-2"]);
        let mut validator = ReplicateConfigValidator::new(Some(&config), None, "cluster-1", &local);
        let err = validator.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate topology relationship"));
    }

    #[test]
    fn test_transition_only_runs_with_a_current_config() {
        // Shrinking pchannels is only visible to the transition check.
        let config = valid_config();
        let local = chans(&["ch-1", "ch-2"]);
        let mut validator = ReplicateConfigValidator::new(Some(&config), None, "cluster-1", &local);
        assert!(validator.validate().is_ok());

        let grown = ReplicateConfiguration::new(
            vec![
                cluster("cluster-1", "localhost:19530", &["ch-1", "ch-2", "ch-3"]),
                cluster("cluster-2", "localhost:19531", &["ch-1", "ch-2", "ch-3"]),
            ],
            vec![TopologyEdge::new("cluster-1", "cluster-2")],
        );
        let local = chans(&["ch-1", "ch-2"]);
        let mut validator =
            ReplicateConfigValidator::new(Some(&config), Some(&grown), "cluster-1", &local);
        let err = validator.validate().unwrap_err();
        assert!(err.to_string().contains("pchannels cannot decrease"));
    }

    #[test]
    fn test_growth_is_reported_after_success() {
        let current = ReplicateConfiguration::new(
            vec![
                cluster("cluster-1", "localhost:19530", &["ch-1"]),
                cluster("cluster-2", "localhost:19531", &["ch-1"]),
            ],
            vec![TopologyEdge::new("cluster-1", "cluster-2")],
        );
        let incoming = valid_config();
        let local = chans(&["ch-1", "ch-2"]);
        let mut validator =
            ReplicateConfigValidator::new(Some(&incoming), Some(&current), "cluster-1", &local);
        assert!(validator.validate().is_ok());
        assert!(validator.growth_detected());
    }
}
