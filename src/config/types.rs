//! Replicate-configuration wire types
//!
//! Shapes exchanged with the surrounding control plane:
//! - `ReplicateConfiguration`: cluster list + directed topology edges
//! - `ReplicaCluster`: identity, connection endpoint, pchannel slots
//! - `TopologyEdge`: one source -> target replication relationship
//!
//! A `null` list slot deserializes to `None`; an absent inner object
//! deserializes to `None`. Unknown fields are ignored on input.

use serde::{Deserialize, Serialize};

/// A proposed or installed cross-cluster replication configuration.
///
/// Order inside either list is preserved by serialization; the admission
/// checks only depend on it where pchannel positions are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicateConfiguration {
    /// Participating clusters.
    #[serde(default)]
    pub clusters: Vec<Option<ReplicaCluster>>,

    /// Directed replication relationships between clusters.
    #[serde(default)]
    pub cross_cluster_topology: Vec<Option<TopologyEdge>>,
}

impl ReplicateConfiguration {
    /// Assemble a configuration from fully-populated clusters and edges.
    pub fn new(clusters: Vec<ReplicaCluster>, topology: Vec<TopologyEdge>) -> Self {
        Self {
            clusters: clusters.into_iter().map(Some).collect(),
            cross_cluster_topology: topology.into_iter().map(Some).collect(),
        }
    }
}

/// One participant in the replication topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaCluster {
    /// Cluster identifier; non-empty, no whitespace.
    #[serde(default)]
    pub cluster_id: String,

    /// Connection endpoint for the cluster.
    #[serde(default)]
    pub connection_param: Option<ConnectionParam>,

    /// Ordered physical-channel slots. Replication routes by equal slot
    /// indices across clusters, so every cluster declares the same count.
    #[serde(default)]
    pub pchannels: Vec<String>,
}

impl ReplicaCluster {
    /// Assemble a cluster declaration.
    pub fn new(
        cluster_id: impl Into<String>,
        connection: ConnectionParam,
        pchannels: Vec<String>,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            connection_param: Some(connection),
            pchannels,
        }
    }

    /// Connection URI, or "" when the connection param is absent.
    pub fn uri(&self) -> &str {
        self.connection_param
            .as_ref()
            .map(|c| c.uri.as_str())
            .unwrap_or("")
    }

    /// Connection token, or "" when the connection param is absent.
    pub fn token(&self) -> &str {
        self.connection_param
            .as_ref()
            .map(|c| c.token.as_str())
            .unwrap_or("")
    }
}

/// Connection details for reaching a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParam {
    /// Endpoint URI; must parse as an absolute request URI.
    #[serde(default)]
    pub uri: String,

    /// Opaque credential passed through to the replicator.
    #[serde(default)]
    pub token: String,
}

impl ConnectionParam {
    /// Assemble a connection param.
    pub fn new(uri: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            token: token.into(),
        }
    }
}

/// A directed replication relationship between two declared clusters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyEdge {
    /// Cluster the replication stream originates from.
    #[serde(default)]
    pub source_cluster_id: String,

    /// Cluster the replication stream is delivered to.
    #[serde(default)]
    pub target_cluster_id: String,
}

impl TopologyEdge {
    /// Assemble an edge.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_cluster_id: source.into(),
            target_cluster_id: target.into(),
        }
    }

    /// Canonical "source->target" key used for uniqueness and set
    /// comparison. Sources and targets are not commutative.
    pub fn key(&self) -> String {
        format!("{}->{}", self.source_cluster_id, self.target_cluster_id)
    }
}
