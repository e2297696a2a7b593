//! crosswal - admission control for cross-cluster WAL replication
//!
//! Decides whether a proposed replication topology is acceptable, both as
//! a standalone definition and as a transition from the configuration
//! currently in service.

pub mod config;
pub mod observability;
pub mod validator;
