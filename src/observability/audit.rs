//! Admission audit log
//!
//! Append-only record of every admission decision: one JSON record per
//! line, flushed and synced before the call returns. The log answers
//! "who changed the replication topology, to what, and when" after the
//! fact; retention and shipping are external concerns.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One admission decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    /// RFC 3339 timestamp of the decision.
    pub timestamp: String,

    /// Attempt id correlating this record with emitted events.
    pub attempt_id: Uuid,

    /// Cluster that ran the admission.
    pub local_cluster_id: String,

    /// "ACCEPTED" or "REJECTED".
    pub outcome: String,

    /// Number of clusters in the candidate configuration.
    pub cluster_count: usize,

    /// Whether the accepted configuration expands pchannel slots.
    pub pchannels_expanding: bool,

    /// First violation encountered, present on rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdmissionRecord {
    /// Record for an admitted configuration.
    pub fn accepted(
        attempt_id: Uuid,
        local_cluster_id: impl Into<String>,
        cluster_count: usize,
        pchannels_expanding: bool,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            attempt_id,
            local_cluster_id: local_cluster_id.into(),
            outcome: "ACCEPTED".to_string(),
            cluster_count,
            pchannels_expanding,
            error: None,
        }
    }

    /// Record for a rejected configuration.
    pub fn rejected(
        attempt_id: Uuid,
        local_cluster_id: impl Into<String>,
        cluster_count: usize,
        error: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            attempt_id,
            local_cluster_id: local_cluster_id.into(),
            outcome: "REJECTED".to_string(),
            cluster_count,
            pchannels_expanding: false,
            error: Some(error.into()),
        }
    }
}

/// File-backed append-only admission log.
pub struct AdmissionAuditLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl AdmissionAuditLog {
    /// Opens or creates the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record. The record is durable when this returns.
    pub fn record(&self, record: &AdmissionRecord) -> io::Result<()> {
        let json = serde_json::to_string(record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut writer = self.writer.lock().unwrap();
        writeln!(writer, "{}", json)?;
        writer.flush()?;
        writer.get_ref().sync_all()
    }

    /// Reads every record back, oldest first.
    pub fn read_all(path: impl AsRef<Path>) -> io::Result<Vec<AdmissionRecord>> {
        let file = File::open(path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            records.push(record);
        }
        Ok(records)
    }
}
