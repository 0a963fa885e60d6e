use thiserror::Error;

/// Reasons a satellite synchronization is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("unknown satellite type {kind:?} for satellite {id:?}")]
    UnknownSatelliteType { id: String, kind: String },
}
