// ==========================================
// Volunteer Shift Scheduler - API layer error types
// ==========================================
// Responsibility: user-facing errors for the scheduling seams
// Tooling: thiserror derive macro
// ==========================================

use crate::domain::constraints::ConstraintError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Input validation =====
    #[error("invalid scheduling constraints: {0}")]
    InvalidConstraints(#[from] ConstraintError),

    // ===== Collaborator failures =====
    #[error("data source failure: {0}")]
    DataSource(String),

    #[error("assignment store failure: {0}")]
    Store(String),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
