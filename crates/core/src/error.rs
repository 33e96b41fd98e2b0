/// Domain-level failure kinds shared by the HTTP handlers.
///
/// Every variant carries the finished user-facing message: the callers
/// of this API consume plain-text Brazilian Portuguese bodies, so the
/// message is the contract, not an internal detail.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The requested entity id does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A caller-supplied id is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The request could not be processed (malformed input, failed
    /// persistence, unsupported import format).
    #[error("{0}")]
    InvalidRequest(String),
}

impl DomainError {
    /// Wrap an underlying failure in the generic invalid-request
    /// message used across all write paths.
    pub fn requisicao_invalida(cause: impl std::fmt::Display) -> Self {
        DomainError::InvalidRequest(format!("Requisição inválida.\n{cause}"))
    }
}
