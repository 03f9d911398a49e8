use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("unknown behavior kind {0:?}")]
    UnknownKind(String),
}
