#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Status code \"{0}\" is invalid.")]
    InvalidCode(String),

    #[error("Status code \"{0}\" is explicitly reserved but not used.")]
    ReservedCode(u16),

    #[error("Status code \"{0}\" is unassigned.")]
    UnassignedCode(String),
}
