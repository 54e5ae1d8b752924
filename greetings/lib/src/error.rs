/// Error types for the greetings library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetingError {
    /// A greeting was requested for an empty name.
    #[error("empty name")]
    EmptyName,
}

/// Convenience Result type for greeting operations.
pub type Result<T> = std::result::Result<T, GreetingError>;
