use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error taxonomy for the command template engine.
///
/// Every failure the core can produce is one of these four kinds. The
/// kind, not the message text, is what callers (the out-of-scope HTTP
/// layer, the CLI in this workspace) should branch on: it determines
/// the HTTP status, the audit disposition, and the log level.
///
/// # Examples
///
/// ```rust,ignore
/// use command_template_core::Error;
///
/// match some_template_operation() {
///     Ok(result) => println!("Success: {:?}", result),
///     Err(Error::CommandNotFound(name)) => eprintln!("no such template: {name}"),
///     Err(Error::SecurityViolation(_)) => eprintln!("refused"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # fn some_template_operation() -> Result<(), Error> { Ok(()) }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The requested template name is not present in the registry.
    #[error("command template '{0}' not found")]
    CommandNotFound(String),

    /// A caller-fixable validation failure: shape, type, range, presence,
    /// regex mismatch, or an unknown parameter name.
    #[error("{0}")]
    Validation(String),

    /// Input that might indicate an attempted injection. Must never be
    /// reported with the same status/shape as a `Validation` error —
    /// see the propagation policy in the error handling design.
    #[error("{0}")]
    SecurityViolation(String),

    /// The template configuration document itself is malformed. Fatal
    /// at load time; the registry is never partially populated.
    #[error("{0}")]
    Configuration(String),
}

/// Result type alias for command template engine operations.
pub type Result<T> = std::result::Result<T, Error>;
