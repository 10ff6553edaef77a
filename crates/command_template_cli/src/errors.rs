use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-local error, wrapping the core's typed error plus the argument
/// and I/O failures that only make sense at this boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] command_template_core::Error),

    #[error("invalid --param '{0}': expected KEY=VALUE")]
    InvalidParameterArgument(String),
}

impl Error {
    /// The process exit code this error should produce, distinguishing
    /// kinds the way the out-of-scope HTTP layer would distinguish
    /// status codes (400 vs 403 vs 500-at-load-time).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Core(command_template_core::Error::CommandNotFound(_)) => 2,
            Error::Core(command_template_core::Error::Validation(_)) => 3,
            Error::Core(command_template_core::Error::SecurityViolation(_)) => 4,
            Error::Core(command_template_core::Error::Configuration(_)) => 5,
            Error::InvalidParameterArgument(_) => 1,
        }
    }

    /// Logs this error at the `tracing` level appropriate to its kind.
    pub fn log(&self) {
        match self {
            Error::Core(command_template_core::Error::CommandNotFound(_))
            | Error::Core(command_template_core::Error::Validation(_)) => {
                tracing::warn!("{self}");
            }
            Error::Core(command_template_core::Error::SecurityViolation(_))
            | Error::Core(command_template_core::Error::Configuration(_)) => {
                tracing::error!("{self}");
            }
            Error::InvalidParameterArgument(_) => {
                tracing::warn!("{self}");
            }
        }
    }
}
