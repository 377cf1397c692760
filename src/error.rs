use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the integration engine.
///
/// Failures raised inside the integrand itself are panics and are not
/// represented here; they resume on the calling thread unmodified.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected before any work started.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The operating system refused to spawn the worker threads.
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

/// The validation failures the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("n must be positive")]
    NonPositiveSubdivisions,

    #[error("parallelism must be positive")]
    NonPositiveParallelism,
}

impl InvalidArgument {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidArgument::NonPositiveSubdivisions => "n_not_positive",
            InvalidArgument::NonPositiveParallelism => "parallelism_not_positive",
        }
    }

    /// Message text of the operation service this engine backs.
    ///
    /// Downstream handlers match on these strings, so they never change.
    pub fn reference_message(&self) -> &'static str {
        match self {
            InvalidArgument::NonPositiveSubdivisions => "n должно быть положительным",
            InvalidArgument::NonPositiveParallelism => "parallelism должно быть положительным",
        }
    }
}

impl Error {
    /// Returns the validation failure, if this is one.
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            Error::InvalidArgument(kind) => Some(*kind),
            Error::PoolBuild(_) => None,
        }
    }
}
