use thiserror::Error;

/// Errors that can occur when operating on a pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The released object is already present in the pool's free list.
    ///
    /// This signals a double release in the calling code. The pool is left unchanged.
    #[error("object has already been released to the pool")]
    DuplicateRelease,

    /// A capacity argument was zero or exceeded the current maximum size of the pool.
    #[error("invalid capacity request: {requested} (pool maximum size is {max_size})")]
    InvalidCapacityRequest {
        /// The capacity that the caller asked for.
        requested: usize,

        /// The maximum size of the pool at the time of the request.
        max_size: usize,
    },

    /// A documented precondition of the operation did not hold.
    #[error("precondition violated: {problem}")]
    PreconditionViolation {
        /// A human-readable description of the problem.
        problem: String,
    },

    /// The factory of the pool failed to construct a new object.
    #[error("failed to construct a pooled object")]
    Construction {
        /// The error reported by the factory, unchanged.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
