use std::num::NonZero;

/// The maximum number of free objects a pool retains unless configured otherwise.
pub const DEFAULT_MAX_SIZE: NonZero<usize> = NonZero::new(1024).unwrap();

/// The initial capacity of the free list unless configured otherwise.
///
/// This is only an allocation hint and is clamped to the maximum size of the pool.
pub const DEFAULT_CAPACITY: usize = 16;
