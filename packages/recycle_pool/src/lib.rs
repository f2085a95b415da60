#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`Pool`], a bounded object pool that recycles objects which are
//! expensive to allocate or initialize.
//!
//! Instead of constructing a new object for every use, callers acquire one from the pool and
//! release it when done. Released objects are kept in a last-in-first-out free list up to a
//! configurable maximum size and handed out again on the next acquisition.
//!
//! # Features
//!
//! - **Bounded retention**: At most [`max_size()`][Pool::max_size] free objects are kept;
//!   excess objects are destroyed on release.
//! - **Lifecycle hooks**: One optional callback each for creation, acquisition, release and
//!   destruction, e.g. to reset an object before it is reused.
//! - **Scoped release**: [`PoolHandle`] returns its object to the pool on every exit path.
//! - **Double release detection**: Releases can check the free list for the released object.
//! - **Pre-warming**: [`ensure_count()`][Pool::ensure_count] fills the free list in advance.
//! - **Fallible construction**: Factories may fail; errors reach the caller unchanged.
//!
//! The pool is single-threaded. It performs no synchronization and is neither [`Send`] nor
//! [`Sync`].
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::Pool;
//!
//! let mut pool = Pool::builder(|| String::with_capacity(256))
//!     .on_released(String::clear)
//!     .build();
//!
//! for word in ["alpha", "beta", "gamma"] {
//!     let mut line = pool.acquire_handle();
//!     line.push_str(word);
//!     assert_eq!(*line, word);
//! }
//!
//! // A single string was allocated and reused for every iteration.
//! assert_eq!(pool.total_created(), 1);
//! assert_eq!(pool.inactive_count(), 1);
//! ```
//!
//! Manual release, with the object moved back into the pool:
//!
//! ```rust
//! use recycle_pool::Pool;
//!
//! let mut pool = Pool::new(|| vec![0_u8; 4096]);
//!
//! let buffer = pool.acquire();
//! assert_eq!(buffer.len(), 4096);
//! pool.release(buffer).unwrap();
//!
//! assert_eq!(pool.inactive_count(), 1);
//! ```

mod builder;
mod constants;
mod duplicate_check;
mod error;
mod ext;
mod factory;
mod handle;
mod hooks;
mod object_pool;
mod pool;

pub use builder::*;
pub use constants::*;
pub use duplicate_check::*;
pub use error::*;
pub use ext::*;
pub use handle::*;
pub use hooks::*;
pub use object_pool::*;
pub use pool::*;
