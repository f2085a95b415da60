#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared pools built on [`recycle_pool`].
//!
//! This package keeps one [`Pool`][recycle_pool::Pool] per item type so that unrelated parts of
//! a program can recycle the same kind of object without passing a pool around:
//!
//! - [`PoolRegistry`] maps an item type to its pool, creating pools on first use for types that
//!   implement [`Poolable`].
//! - [`with_pool()`] and related functions operate on a registry owned by the current thread.
//! - [`string_pool()`] and [`vec_pool()`] create pools for built-in collections that clear their
//!   contents on release. `String` and `Vec<T>` implement [`Poolable`] using these.
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::Pool;
//! use recycle_pool_shared::with_pool;
//!
//! fn collect_even(values: &[u32]) -> u32 {
//!     with_pool(|pool: &mut Pool<Vec<u32>>| {
//!         let mut even = pool.acquire_handle();
//!         even.extend(values.iter().copied().filter(|v| v % 2 == 0));
//!         even.iter().sum()
//!     })
//! }
//!
//! assert_eq!(collect_even(&[1, 2, 3, 4]), 6);
//! assert_eq!(collect_even(&[10, 11]), 10);
//! ```

mod collections;
mod erased;
mod registry;
mod local;

pub use collections::*;
pub use erased::*;
pub use registry::*;
pub use local::*;
