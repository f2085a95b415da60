use std::cell::RefCell;

use recycle_pool::Pool;

use crate::{Poolable, PoolRegistry};

thread_local! {
    // Pools are not thread-safe, so each thread gets its own registry. It is created on first
    // use and dropped with the thread, destroying the free objects of every pool.
    static REGISTRY: RefCell<PoolRegistry> = RefCell::new(PoolRegistry::new());
}

/// Calls `f` with the current thread's pool for `T`, creating the pool on first use.
///
/// # Panics
///
/// Panics if called from within `f` or from within another function of this module that is
/// already accessing the registry of the current thread.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
/// use recycle_pool_shared::with_pool;
///
/// fn format_report(values: &[u32]) -> usize {
///     with_pool(|pool: &mut Pool<String>| {
///         let mut line = pool.acquire_handle();
///         for value in values {
///             line.push_str(&value.to_string());
///             line.push(',');
///         }
///         line.len()
///     })
/// }
///
/// assert_eq!(format_report(&[1, 22, 333]), 9);
/// assert_eq!(format_report(&[4]), 2);
/// ```
pub fn with_pool<T, R>(f: impl FnOnce(&mut Pool<T>) -> R) -> R
where
    T: Poolable,
{
    REGISTRY.with_borrow_mut(|registry| registry.with_pool(f))
}

/// Calls `f` with the current thread's pool for `T` if one has been registered or created.
///
/// This also works for types that do not implement [`Poolable`], as long as a pool was added
/// via [`register()`].
///
/// # Panics
///
/// Panics if called while the registry of the current thread is already being accessed.
pub fn with_registered_pool<T, R>(f: impl FnOnce(&mut Pool<T>) -> R) -> Option<R>
where
    T: 'static,
{
    REGISTRY.with_borrow_mut(|registry| registry.get_mut::<T>().map(f))
}

/// Adds a pool for `T` to the current thread's registry, returning the pool it replaces.
///
/// # Panics
///
/// Panics if called while the registry of the current thread is already being accessed.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
/// use recycle_pool_shared::{register, with_registered_pool};
///
/// struct Connection {
///     id: u32,
/// }
///
/// register(Pool::new(|| Connection { id: 7 }));
///
/// let id = with_registered_pool(|pool: &mut Pool<Connection>| pool.acquire().id);
/// assert_eq!(id, Some(7));
/// ```
pub fn register<T>(pool: Pool<T>) -> Option<Pool<T>>
where
    T: 'static,
{
    REGISTRY.with_borrow_mut(|registry| registry.insert(pool))
}

/// Clears every pool in the current thread's registry.
///
/// # Panics
///
/// Panics if called while the registry of the current thread is already being accessed.
pub fn clear_all() {
    REGISTRY.with_borrow_mut(PoolRegistry::clear_all);
}

/// Calls `f` with the registry of the current thread.
///
/// # Panics
///
/// Panics if called while the registry of the current thread is already being accessed.
pub fn with_registry<R>(f: impl FnOnce(&mut PoolRegistry) -> R) -> R {
    REGISTRY.with_borrow_mut(f)
}
