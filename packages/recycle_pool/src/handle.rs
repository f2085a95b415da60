use std::any::type_name;
use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::warn;

use crate::{ObjectPool, Result};

/// An object borrowed from a pool that is returned to the pool when the handle is dropped.
///
/// Created by [`Pool::acquire_handle()`][crate::Pool::acquire_handle] or
/// [`ObjectPool::acquire_handle()`]. The handle borrows the pool exclusively for its lifetime
/// and dereferences to the pooled object.
///
/// The object is released exactly once: either explicitly via [`release()`][Self::release],
/// which reports errors to the caller, or implicitly on drop, which logs them. After release
/// the handle is empty and further releases are no-ops.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
///
/// let mut pool = Pool::new(String::new);
///
/// let mut text = pool.acquire_handle();
/// text.push_str("scratch");
/// text.release().unwrap();
///
/// // Releasing again does nothing.
/// text.release().unwrap();
/// drop(text);
///
/// assert_eq!(pool.inactive_count(), 1);
/// ```
pub struct PoolHandle<'p, P>
where
    P: ObjectPool,
{
    pool: &'p mut P,
    item: Option<P::Item>,
}

impl<'p, P> PoolHandle<'p, P>
where
    P: ObjectPool,
{
    pub(crate) fn new(pool: &'p mut P, item: P::Item) -> Self {
        Self {
            pool,
            item: Some(item),
        }
    }

    /// Returns the object to the pool, using the pool's default duplicate check policy.
    ///
    /// Calling this on an already released handle does nothing.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`ObjectPool::release()`]. The handle is empty afterwards
    /// even if the release failed.
    pub fn release(&mut self) -> Result<()> {
        match self.item.take() {
            Some(item) => self.pool.release(item),
            None => Ok(()),
        }
    }

    /// Whether the object has already been returned to the pool.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.item.is_none()
    }

    /// Returns the object, or `None` if the handle has already been released.
    #[must_use]
    pub fn get(&self) -> Option<&P::Item> {
        self.item.as_ref()
    }

    /// Returns the object mutably, or `None` if the handle has already been released.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut P::Item> {
        self.item.as_mut()
    }

    /// Detaches the object from the handle without returning it to the pool.
    ///
    /// The pool keeps counting the object as active.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool = Pool::new(Vec::<u8>::new);
    ///
    /// let buffer = pool.acquire_handle().detach().unwrap();
    /// assert_eq!(pool.active_count(), 1);
    /// # drop(buffer);
    /// ```
    #[must_use]
    pub fn detach(mut self) -> Option<P::Item> {
        self.item.take()
    }
}

impl<P> Deref for PoolHandle<'_, P>
where
    P: ObjectPool,
{
    type Target = P::Item;

    /// # Panics
    ///
    /// Panics if the handle has already been released.
    fn deref(&self) -> &Self::Target {
        self.item
            .as_ref()
            .expect("pooled object accessed after its handle was released")
    }
}

impl<P> DerefMut for PoolHandle<'_, P>
where
    P: ObjectPool,
{
    /// # Panics
    ///
    /// Panics if the handle has already been released.
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.item
            .as_mut()
            .expect("pooled object accessed after its handle was released")
    }
}

impl<P> Drop for PoolHandle<'_, P>
where
    P: ObjectPool,
{
    fn drop(&mut self) {
        if let Err(error) = self.release() {
            warn!(
                item_type = type_name::<P::Item>(),
                %error,
                "pooled object could not be released when its handle was dropped"
            );
        }
    }
}

impl<P> fmt::Debug for PoolHandle<'_, P>
where
    P: ObjectPool,
{
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("released", &self.item.is_none())
            .finish_non_exhaustive()
    }
}
