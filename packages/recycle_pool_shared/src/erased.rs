use std::any::{Any, type_name};

use recycle_pool::{DuplicateCheck, Error, Pool, Result};

/// The untyped capabilities of a pool, for storing pools of different item types together.
///
/// This exists for [`PoolRegistry`][crate::PoolRegistry], which keeps one pool per item type in
/// a single map. Code that knows the item type should use [`Pool`] or
/// [`ObjectPool`][recycle_pool::ObjectPool] directly.
pub trait ErasedPool: Any {
    /// The name of the pooled item type, for diagnostics.
    fn item_type_name(&self) -> &'static str;

    /// The number of free objects held by the pool.
    fn inactive_count(&self) -> usize;

    /// Destroys all free objects and resets the created counter.
    fn clear(&mut self);

    /// Takes an object from the pool as a boxed [`Any`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the factory fails.
    fn acquire_erased(&mut self) -> Result<Box<dyn Any>>;

    /// Returns a boxed object to the pool with the default duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if the object is not of the pooled item type and
    /// [`Error::DuplicateRelease`] if it is already free.
    fn release_erased(&mut self, item: Box<dyn Any>) -> Result<()>;

    /// Returns a boxed object to the pool with an explicit duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if the object is not of the pooled item type and
    /// [`Error::DuplicateRelease`] if `check` is enabled and it is already free.
    fn release_erased_with(&mut self, item: Box<dyn Any>, check: DuplicateCheck) -> Result<()>;

    /// Upcasts to [`Any`] for downcasting to the concrete pool type.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to [`Any`] for downcasting to the concrete pool type.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Upcasts to [`Any`] for taking back ownership of the concrete pool.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> ErasedPool for Pool<T>
where
    T: 'static,
{
    fn item_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn inactive_count(&self) -> usize {
        Self::inactive_count(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn acquire_erased(&mut self) -> Result<Box<dyn Any>> {
        let item = self.try_acquire()?;
        Ok(Box::new(item))
    }

    fn release_erased(&mut self, item: Box<dyn Any>) -> Result<()> {
        let check = self.duplicate_check();
        self.release_erased_with(item, check)
    }

    fn release_erased_with(&mut self, item: Box<dyn Any>, check: DuplicateCheck) -> Result<()> {
        let item = item
            .downcast::<T>()
            .map_err(|_rejected| Error::PreconditionViolation {
                problem: format!(
                    "released object is not a {} and cannot belong to this pool",
                    type_name::<T>()
                ),
            })?;

        self.release_with(*item, check)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
