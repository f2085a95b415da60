use crate::{DuplicateCheck, LifecycleHooks, Pool, PoolHandle, Result};

/// The typed capabilities of an object pool.
///
/// Code that only needs to borrow and return objects can depend on this trait instead of a
/// concrete pool type. [`Pool`] is the implementation provided by this crate.
///
/// # Example
///
/// ```rust
/// use recycle_pool::{ObjectPool, Pool};
///
/// fn render_frame(scratch: &mut impl ObjectPool<Item = Vec<f32>>) -> f32 {
///     let mut vertices = scratch.acquire_handle();
///     vertices.extend([1.0, 2.0, 3.0]);
///     vertices.iter().sum()
/// }
///
/// let mut pool = Pool::builder(Vec::<f32>::new)
///     .on_released(Vec::clear)
///     .build();
///
/// assert!((render_frame(&mut pool) - 6.0).abs() < f32::EPSILON);
/// assert!((render_frame(&mut pool) - 6.0).abs() < f32::EPSILON);
/// assert_eq!(pool.total_created(), 1);
/// ```
pub trait ObjectPool {
    /// The type of the pooled objects.
    type Item;

    /// Takes an object from the pool, constructing a new one if none is free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`][crate::Error::Construction] if construction fails.
    fn try_acquire(&mut self) -> Result<Self::Item>;

    /// Takes an object from the pool, constructing a new one if none is free.
    ///
    /// # Panics
    ///
    /// Panics if construction fails.
    fn acquire(&mut self) -> Self::Item;

    /// Returns an object to the pool using the default duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRelease`][crate::Error::DuplicateRelease] if the object is
    /// already free and duplicate checking is enabled.
    fn release(&mut self, item: Self::Item) -> Result<()>;

    /// Returns an object to the pool with an explicit duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRelease`][crate::Error::DuplicateRelease] if the object is
    /// already free and `check` is enabled.
    fn release_with(&mut self, item: Self::Item, check: DuplicateCheck) -> Result<()>;

    /// The number of free objects held by the pool.
    fn inactive_count(&self) -> usize;

    /// The number of objects created by the pool that are not currently free.
    fn active_count(&self) -> usize;

    /// The number of objects created by the pool since creation or the last clear.
    fn total_created(&self) -> usize;

    /// Destroys all free objects and resets the created counter.
    fn clear(&mut self);

    /// The lifecycle hooks that observe this pool.
    fn hooks_mut(&mut self) -> &mut LifecycleHooks<Self::Item>;

    /// Takes an object wrapped in a handle that returns it to this pool when dropped.
    ///
    /// # Panics
    ///
    /// Panics if construction fails.
    fn acquire_handle(&mut self) -> PoolHandle<'_, Self>
    where
        Self: Sized,
    {
        let item = self.acquire();
        PoolHandle::new(self, item)
    }

    /// Takes an object wrapped in a handle that returns it to this pool when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`][crate::Error::Construction] if construction fails.
    fn try_acquire_handle(&mut self) -> Result<PoolHandle<'_, Self>>
    where
        Self: Sized,
    {
        let item = self.try_acquire()?;
        Ok(PoolHandle::new(self, item))
    }
}

impl<T> ObjectPool for Pool<T> {
    type Item = T;

    fn try_acquire(&mut self) -> Result<T> {
        Self::try_acquire(self)
    }

    fn acquire(&mut self) -> T {
        Self::acquire(self)
    }

    fn release(&mut self, item: T) -> Result<()> {
        Self::release(self, item)
    }

    fn release_with(&mut self, item: T, check: DuplicateCheck) -> Result<()> {
        Self::release_with(self, item, check)
    }

    fn inactive_count(&self) -> usize {
        Self::inactive_count(self)
    }

    fn active_count(&self) -> usize {
        Self::active_count(self)
    }

    fn total_created(&self) -> usize {
        Self::total_created(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn hooks_mut(&mut self) -> &mut LifecycleHooks<T> {
        Self::hooks_mut(self)
    }

    fn acquire_handle(&mut self) -> PoolHandle<'_, Self> {
        Self::acquire_handle(self)
    }

    fn try_acquire_handle(&mut self) -> Result<PoolHandle<'_, Self>> {
        Self::try_acquire_handle(self)
    }
}
