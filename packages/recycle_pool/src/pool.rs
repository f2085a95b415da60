use std::any::type_name;
use std::fmt;
use std::num::NonZero;

use tracing::{debug, trace};

use crate::builder::IdentityFn;
use crate::factory::Factory;
use crate::{DuplicateCheck, Error, LifecycleHooks, PoolBuilder, PoolHandle, Result};

/// A bounded pool of reusable objects.
///
/// The pool hands out previously released objects before constructing new ones, which makes it
/// useful for objects that are expensive to allocate or initialize, such as scratch buffers
/// recycled once per frame or per request.
///
/// * [`acquire()`][1] returns the most recently released free object or, if there is none,
///   constructs a new one via the factory supplied at creation time.
/// * [`release()`][2] takes the object back. If the free list already holds
///   [`max_size()`][3] objects, the released object is destroyed instead.
/// * [`acquire_handle()`][4] wraps the object in a [`PoolHandle`] that releases it when the
///   handle goes out of scope.
///
/// Releasing consumes the object, so the caller cannot keep using it afterwards.
///
/// # Thread safety
///
/// The pool is single-threaded: it is neither [`Send`] nor [`Sync`] and performs no locking.
/// Wrap it in your own synchronization or keep one pool per thread.
///
/// # Lifecycle hooks
///
/// The pool invokes the [`LifecycleHooks`] configured through the builder at each lifecycle
/// point. Hooks must not call back into the same pool.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
///
/// let mut pool = Pool::builder(|| Vec::<u8>::with_capacity(1024))
///     .on_released(Vec::clear)
///     .build();
///
/// let mut buffer = pool.acquire();
/// buffer.extend_from_slice(b"hello");
/// pool.release(buffer).unwrap();
///
/// // The same allocation is handed out again, already cleared.
/// let buffer = pool.acquire();
/// assert!(buffer.is_empty());
/// assert!(buffer.capacity() >= 1024);
/// assert_eq!(pool.total_created(), 1);
/// ```
///
/// [1]: Self::acquire
/// [2]: Self::release
/// [3]: Self::max_size
/// [4]: Self::acquire_handle
pub struct Pool<T> {
    /// Free objects, most recently released last.
    free: Vec<T>,

    /// Objects constructed by this pool since creation or the last `clear()`.
    total_created: usize,

    max_size: NonZero<usize>,
    duplicate_check: DuplicateCheck,
    identity: Option<IdentityFn<T>>,
    factory: Factory<T>,
    hooks: LifecycleHooks<T>,
}

impl<T> Pool<T> {
    pub(crate) fn new_inner(
        factory: Factory<T>,
        max_size: NonZero<usize>,
        capacity: usize,
        duplicate_check: DuplicateCheck,
        identity: Option<IdentityFn<T>>,
        hooks: LifecycleHooks<T>,
    ) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            total_created: 0,
            max_size,
            duplicate_check,
            identity,
            factory,
            hooks,
        }
    }

    /// Creates a new [`Pool`] with the default configuration, constructing new objects with
    /// `factory`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool = Pool::new(String::new);
    /// let text = pool.acquire();
    /// assert!(text.is_empty());
    /// ```
    #[must_use]
    pub fn new(factory: impl FnMut() -> T + 'static) -> Self {
        Self::builder(factory).build()
    }

    /// Returns a builder for a pool that constructs new objects with `factory`.
    pub fn builder(factory: impl FnMut() -> T + 'static) -> PoolBuilder<T> {
        PoolBuilder::new(Factory::infallible(factory))
    }

    /// Returns a builder for a pool whose factory may fail.
    ///
    /// Use [`try_acquire()`][Self::try_acquire] with such a pool to receive factory errors as
    /// [`Error::Construction`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::io;
    ///
    /// use recycle_pool::{Error, Pool};
    ///
    /// let mut pool = Pool::<Vec<u8>>::try_builder(|| Err(io::Error::other("no memory"))).build();
    ///
    /// assert!(matches!(pool.try_acquire(), Err(Error::Construction { .. })));
    /// assert_eq!(pool.total_created(), 0);
    /// ```
    pub fn try_builder<E>(
        factory: impl FnMut() -> std::result::Result<T, E> + 'static,
    ) -> PoolBuilder<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PoolBuilder::new(Factory::fallible(factory))
    }

    /// Takes an object from the pool, constructing a new one if the free list is empty.
    ///
    /// Reuse is last-in-first-out: the most recently released object is returned first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the factory fails. No counters are changed in that
    /// case.
    pub fn try_acquire(&mut self) -> Result<T> {
        let mut item = match self.free.pop() {
            Some(item) => item,
            None => self.create()?,
        };

        self.hooks.acquired(&mut item);
        Ok(item)
    }

    /// Takes an object from the pool, constructing a new one if the free list is empty.
    ///
    /// # Panics
    ///
    /// Panics if the pool was created with a fallible factory via
    /// [`try_builder()`][Self::try_builder] and that factory fails. Use
    /// [`try_acquire()`][Self::try_acquire] for such pools.
    #[must_use]
    pub fn acquire(&mut self) -> T {
        match self.try_acquire() {
            Ok(item) => item,
            Err(error) => panic!("pool factory failed to construct an object: {error}"),
        }
    }

    /// Takes an object from the pool and wraps it in a handle that releases it back to this
    /// pool when dropped.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`acquire()`][Self::acquire].
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool = Pool::new(Vec::<u32>::new);
    ///
    /// {
    ///     let mut numbers = pool.acquire_handle();
    ///     numbers.push(42);
    /// }
    ///
    /// assert_eq!(pool.inactive_count(), 1);
    /// ```
    #[must_use]
    pub fn acquire_handle(&mut self) -> PoolHandle<'_, Self> {
        let item = self.acquire();
        PoolHandle::new(self, item)
    }

    /// Takes an object from the pool and wraps it in a releasing handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if the factory fails.
    pub fn try_acquire_handle(&mut self) -> Result<PoolHandle<'_, Self>> {
        let item = self.try_acquire()?;
        Ok(PoolHandle::new(self, item))
    }

    /// Returns an object to the pool using the pool's default duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRelease`] if duplicate checking is enabled and the object is
    /// already in the free list. The pool is unchanged and no hooks are invoked in that case.
    pub fn release(&mut self, item: T) -> Result<()> {
        self.release_with(item, self.duplicate_check)
    }

    /// Returns an object to the pool, overriding the duplicate check policy for this call.
    ///
    /// The release hook is invoked first. The object is then stored in the free list, unless
    /// the free list is full, in which case the destroy hook is invoked instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRelease`] if `check` is enabled and the object is already in
    /// the free list. The pool is unchanged and no hooks are invoked in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{DuplicateCheck, Pool};
    ///
    /// let mut pool = Pool::new(|| 0_u64);
    ///
    /// let item = pool.acquire();
    /// pool.release_with(item, DuplicateCheck::Disabled).unwrap();
    /// assert_eq!(pool.inactive_count(), 1);
    /// ```
    pub fn release_with(&mut self, item: T, check: DuplicateCheck) -> Result<()> {
        if check.is_enabled() && self.is_free(&item) {
            return Err(Error::DuplicateRelease);
        }

        self.store(item);
        Ok(())
    }

    /// Pre-warms the pool so that the free list holds at least `count` objects.
    ///
    /// Missing objects are constructed via the factory and released into the pool, so both the
    /// create and release hooks fire for each of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacityRequest`] if `count` is zero or exceeds
    /// [`max_size()`][Self::max_size]; the pool is unchanged in that case.
    ///
    /// Returns [`Error::Construction`] if the factory fails. Objects constructed before the
    /// failure remain in the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::Pool;
    ///
    /// let mut pool = Pool::new(|| [0_u8; 256]);
    /// pool.ensure_count(5).unwrap();
    ///
    /// assert_eq!(pool.inactive_count(), 5);
    /// assert_eq!(pool.total_created(), 5);
    /// ```
    pub fn ensure_count(&mut self, count: usize) -> Result<&mut Self> {
        if count == 0 || count > self.max_size.get() {
            return Err(Error::InvalidCapacityRequest {
                requested: count,
                max_size: self.max_size.get(),
            });
        }

        let missing = count.saturating_sub(self.free.len());
        debug!(
            item_type = type_name::<T>(),
            count, missing, "pre-warming pool"
        );

        while self.free.len() < count {
            let item = self.create()?;
            self.store(item);
        }

        Ok(self)
    }

    /// Destroys every free object and resets the created counter to zero.
    ///
    /// Objects that are currently acquired are not tracked by the pool and are not affected.
    /// They may still be released back into the pool afterwards.
    pub fn clear(&mut self) {
        let destroyed = self.free.len();

        for item in self.free.drain(..) {
            self.hooks.destroyed(item);
        }

        self.total_created = 0;

        debug!(item_type = type_name::<T>(), destroyed, "pool cleared");
    }

    /// The maximum number of free objects the pool retains.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size.get()
    }

    /// Changes the maximum number of free objects the pool retains.
    ///
    /// Shrinking does not destroy free objects immediately. Any excess is destroyed by the next
    /// [`release()`][Self::release], before the released object is stored. The least recently
    /// released objects are destroyed first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacityRequest`] if `max_size` is zero.
    pub fn set_max_size(&mut self, max_size: usize) -> Result<()> {
        let new_max_size = NonZero::new(max_size).ok_or(Error::InvalidCapacityRequest {
            requested: max_size,
            max_size: self.max_size.get(),
        })?;

        debug!(
            item_type = type_name::<T>(),
            old = self.max_size.get(),
            new = max_size,
            "pool max size changed"
        );

        self.max_size = new_max_size;
        Ok(())
    }

    /// The default duplicate check policy applied by [`release()`][Self::release].
    #[must_use]
    pub fn duplicate_check(&self) -> DuplicateCheck {
        self.duplicate_check
    }

    /// Changes the default duplicate check policy.
    pub fn set_duplicate_check(&mut self, policy: DuplicateCheck) {
        self.duplicate_check = policy;
    }

    /// The number of free objects currently held by the pool.
    #[must_use]
    pub fn inactive_count(&self) -> usize {
        self.free.len()
    }

    /// The number of objects constructed by the pool that are not currently free.
    ///
    /// This counts objects destroyed on release as well, since the pool does not track them
    /// individually.
    #[must_use]
    pub fn active_count(&self) -> usize {
        // Objects acquired before `clear()` may be released afterwards.
        self.total_created.saturating_sub(self.free.len())
    }

    /// The number of objects constructed by the pool since creation or the last
    /// [`clear()`][Self::clear].
    #[must_use]
    pub fn total_created(&self) -> usize {
        self.total_created
    }

    /// Whether the factory of this pool may fail.
    #[must_use]
    pub fn has_fallible_factory(&self) -> bool {
        self.factory.is_fallible()
    }

    /// Provides access to the lifecycle hooks, e.g. to register a callback after creation.
    pub fn hooks_mut(&mut self) -> &mut LifecycleHooks<T> {
        &mut self.hooks
    }

    fn create(&mut self) -> Result<T> {
        let mut item = self.factory.construct()?;
        self.total_created = self.total_created.wrapping_add(1);

        trace!(
            item_type = type_name::<T>(),
            total_created = self.total_created,
            "constructed new pooled object"
        );

        self.hooks.created(&mut item);
        Ok(item)
    }

    fn is_free(&self, item: &T) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|same| self.free.iter().any(|free| same(free, item)))
    }

    fn store(&mut self, mut item: T) {
        self.hooks.released(&mut item);

        let max_size = self.max_size.get();

        // The max size may have shrunk since the free list was filled.
        if self.free.len() > max_size {
            let excess = self.free.len().saturating_sub(max_size);
            trace!(
                item_type = type_name::<T>(),
                excess, "evicting excess free objects"
            );

            // Oldest first, so the most recently released objects stay in the pool.
            for evicted in self.free.drain(..excess) {
                self.hooks.destroyed(evicted);
            }
        }

        if self.free.len() < max_size {
            self.free.push(item);
        } else {
            trace!(
                item_type = type_name::<T>(),
                max_size, "free list full, destroying released object"
            );
            self.hooks.destroyed(item);
        }
    }

    #[cfg(test)]
    pub(crate) fn free_capacity(&self) -> usize {
        self.free.capacity()
    }
}

impl<T> Drop for Pool<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("inactive_count", &self.free.len())
            .field("total_created", &self.total_created)
            .field("max_size", &self.max_size)
            .field("duplicate_check", &self.duplicate_check)
            .field("identity", &self.identity.is_some())
            .field("fallible_factory", &self.factory.is_fallible())
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::rc::Rc;

    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(Pool<u32>: Send, Sync);

    fn counting_pool() -> (Pool<Rc<Cell<u32>>>, Rc<RefCell<Vec<&'static str>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));

        let created = Rc::clone(&events);
        let acquired = Rc::clone(&events);
        let released = Rc::clone(&events);
        let destroyed = Rc::clone(&events);

        let pool = Pool::builder(|| Rc::new(Cell::new(0)))
            .identity(Rc::ptr_eq)
            .max_size(NonZero::new(2).unwrap())
            .on_created(move |_| created.borrow_mut().push("created"))
            .on_acquired(move |_| acquired.borrow_mut().push("acquired"))
            .on_released(move |_| released.borrow_mut().push("released"))
            .on_destroyed(move |_| destroyed.borrow_mut().push("destroyed"))
            .build();

        (pool, events)
    }

    #[test]
    fn acquire_from_empty_pool_constructs() {
        let (mut pool, events) = counting_pool();

        let _item = pool.acquire();

        assert_eq!(*events.borrow(), vec!["created", "acquired"]);
        assert_eq!(pool.total_created(), 1);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(pool.inactive_count(), 0);
    }

    #[test]
    fn reuse_is_last_in_first_out() {
        let mut pool = Pool::builder(|| Rc::new(Cell::new(0))).build();

        let first = pool.acquire();
        let second = pool.acquire();
        first.set(1);
        second.set(2);

        pool.release(first).unwrap();
        pool.release(second).unwrap();

        assert_eq!(pool.acquire().get(), 2);
        assert_eq!(pool.acquire().get(), 1);
        assert_eq!(pool.total_created(), 2);
    }

    #[test]
    fn reused_object_fires_only_acquire_hook() {
        let (mut pool, events) = counting_pool();

        let item = pool.acquire();
        pool.release(item).unwrap();
        events.borrow_mut().clear();

        let _item = pool.acquire();

        assert_eq!(*events.borrow(), vec!["acquired"]);
        assert_eq!(pool.total_created(), 1);
    }

    #[test]
    fn release_beyond_max_size_destroys() {
        let (mut pool, events) = counting_pool();

        let items = [pool.acquire(), pool.acquire(), pool.acquire()];
        events.borrow_mut().clear();

        for item in items {
            pool.release(item).unwrap();
        }

        assert_eq!(pool.inactive_count(), 2);
        assert_eq!(
            *events.borrow(),
            vec!["released", "released", "released", "destroyed"]
        );
    }

    #[test]
    fn duplicate_release_is_rejected_without_side_effects() {
        let (mut pool, events) = counting_pool();

        let item = pool.acquire();
        let alias = Rc::clone(&item);
        pool.release(item).unwrap();
        events.borrow_mut().clear();

        let result = pool.release(alias);

        assert!(matches!(result, Err(Error::DuplicateRelease)));
        assert_eq!(pool.inactive_count(), 1);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn default_identity_does_not_detect_shared_aliases() {
        let mut pool = Pool::new(|| Rc::new(Cell::new(0)));
        assert_eq!(pool.duplicate_check(), DuplicateCheck::Enabled);

        let item = pool.acquire();
        let alias = Rc::clone(&item);
        pool.release(item).unwrap();

        // Without an identity predicate the alias is stored a second time.
        pool.release(alias).unwrap();

        let first = pool.acquire();
        let second = pool.acquire();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(pool.total_created(), 1);
    }

    #[test]
    fn duplicate_check_can_be_disabled_per_call() {
        let (mut pool, _events) = counting_pool();

        let item = pool.acquire();
        let alias = Rc::clone(&item);
        pool.release(item).unwrap();

        pool.release_with(alias, DuplicateCheck::Disabled).unwrap();

        assert_eq!(pool.inactive_count(), 2);
    }

    #[test]
    fn duplicate_check_default_can_be_changed() {
        let (mut pool, _events) = counting_pool();
        pool.set_duplicate_check(DuplicateCheck::Disabled);

        let item = pool.acquire();
        let alias = Rc::clone(&item);
        pool.release(item).unwrap();

        assert!(pool.release(alias).is_ok());
    }

    #[test]
    fn failed_construction_leaves_counters_untouched() {
        let fail = Rc::new(Cell::new(true));
        let fail_clone = Rc::clone(&fail);

        let mut pool = Pool::try_builder(move || {
            if fail_clone.get() {
                Err(io::Error::other("not yet"))
            } else {
                Ok(1_u32)
            }
        })
        .build();

        assert!(pool.has_fallible_factory());
        assert!(matches!(
            pool.try_acquire(),
            Err(Error::Construction { .. })
        ));
        assert_eq!(pool.total_created(), 0);

        fail.set(false);
        assert_eq!(pool.try_acquire().unwrap(), 1);
        assert_eq!(pool.total_created(), 1);
    }

    #[test]
    #[should_panic(expected = "pool factory failed")]
    fn acquire_panics_on_factory_failure() {
        let mut pool = Pool::<u32>::try_builder(|| Err(io::Error::other("broken"))).build();
        _ = pool.acquire();
    }

    #[test]
    fn ensure_count_prewarms() {
        let mut pool = Pool::builder(|| 0_u32)
            .max_size(NonZero::new(10).unwrap())
            .build();

        pool.ensure_count(5).unwrap();
        assert_eq!(pool.inactive_count(), 5);
        assert_eq!(pool.total_created(), 5);

        pool.ensure_count(3).unwrap();
        assert_eq!(pool.inactive_count(), 5);
        assert_eq!(pool.total_created(), 5);
    }

    #[test]
    fn ensure_count_is_chainable() {
        let mut pool = Pool::new(|| 0_u32);

        let item = pool.ensure_count(2).unwrap().acquire();

        assert_eq!(item, 0);
        assert_eq!(pool.inactive_count(), 1);
    }

    #[test]
    fn ensure_count_rejects_invalid_counts() {
        let mut pool = Pool::builder(|| 0_u32)
            .max_size(NonZero::new(10).unwrap())
            .build();

        assert!(matches!(
            pool.ensure_count(0),
            Err(Error::InvalidCapacityRequest {
                requested: 0,
                max_size: 10
            })
        ));
        assert!(matches!(
            pool.ensure_count(11),
            Err(Error::InvalidCapacityRequest {
                requested: 11,
                max_size: 10
            })
        ));
        assert_eq!(pool.total_created(), 0);
    }

    #[test]
    fn ensure_count_keeps_objects_built_before_a_failure() {
        let mut calls = 0;
        let mut pool = Pool::try_builder(move || {
            calls += 1;
            if calls == 3 {
                Err(io::Error::other("out of slots"))
            } else {
                Ok(calls)
            }
        })
        .build();

        assert!(matches!(
            pool.ensure_count(5),
            Err(Error::Construction { .. })
        ));
        assert_eq!(pool.inactive_count(), 2);
        assert_eq!(pool.total_created(), 2);
        assert_eq!(pool.active_count(), 0);

        // The factory recovers, so a retry only builds what is still missing.
        pool.ensure_count(5).unwrap();
        assert_eq!(pool.inactive_count(), 5);
        assert_eq!(pool.total_created(), 5);
    }

    #[test]
    fn ensure_count_fires_create_and_release_hooks() {
        let (mut pool, events) = counting_pool();

        pool.ensure_count(1).unwrap();

        assert_eq!(*events.borrow(), vec!["created", "released"]);
    }

    #[test]
    fn clear_destroys_free_objects_only() {
        let destroyed = Rc::new(Cell::new(0));
        let destroyed_clone = Rc::clone(&destroyed);

        let mut pool = Pool::builder(|| 0_u32)
            .on_destroyed(move |_| destroyed_clone.set(destroyed_clone.get() + 1))
            .build();

        let outstanding = pool.acquire();
        pool.ensure_count(4).unwrap();

        pool.clear();

        assert_eq!(destroyed.get(), 4);
        assert_eq!(pool.inactive_count(), 0);
        assert_eq!(pool.total_created(), 0);
        assert_eq!(outstanding, 0);

        // Returning an object acquired before the clear does not underflow the counters.
        pool.release(outstanding).unwrap();
        assert_eq!(pool.inactive_count(), 1);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn set_max_size_rejects_zero() {
        let mut pool = Pool::new(|| 0_u32);

        assert!(matches!(
            pool.set_max_size(0),
            Err(Error::InvalidCapacityRequest { requested: 0, .. })
        ));
        assert_eq!(pool.max_size(), crate::DEFAULT_MAX_SIZE.get());
    }

    #[test]
    fn shrinking_max_size_evicts_lazily() {
        let destroyed = Rc::new(Cell::new(0));
        let destroyed_clone = Rc::clone(&destroyed);

        let mut pool = Pool::builder(|| 0_u32)
            .max_size(NonZero::new(5).unwrap())
            .on_destroyed(move |_| destroyed_clone.set(destroyed_clone.get() + 1))
            .build();

        pool.ensure_count(5).unwrap();
        pool.set_max_size(2).unwrap();

        // Nothing is evicted until the next release.
        assert_eq!(pool.inactive_count(), 5);
        assert_eq!(destroyed.get(), 0);

        let item = pool.acquire();
        assert_eq!(pool.inactive_count(), 4);

        pool.release(item).unwrap();

        // Excess down to the new bound is destroyed, then the full list destroys the release.
        assert_eq!(pool.inactive_count(), 2);
        assert_eq!(destroyed.get(), 3);
    }

    #[test]
    fn eviction_keeps_most_recently_released_objects() {
        let mut next = 0_u32;
        let mut pool = Pool::builder(move || {
            next += 1;
            next
        })
        .max_size(NonZero::new(5).unwrap())
        .build();

        // Free list holds 1..=5, with 5 released most recently.
        pool.ensure_count(5).unwrap();
        pool.set_max_size(2).unwrap();

        let item = pool.acquire();
        assert_eq!(item, 5);
        pool.release(item).unwrap();

        assert_eq!(pool.inactive_count(), 2);
        assert_eq!(pool.acquire(), 4);
        assert_eq!(pool.acquire(), 3);
    }

    #[test]
    fn drop_destroys_free_objects() {
        let destroyed = Rc::new(Cell::new(0));
        let destroyed_clone = Rc::clone(&destroyed);

        let mut pool = Pool::builder(|| 0_u32)
            .on_destroyed(move |_| destroyed_clone.set(destroyed_clone.get() + 1))
            .build();
        pool.ensure_count(3).unwrap();

        drop(pool);

        assert_eq!(destroyed.get(), 3);
    }

    #[test]
    fn hooks_can_be_registered_after_creation() {
        let acquired = Rc::new(Cell::new(0));
        let acquired_clone = Rc::clone(&acquired);

        let mut pool = Pool::new(|| 0_u32);
        pool.hooks_mut()
            .set_on_acquired(move |_| acquired_clone.set(acquired_clone.get() + 1));

        _ = pool.acquire();
        _ = pool.acquire();

        assert_eq!(acquired.get(), 2);
    }

    #[test]
    fn debug_output_names_item_type() {
        let pool = Pool::new(|| 0_u32);

        let output = format!("{pool:?}");

        assert!(output.contains("u32"));
        assert!(output.contains("total_created"));
    }
}
