use std::any::type_name;
use std::fmt;
use std::num::NonZero;
use std::ops::Deref;

use tracing::debug;

use crate::factory::Factory;
use crate::{DEFAULT_CAPACITY, DEFAULT_MAX_SIZE, DuplicateCheck, LifecycleHooks, Pool};

pub(crate) type IdentityFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Builder for creating an instance of [`Pool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`Pool::new()`][1] retains up to
/// [`DEFAULT_MAX_SIZE`] free objects and checks for duplicate releases.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use recycle_pool::{DuplicateCheck, Pool};
///
/// let pool = Pool::builder(String::new)
///     .max_size(NonZero::new(64).unwrap())
///     .capacity(8)
///     .duplicate_check(DuplicateCheck::Disabled)
///     .on_released(String::clear)
///     .build();
///
/// assert_eq!(pool.max_size(), 64);
/// ```
///
/// [1]: Pool::new
#[must_use]
pub struct PoolBuilder<T> {
    factory: Factory<T>,
    max_size: NonZero<usize>,
    capacity: usize,
    duplicate_check: DuplicateCheck,
    identity: Option<IdentityFn<T>>,
    hooks: LifecycleHooks<T>,
}

impl<T> fmt::Debug for PoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("max_size", &self.max_size)
            .field("capacity", &self.capacity)
            .field("duplicate_check", &self.duplicate_check)
            .field("identity", &self.identity.is_some())
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl<T> PoolBuilder<T> {
    pub(crate) fn new(factory: Factory<T>) -> Self {
        Self {
            factory,
            max_size: DEFAULT_MAX_SIZE,
            capacity: DEFAULT_CAPACITY,
            duplicate_check: DuplicateCheck::default(),
            identity: None,
            hooks: LifecycleHooks::new(),
        }
    }

    /// Sets the maximum number of free objects the pool retains. Objects released while the
    /// free list is full are destroyed instead of being stored.
    pub fn max_size(mut self, max_size: NonZero<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the initial capacity of the free list. This is an allocation hint only.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the duplicate check policy used by [`Pool::release()`].
    pub fn duplicate_check(mut self, policy: DuplicateCheck) -> Self {
        self.duplicate_check = policy;
        self
    }

    /// Sets the predicate that decides whether two objects are the same object.
    ///
    /// Duplicate checking compares the released object against every free object using this
    /// predicate. For shared handle types this is typically pointer identity, e.g.
    /// [`Rc::ptr_eq`][std::rc::Rc::ptr_eq] or [`identity_by_ptr()`][Self::identity_by_ptr].
    /// Without a predicate, duplicate checking never reports a duplicate. That is correct for
    /// uniquely owned objects because ownership already prevents releasing the same object
    /// twice, but a pool of shared handles needs a predicate to catch double releases.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use recycle_pool::{Error, Pool};
    ///
    /// let mut pool = Pool::builder(|| Rc::new(RefCell::new(Vec::<u8>::new())))
    ///     .identity(Rc::ptr_eq)
    ///     .build();
    ///
    /// let buffer = pool.acquire();
    /// let alias = Rc::clone(&buffer);
    ///
    /// pool.release(buffer).unwrap();
    /// assert!(matches!(pool.release(alias), Err(Error::DuplicateRelease)));
    /// ```
    pub fn identity(mut self, same: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.identity = Some(Box::new(same));
        self
    }

    /// Uses `PartialEq` as the identity predicate for duplicate checking.
    ///
    /// Only use this if equal values genuinely denote the same object, for example
    /// when objects carry a unique identifier.
    pub fn identity_by_eq(self) -> Self
    where
        T: PartialEq,
    {
        self.identity(|a: &T, b: &T| a == b)
    }

    /// Uses pointer identity of the pointee as the identity predicate for duplicate checking.
    ///
    /// This is the predicate to use for pools of shared handles such as [`Rc`][std::rc::Rc] or
    /// [`Arc`][std::sync::Arc], where a caller can keep a clone of a handle after releasing it.
    /// Two handles are the same object if they point to the same allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use recycle_pool::{Error, Pool};
    ///
    /// let mut pool = Pool::builder(|| Rc::new(Cell::new(0_u32)))
    ///     .identity_by_ptr()
    ///     .build();
    ///
    /// let counter = pool.acquire();
    /// let alias = Rc::clone(&counter);
    ///
    /// pool.release(counter).unwrap();
    /// assert!(matches!(pool.release(alias), Err(Error::DuplicateRelease)));
    /// ```
    pub fn identity_by_ptr(self) -> Self
    where
        T: Deref,
    {
        self.identity(|a: &T, b: &T| std::ptr::eq(&**a, &**b))
    }

    /// Replaces all lifecycle hooks at once.
    pub fn hooks(mut self, hooks: LifecycleHooks<T>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the callback invoked after the factory constructs a new object.
    pub fn on_created(mut self, f: impl FnMut(&mut T) + 'static) -> Self {
        self.hooks.set_on_created(f);
        self
    }

    /// Sets the callback invoked every time an object is handed out.
    pub fn on_acquired(mut self, f: impl FnMut(&mut T) + 'static) -> Self {
        self.hooks.set_on_acquired(f);
        self
    }

    /// Sets the callback invoked every time an object is returned to the pool.
    pub fn on_released(mut self, f: impl FnMut(&mut T) + 'static) -> Self {
        self.hooks.set_on_released(f);
        self
    }

    /// Sets the callback invoked when the pool discards an object.
    pub fn on_destroyed(mut self, f: impl FnMut(T) + 'static) -> Self {
        self.hooks.set_on_destroyed(f);
        self
    }

    /// Builds the pool with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::Pool;
    ///
    /// let pool = Pool::builder(|| vec![0_u8; 4096]).build();
    /// assert_eq!(pool.inactive_count(), 0);
    /// ```
    #[must_use]
    pub fn build(self) -> Pool<T> {
        let capacity = self.capacity.min(self.max_size.get());

        if self.duplicate_check.is_enabled() && self.identity.is_none() {
            debug!(
                item_type = type_name::<T>(),
                "duplicate checking is enabled without an identity predicate and will not detect \
                 released aliases of shared handles"
            );
        }

        Pool::new_inner(
            self.factory,
            self.max_size,
            capacity,
            self.duplicate_check,
            self.identity,
            self.hooks,
        )
    }
}
