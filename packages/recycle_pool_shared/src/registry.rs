use std::any::{TypeId, type_name};
use std::fmt;

use hash_hasher::HashedMap;
use recycle_pool::Pool;
use tracing::debug;

use crate::{ErasedPool, Poolable};

// TypeId already returns a hashed value as its raw value, so it is used as the hash directly.
type PoolMap = HashedMap<TypeId, Box<dyn ErasedPool>>;

/// A collection of pools with at most one pool per item type.
///
/// Pools for [`Poolable`] types are created on first use. Pools for other types, or pools with
/// a non-default configuration, can be added with [`insert()`][Self::insert].
///
/// Most code uses the registry of the current thread via [`with_pool()`][crate::with_pool]
/// instead of creating its own registry.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
/// use recycle_pool_shared::PoolRegistry;
///
/// let mut registry = PoolRegistry::new();
///
/// let length = registry.with_pool(|pool: &mut Pool<String>| {
///     let mut text = pool.acquire_handle();
///     text.push_str("pooled");
///     text.len()
/// });
///
/// assert_eq!(length, 6);
/// assert_eq!(registry.inactive_count_of::<String>(), 1);
/// ```
#[derive(Default)]
pub struct PoolRegistry {
    pools: PoolMap,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `f` with the pool for `T`, creating the pool first if it does not exist yet.
    pub fn with_pool<T, R>(&mut self, f: impl FnOnce(&mut Pool<T>) -> R) -> R
    where
        T: Poolable,
    {
        f(self.pool_mut::<T>())
    }

    /// Returns the pool for `T`, creating it first if it does not exist yet.
    pub fn pool_mut<T>(&mut self) -> &mut Pool<T>
    where
        T: Poolable,
    {
        let erased = self.pools.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(item_type = type_name::<T>(), "creating registry pool");
            Box::new(T::build_pool())
        });

        erased
            .as_any_mut()
            .downcast_mut::<Pool<T>>()
            .expect("registry entries are always keyed by the TypeId of their item type")
    }

    /// Returns the pool for `T` if one has been created or inserted.
    #[must_use]
    pub fn get_mut<T>(&mut self) -> Option<&mut Pool<T>>
    where
        T: 'static,
    {
        self.pools
            .get_mut(&TypeId::of::<T>())
            .and_then(|erased| erased.as_any_mut().downcast_mut::<Pool<T>>())
    }

    /// Adds a pool for `T`, returning the pool it replaces, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use recycle_pool::Pool;
    /// use recycle_pool_shared::PoolRegistry;
    ///
    /// let mut registry = PoolRegistry::new();
    ///
    /// let small = Pool::builder(String::new)
    ///     .max_size(NonZero::new(4).unwrap())
    ///     .build();
    /// assert!(registry.insert(small).is_none());
    ///
    /// registry.with_pool(|pool: &mut Pool<String>| assert_eq!(pool.max_size(), 4));
    /// ```
    pub fn insert<T>(&mut self, pool: Pool<T>) -> Option<Pool<T>>
    where
        T: 'static,
    {
        let previous = self.pools.insert(TypeId::of::<T>(), Box::new(pool))?;

        previous
            .into_any()
            .downcast::<Pool<T>>()
            .ok()
            .map(|pool| *pool)
    }

    /// Removes the pool for `T`, returning it if it existed.
    pub fn remove<T>(&mut self) -> Option<Pool<T>>
    where
        T: 'static,
    {
        let erased = self.pools.remove(&TypeId::of::<T>())?;

        erased
            .into_any()
            .downcast::<Pool<T>>()
            .ok()
            .map(|pool| *pool)
    }

    /// Whether the registry holds a pool for `T`.
    #[must_use]
    pub fn contains<T>(&self) -> bool
    where
        T: 'static,
    {
        self.pools.contains_key(&TypeId::of::<T>())
    }

    /// The number of free objects in the pool for `T`, or zero if there is no such pool.
    #[must_use]
    pub fn inactive_count_of<T>(&self) -> usize
    where
        T: 'static,
    {
        self.pools
            .get(&TypeId::of::<T>())
            .map_or(0, |erased| erased.inactive_count())
    }

    /// The total number of free objects across all pools.
    #[must_use]
    pub fn total_inactive_count(&self) -> usize {
        self.pools
            .values()
            .map(|erased| erased.inactive_count())
            .sum()
    }

    /// Clears every pool in the registry. The pools themselves remain registered.
    pub fn clear_all(&mut self) {
        debug!(pools = self.pools.len(), "clearing all registry pools");

        for erased in self.pools.values_mut() {
            erased.clear();
        }
    }

    /// The number of pools in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether the registry holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut item_types: Vec<_> = self
            .pools
            .values()
            .map(|erased| erased.item_type_name())
            .collect();
        item_types.sort_unstable();

        f.debug_struct(type_name::<Self>())
            .field("item_types", &item_types)
            .finish()
    }
}
