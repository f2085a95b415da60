use recycle_pool::{DuplicateCheck, Pool};

/// Types that know how to configure their own pool.
///
/// [`PoolRegistry`][crate::PoolRegistry] calls [`build_pool()`][Self::build_pool] the first time
/// a pool for the type is requested. Implement this for your own types to make them available
/// through [`with_pool()`][crate::with_pool].
///
/// # Example
///
/// ```rust
/// use recycle_pool::Pool;
/// use recycle_pool_shared::{Poolable, with_pool};
///
/// struct Mesh {
///     vertices: Vec<[f32; 3]>,
/// }
///
/// impl Poolable for Mesh {
///     fn build_pool() -> Pool<Self> {
///         Pool::builder(|| Mesh {
///             vertices: Vec::with_capacity(1024),
///         })
///         .on_released(|mesh| mesh.vertices.clear())
///         .build()
///     }
/// }
///
/// let vertex_count = with_pool(|pool: &mut Pool<Mesh>| {
///     let mut mesh = pool.acquire_handle();
///     mesh.vertices.push([0.0, 1.0, 0.0]);
///     mesh.vertices.len()
/// });
///
/// assert_eq!(vertex_count, 1);
/// ```
pub trait Poolable: Sized + 'static {
    /// Creates the pool that the registry keeps for this type.
    fn build_pool() -> Pool<Self>;
}

/// Creates a pool of strings that are cleared when released.
///
/// Duplicate checking is disabled because strings are uniquely owned.
///
/// # Example
///
/// ```rust
/// use recycle_pool_shared::string_pool;
///
/// let mut pool = string_pool();
///
/// let mut text = pool.acquire();
/// text.push_str("temporary");
/// pool.release(text).unwrap();
///
/// assert!(pool.acquire().is_empty());
/// ```
#[must_use]
pub fn string_pool() -> Pool<String> {
    Pool::builder(String::new)
        .duplicate_check(DuplicateCheck::Disabled)
        .on_released(String::clear)
        .build()
}

/// Creates a pool of vectors that are cleared when released, keeping their allocation.
///
/// Duplicate checking is disabled because vectors are uniquely owned.
///
/// # Example
///
/// ```rust
/// use recycle_pool_shared::vec_pool;
///
/// let mut pool = vec_pool::<u64>();
///
/// let mut ids = pool.acquire();
/// ids.extend(0..100);
/// pool.release(ids).unwrap();
///
/// let ids = pool.acquire();
/// assert!(ids.is_empty());
/// assert!(ids.capacity() >= 100);
/// ```
#[must_use]
pub fn vec_pool<T>() -> Pool<Vec<T>>
where
    T: 'static,
{
    Pool::builder(Vec::<T>::new)
        .duplicate_check(DuplicateCheck::Disabled)
        .on_released(Vec::clear)
        .build()
}

impl Poolable for String {
    fn build_pool() -> Pool<Self> {
        string_pool()
    }
}

impl<T> Poolable for Vec<T>
where
    T: 'static,
{
    fn build_pool() -> Pool<Self> {
        vec_pool()
    }
}
