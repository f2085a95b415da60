use std::any::type_name;
use std::fmt;

type ObserveFn<T> = Box<dyn FnMut(&mut T)>;
type DestroyFn<T> = Box<dyn FnMut(T)>;

/// The lifecycle callbacks of a [`Pool`][crate::Pool].
///
/// Each lifecycle point has at most one callback. Callbacks are invoked synchronously, exactly
/// once per event, and must not call back into the pool that invoked them.
///
/// | Callback       | Invoked                                                              |
/// |----------------|----------------------------------------------------------------------|
/// | `on_created`   | after the factory constructs a new object                            |
/// | `on_acquired`  | before an object is handed to the caller, whether new or reused      |
/// | `on_released`  | when an object is returned, before it is stored or destroyed         |
/// | `on_destroyed` | when the pool discards an object; the object is dropped afterwards   |
///
/// # Examples
///
/// ```
/// use recycle_pool::{LifecycleHooks, Pool};
///
/// let mut hooks = LifecycleHooks::<Vec<u8>>::new();
/// hooks.set_on_released(Vec::clear);
///
/// let mut pool = Pool::builder(Vec::new).hooks(hooks).build();
///
/// let mut buffer = pool.acquire();
/// buffer.extend_from_slice(b"scratch");
/// pool.release(buffer).unwrap();
///
/// assert!(pool.acquire().is_empty());
/// ```
pub struct LifecycleHooks<T> {
    on_created: Option<ObserveFn<T>>,
    on_acquired: Option<ObserveFn<T>>,
    on_released: Option<ObserveFn<T>>,
    on_destroyed: Option<DestroyFn<T>>,
}

impl<T> LifecycleHooks<T> {
    /// Creates a set of hooks with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on_created: None,
            on_acquired: None,
            on_released: None,
            on_destroyed: None,
        }
    }

    /// Sets the callback invoked after the factory constructs a new object.
    pub fn set_on_created(&mut self, f: impl FnMut(&mut T) + 'static) {
        self.on_created = Some(Box::new(f));
    }

    /// Sets the callback invoked every time an object is handed out.
    pub fn set_on_acquired(&mut self, f: impl FnMut(&mut T) + 'static) {
        self.on_acquired = Some(Box::new(f));
    }

    /// Sets the callback invoked every time an object is returned to the pool.
    ///
    /// This is the natural place to reset the state of an object before it is reused.
    pub fn set_on_released(&mut self, f: impl FnMut(&mut T) + 'static) {
        self.on_released = Some(Box::new(f));
    }

    /// Sets the callback invoked when the pool discards an object, either because the free list
    /// is full or because the pool is being cleared.
    pub fn set_on_destroyed(&mut self, f: impl FnMut(T) + 'static) {
        self.on_destroyed = Some(Box::new(f));
    }

    /// Removes all registered callbacks.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn created(&mut self, item: &mut T) {
        if let Some(f) = self.on_created.as_mut() {
            f(item);
        }
    }

    pub(crate) fn acquired(&mut self, item: &mut T) {
        if let Some(f) = self.on_acquired.as_mut() {
            f(item);
        }
    }

    pub(crate) fn released(&mut self, item: &mut T) {
        if let Some(f) = self.on_released.as_mut() {
            f(item);
        }
    }

    pub(crate) fn destroyed(&mut self, item: T) {
        match self.on_destroyed.as_mut() {
            Some(f) => f(item),
            None => drop(item),
        }
    }
}

impl<T> Default for LifecycleHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LifecycleHooks<T> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("on_created", &self.on_created.is_some())
            .field("on_acquired", &self.on_acquired.is_some())
            .field("on_released", &self.on_released.is_some())
            .field("on_destroyed", &self.on_destroyed.is_some())
            .finish()
    }
}
