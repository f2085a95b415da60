/// Determines whether a release scans the free list for the released object.
///
/// Scanning detects double releases early at the cost of a linear search over the free list.
/// Hot paths that have established correctness may disable it per call via
/// [`Pool::release_with()`][crate::Pool::release_with].
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
///
/// use recycle_pool::{DuplicateCheck, Pool};
///
/// let mut pool = Pool::builder(|| Rc::new(0_u32))
///     .identity(Rc::ptr_eq)
///     .duplicate_check(DuplicateCheck::Disabled)
///     .build();
///
/// let item = pool.acquire();
/// pool.release(item).unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DuplicateCheck {
    /// Releases fail with [`Error::DuplicateRelease`][crate::Error::DuplicateRelease] if the
    /// object is already in the free list. This is the default.
    #[default]
    Enabled,

    /// Releases do not inspect the free list.
    Disabled,
}

impl DuplicateCheck {
    pub(crate) fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}
