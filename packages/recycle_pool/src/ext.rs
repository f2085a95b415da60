use crate::{DuplicateCheck, ObjectPool, Result};

/// Convenience methods for releasing objects that may already have been released.
///
/// The slot is emptied before the release, so the caller cannot accidentally release the
/// same object twice through it.
///
/// # Example
///
/// ```rust
/// use recycle_pool::{ObjectPoolExt, Pool};
///
/// let mut pool = Pool::new(String::new);
///
/// let mut cached: Option<String> = Some(pool.acquire());
/// pool.try_release(&mut cached).unwrap();
/// assert!(cached.is_none());
///
/// // Nothing left to release.
/// pool.try_release(&mut cached).unwrap();
/// assert_eq!(pool.inactive_count(), 1);
/// ```
pub trait ObjectPoolExt: ObjectPool {
    /// Releases the object in `slot`, if any, with the default duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`ObjectPool::release()`].
    fn try_release(&mut self, slot: &mut Option<Self::Item>) -> Result<()> {
        match slot.take() {
            Some(item) => self.release(item),
            None => Ok(()),
        }
    }

    /// Releases the object in `slot`, if any, with an explicit duplicate check policy.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`ObjectPool::release_with()`].
    fn try_release_with(
        &mut self,
        slot: &mut Option<Self::Item>,
        check: DuplicateCheck,
    ) -> Result<()> {
        match slot.take() {
            Some(item) => self.release_with(item, check),
            None => Ok(()),
        }
    }
}

impl<P> ObjectPoolExt for P where P: ObjectPool + ?Sized {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::{Error, Pool};

    #[test]
    fn empty_slot_is_noop() {
        let mut pool = Pool::new(|| 0_u32);
        let mut slot = None;

        pool.try_release(&mut slot).unwrap();
        pool.try_release_with(&mut slot, DuplicateCheck::Disabled)
            .unwrap();

        assert_eq!(pool.inactive_count(), 0);
    }

    #[test]
    fn filled_slot_is_released_and_emptied() {
        let mut pool = Pool::new(|| 0_u32);
        let mut slot = Some(pool.acquire());

        pool.try_release(&mut slot).unwrap();

        assert!(slot.is_none());
        assert_eq!(pool.inactive_count(), 1);
    }

    #[test]
    fn duplicate_check_applies_through_slot() {
        let mut pool = Pool::builder(|| Rc::new(0_u32))
            .identity(Rc::ptr_eq)
            .build();

        let item = pool.acquire();
        let mut alias = Some(Rc::clone(&item));
        pool.release(item).unwrap();

        assert!(matches!(
            pool.try_release(&mut alias),
            Err(Error::DuplicateRelease)
        ));
        assert!(alias.is_none());
        assert_eq!(pool.inactive_count(), 1);
    }

    #[test]
    fn explicit_policy_overrides_default() {
        let mut pool = Pool::builder(|| Rc::new(0_u32))
            .identity(Rc::ptr_eq)
            .build();

        let item = pool.acquire();
        let mut alias = Some(Rc::clone(&item));
        pool.release(item).unwrap();

        pool.try_release_with(&mut alias, DuplicateCheck::Disabled)
            .unwrap();

        assert_eq!(pool.inactive_count(), 2);
    }
}
