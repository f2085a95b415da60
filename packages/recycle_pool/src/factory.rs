use crate::{Error, Result};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The construction hook of a pool. Fallible and infallible factories are stored the same way
/// so that the pool has a single construction path.
pub(crate) struct Factory<T> {
    construct: Box<dyn FnMut() -> std::result::Result<T, BoxedError>>,
    fallible: bool,
}

impl<T> Factory<T> {
    pub(crate) fn infallible(mut f: impl FnMut() -> T + 'static) -> Self {
        Self {
            construct: Box::new(move || Ok(f())),
            fallible: false,
        }
    }

    pub(crate) fn fallible<E>(mut f: impl FnMut() -> std::result::Result<T, E> + 'static) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            construct: Box::new(move || f().map_err(|e| -> BoxedError { Box::new(e) })),
            fallible: true,
        }
    }

    pub(crate) fn is_fallible(&self) -> bool {
        self.fallible
    }

    pub(crate) fn construct(&mut self) -> Result<T> {
        (self.construct)().map_err(|source| Error::Construction { source })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn infallible_factory_always_succeeds() {
        let mut next = 0;
        let mut factory = Factory::infallible(move || {
            next += 1;
            next
        });

        assert!(!factory.is_fallible());
        assert_eq!(factory.construct().unwrap(), 1);
        assert_eq!(factory.construct().unwrap(), 2);
    }

    #[test]
    fn fallible_factory_wraps_error() {
        let mut factory =
            Factory::<u32>::fallible(|| Err(io::Error::other("device unavailable")));

        assert!(factory.is_fallible());

        let error = factory.construct().unwrap_err();
        assert!(matches!(error, Error::Construction { ref source } if source.to_string() == "device unavailable"));
    }
}
