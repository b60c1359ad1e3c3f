//! Thread-shareable ephemeris

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::engine::EphemerisEngine;
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::types::{CalcOpts, HouseSystem, Houses, HousesOpts, Position};

/// Cloneable handle serialising every engine call behind one mutex.
pub struct SharedEphemeris<E: EphemerisEngine> {
    inner: Arc<Mutex<Ephemeris<E>>>,
}

impl<E: EphemerisEngine> Clone for SharedEphemeris<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: EphemerisEngine> SharedEphemeris<E> {
    pub fn new(ephemeris: Ephemeris<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ephemeris)),
        }
    }

    /// Hold the engine for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, Ephemeris<E>> {
        self.inner.lock()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Ephemeris<E>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn houses(&self, opts: &HousesOpts) -> Result<Houses> {
        self.inner.lock().houses(opts)
    }

    pub fn house_name(&self, sys: HouseSystem) -> String {
        self.inner.lock().house_name(sys)
    }

    pub fn calc_checked(&self, opts: &CalcOpts) -> Result<Position> {
        self.inner.lock().calc_checked(opts)
    }
}

impl<E: EphemerisEngine> From<Ephemeris<E>> for SharedEphemeris<E> {
    fn from(ephemeris: Ephemeris<E>) -> Self {
        Self::new(ephemeris)
    }
}
