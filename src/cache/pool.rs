//! Pool of reusable hash accumulators.

use sha2::digest::{Digest, FixedOutputReset};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Idle accumulators kept by [`HasherPool::new`].
pub const DEFAULT_MAX_IDLE: usize = 32;

/// Free list of hash accumulators shared by concurrent key derivations.
///
/// An accumulator is only ever reachable through one [`PooledHasher`] at a
/// time, and it is reset before going back on the free list.
pub struct HasherPool<D>
where
    D: Digest + FixedOutputReset + Default,
{
    free: Mutex<Vec<D>>,
    max_idle: usize,
}

impl<D> HasherPool<D>
where
    D: Digest + FixedOutputReset + Default,
{
    pub fn new() -> Self {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    pub fn with_max_idle(max_idle: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// Take an accumulator off the free list, or create one if it is empty.
    pub fn acquire(&self) -> PooledHasher<'_, D> {
        let hasher = self.lock().pop().unwrap_or_default();
        PooledHasher { pool: self, hasher }
    }

    /// Number of accumulators waiting on the free list.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    pub fn max_idle(&self) -> usize {
        self.max_idle
    }

    fn release(&self, mut hasher: D) {
        Digest::reset(&mut hasher);
        let mut free = self.lock();
        if free.len() < self.max_idle {
            free.push(hasher);
        }
    }

    // The free list only ever holds reset accumulators, so a panic while the
    // lock was held cannot have left it inconsistent.
    fn lock(&self) -> MutexGuard<'_, Vec<D>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D> Default for HasherPool<D>
where
    D: Digest + FixedOutputReset + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive handle on a pooled accumulator.
///
/// Dropping the handle resets the accumulator and returns it to the pool,
/// including on early return or unwinding.
pub struct PooledHasher<'a, D>
where
    D: Digest + FixedOutputReset + Default,
{
    pool: &'a HasherPool<D>,
    hasher: D,
}

impl<D> PooledHasher<'_, D>
where
    D: Digest + FixedOutputReset + Default,
{
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        Digest::update(&mut self.hasher, data);
    }

    /// Lowercase hex digest of everything written so far.
    pub fn finalize_hex(mut self) -> String {
        let digest = Digest::finalize_reset(&mut self.hasher);
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl<D> Drop for PooledHasher<'_, D>
where
    D: Digest + FixedOutputReset + Default,
{
    fn drop(&mut self) {
        let hasher = std::mem::take(&mut self.hasher);
        self.pool.release(hasher);
    }
}
