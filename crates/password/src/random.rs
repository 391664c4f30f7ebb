//! Random number source for password generation.
use crate::{Error, Result};
use rand::{
    rngs::{OsRng, StdRng},
    Rng, RngCore, SeedableRng,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random number generator backed by the operating system.
///
/// When the operating system source fails the generator falls
/// back to a userspace generator seeded from the clock and
/// process identifier and keeps using it for the rest of its
/// lifetime. The fallback is weaker but generation never fails.
#[derive(Debug, Default)]
pub struct SecureRandom {
    fallback: Option<StdRng>,
}

impl SecureRandom {
    /// Create a new random source.
    pub fn new() -> Self {
        Self { fallback: None }
    }

    /// Whether the weak fallback generator is in use.
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    fn weak_rng() -> StdRng {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        let pid = std::process::id() as u64;
        StdRng::seed_from_u64(nanos ^ pid.rotate_left(32))
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Some(rng) = self.fallback.as_mut() {
            rng.fill_bytes(dest);
            return;
        }

        if let Err(error) = OsRng.try_fill_bytes(dest) {
            tracing::warn!(
                error = %error,
                "random::os_rng_unavailable",
            );
            let mut rng = Self::weak_rng();
            rng.fill_bytes(dest);
            self.fallback = Some(rng);
        }
    }

    fn try_fill_bytes(
        &mut self,
        dest: &mut [u8],
    ) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Random integer uniformly distributed in `min..=max`.
pub fn random_int<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<usize> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Random element of a non-empty slice.
pub(crate) fn choose<T: Copy, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
) -> Result<T> {
    let max = items
        .len()
        .checked_sub(1)
        .ok_or(Error::EmptyAlphabet("candidate"))?;
    Ok(items[random_int(rng, 0, max)?])
}

/// Weighted coin that lands true `tenths` times out of ten.
pub(crate) fn chance<R: Rng + ?Sized>(
    rng: &mut R,
    tenths: usize,
) -> Result<bool> {
    Ok(random_int(rng, 0, 9)? < tenths)
}
