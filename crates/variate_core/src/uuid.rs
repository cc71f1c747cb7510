//! Random version-4 UUIDs.
//!
//! A UUID is built from two 64-bit draws laid out big-endian, so the
//! first draw forms bytes 0..8. The version nibble (byte 6) is forced to
//! `4` and the variant bits (byte 8) to `10`; the remaining 122 bits are
//! the engine's. Results are only as unpredictable as the engine, which
//! for every deterministic engine in this crate means not at all.

use ::uuid::Uuid;

use crate::distributions::Distribution;
use crate::engine::RandomEngine;

/// Distribution over random (version 4, RFC 4122 variant) UUIDs.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::Distribution;
/// use variate_core::engine::Xoshiro256StarStar;
/// use variate_core::RandomUuid;
///
/// let mut rng = Xoshiro256StarStar::default();
/// let id = RandomUuid.sample(&mut rng);
/// assert_eq!(id.to_string(), "99ec5f36-cb75-42b4-bf6e-1f784956452a");
/// assert_eq!(id.get_version_num(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomUuid;

impl RandomUuid {
    /// Draws the 16 raw bytes of a version-4 UUID.
    pub fn bytes<E: RandomEngine>(&self, engine: &mut E) -> [u8; 16] {
        let mut bytes = [0_u8; 16];
        bytes[..8].copy_from_slice(&engine.next_bits64().to_be_bytes());
        bytes[8..].copy_from_slice(&engine.next_bits64().to_be_bytes());

        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        bytes
    }
}

impl Distribution for RandomUuid {
    type Output = Uuid;

    #[inline]
    fn sample<E: RandomEngine>(&self, engine: &mut E) -> Uuid {
        Uuid::from_bytes(self.bytes(engine))
    }
}
