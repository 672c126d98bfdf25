//! Fixed-width numeric storage words for the backing arrays
//!
//! The queue stores keys and priorities in flat arrays of a fixed-width
//! numeric type chosen by the caller. The [`Word`] trait captures what the
//! queue needs from such a type: a default value to fill fresh storage,
//! ordering for priority comparisons, and an explicit narrowing conversion
//! with the semantics of a typed-array store (high bits of an oversized
//! value are silently discarded).
//!
//! # Narrowing semantics
//!
//! `Word::truncate_from` is the documented lossy entry point used by
//! [`MinQueue::push_truncating`](crate::MinQueue::push_truncating):
//!
//! - unsigned and signed integer words keep the low `BITS` bits of the raw
//!   value (so `u32::truncate_from(1 << 32) == 0`, and
//!   `i32::truncate_from(u32::MAX as u64) == -1`);
//! - floating-point words perform a numeric conversion instead of a bit
//!   truncation, matching how a float-backed array stores an integer value.
//!
//! Oversized values are a caller decision, not an error condition.

/// A fixed-width numeric type usable as backing storage for keys or priorities.
///
/// Implemented for `u8`..`u64`, `i8`..`i64`, `f32` and `f64`. Priorities are
/// compared with `PartialOrd`; for the float words, feeding NaN priorities
/// leaves the heap order unspecified (but never unsafe).
pub trait Word: Copy + Default + PartialOrd + core::fmt::Debug {
    /// Number of bits in this word type
    const BITS: u32;

    /// Narrow a raw 64-bit value into this word, typed-array style.
    fn truncate_from(raw: u64) -> Self;

    /// Widen back to 64 bits (lossy for float words with fractional values).
    fn as_u64(self) -> u64;
}

macro_rules! impl_int_word {
    ($($t:ty),+) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn truncate_from(raw: u64) -> Self {
                    raw as $t
                }

                #[inline]
                fn as_u64(self) -> u64 {
                    self as u64
                }
            }
        )+
    };
}

impl_int_word!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Word for f32 {
    const BITS: u32 = 32;

    #[inline]
    fn truncate_from(raw: u64) -> Self {
        raw as f32
    }

    #[inline]
    fn as_u64(self) -> u64 {
        self as u64
    }
}

impl Word for f64 {
    const BITS: u32 = 64;

    #[inline]
    fn truncate_from(raw: u64) -> Self {
        raw as f64
    }

    #[inline]
    fn as_u64(self) -> u64 {
        self as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mask selecting the low `W::BITS` bits of a raw value.
    fn low_mask<W: Word>() -> u64 {
        if W::BITS == 64 {
            u64::MAX
        } else {
            (1u64 << W::BITS) - 1
        }
    }

    #[test]
    fn test_truncation_keeps_exactly_the_low_bits() {
        let raw = 0xDEAD_BEEF_CAFE_F00D_u64;

        assert_eq!(u8::truncate_from(raw).as_u64(), raw & low_mask::<u8>());
        assert_eq!(u16::truncate_from(raw).as_u64(), raw & low_mask::<u16>());
        assert_eq!(u32::truncate_from(raw).as_u64(), raw & low_mask::<u32>());
        assert_eq!(u64::truncate_from(raw).as_u64(), raw & low_mask::<u64>());

        // signed words keep the same low bits; widening sign-extends above them
        assert_eq!(
            i16::truncate_from(raw).as_u64() & low_mask::<i16>(),
            raw & low_mask::<i16>()
        );
        assert_eq!(
            i32::truncate_from(raw).as_u64() & low_mask::<i32>(),
            raw & low_mask::<i32>()
        );
    }

    #[test]
    fn test_unsigned_truncation_keeps_low_bits() {
        assert_eq!(u32::truncate_from(u32::MAX as u64), u32::MAX);
        assert_eq!(u32::truncate_from(1 << 32), 0);
        assert_eq!(u32::truncate_from((1 << 32) | 7), 7);
        assert_eq!(u8::truncate_from(0x1_02), 2);
    }

    #[test]
    fn test_signed_truncation_reinterprets_low_bits() {
        assert_eq!(i32::truncate_from(u32::MAX as u64), -1);
        assert_eq!(i8::truncate_from(0x80), i8::MIN);
    }

    #[test]
    fn test_float_words_convert_numerically() {
        assert_eq!(f32::truncate_from(3), 3.0);
        assert_eq!(f64::truncate_from(1 << 40), (1u64 << 40) as f64);
    }

    #[test]
    fn test_widening_round_trip() {
        assert_eq!(u32::truncate_from(123).as_u64(), 123);
        assert_eq!(f32::truncate_from(456).as_u64(), 456);
    }
}
