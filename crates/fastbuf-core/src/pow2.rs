//! Power-of-two predicate.
//!
//! A single bit-twiddling `const fn`: a power of two has exactly one bit
//! set, so clearing its lowest set bit with `n & (n - 1)` yields zero.
//! Zero and negative values are excluded.

/// Returns `true` if `n` is a power of two.
///
/// ```
/// use fastbuf_core::pow2::is_power_of_two;
///
/// const PAGE_OK: bool = is_power_of_two(4096);
/// assert!(PAGE_OK);
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(12));
/// ```
pub const fn is_power_of_two(n: u64) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// `usize` variant of [`is_power_of_two`].
pub const fn is_power_of_two_usize(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Signed variant of [`is_power_of_two`]. Rejects every `n <= 0`.
///
/// Use this rather than casting a signed value to `u64`: `i64::MIN as u64`
/// is `1 << 63`, which the unsigned predicate accepts.
///
/// ```
/// use fastbuf_core::pow2::is_power_of_two_i64;
///
/// assert!(is_power_of_two_i64(1 << 62));
/// assert!(!is_power_of_two_i64(i64::MIN));
/// assert!(!is_power_of_two_i64(-4));
/// ```
pub const fn is_power_of_two_i64(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_power() {
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two_usize(0));
    }

    #[test]
    fn one_is_a_power() {
        assert!(is_power_of_two(1));
    }

    #[test]
    fn small_values() {
        let powers: Vec<u64> = (0..20).filter(|&n| is_power_of_two(n)).collect();
        assert_eq!(powers, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn extremes() {
        assert!(is_power_of_two(1 << 63));
        assert!(!is_power_of_two(u64::MAX));
        assert!(!is_power_of_two((1 << 63) + 1));
    }

    #[test]
    fn signed_rejects_non_positive() {
        assert!(!is_power_of_two_i64(i64::MIN));
        assert!(!is_power_of_two_i64(-1));
        assert!(!is_power_of_two_i64(-2));
        assert!(!is_power_of_two_i64(0));
    }

    #[test]
    fn signed_accepts_positive_powers() {
        assert!(is_power_of_two_i64(1));
        assert!(is_power_of_two_i64(1 << 62));
        assert!(!is_power_of_two_i64(i64::MAX));
        assert!(!is_power_of_two_i64(6));
    }

    #[test]
    fn usable_in_const_context() {
        const CHECK: [bool; 3] = [
            is_power_of_two(64),
            is_power_of_two(65),
            is_power_of_two_usize(128),
        ];
        assert_eq!(CHECK, [true, false, true]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn agrees_with_std(n in any::<u64>()) {
                prop_assert_eq!(is_power_of_two(n), n.is_power_of_two());
            }

            #[test]
            fn every_shift_is_a_power(shift in 0u32..64) {
                prop_assert!(is_power_of_two(1u64 << shift));
            }

            #[test]
            fn signed_agrees_with_std(n in any::<i64>()) {
                prop_assert_eq!(is_power_of_two_i64(n), n > 0 && (n as u64).is_power_of_two());
            }

            #[test]
            fn usize_variant_matches(n in any::<usize>()) {
                prop_assert_eq!(is_power_of_two_usize(n), is_power_of_two(n as u64));
            }
        }
    }
}
