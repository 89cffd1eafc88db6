//! Debug-build structural invariant checks.
//!
//! Every mutating path that touches container structure runs the relevant
//! check before returning. The checks:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!`)
//! 2. Catch corruption at the operation that caused it, not at the next read
//!
//! # Invariants
//!
//! | Check                          | Invariant                               |
//! |--------------------------------|-----------------------------------------|
//! | `check_array_well_formed`      | `len <= capacity`                       |
//! | `check_window_valid`           | `beg <= end <= buffer length`           |
//! | `check_bit_array_well_formed`  | word count matches bit length; zero tail|

use crate::array::DynArray;
use crate::bits::{BitArray, WORD_BITS};

/// Check that a dynamic array's logical length fits its backing buffer.
///
/// # Panics (debug builds only)
///
/// Panics if `len > capacity`.
#[inline]
pub fn check_array_well_formed<T>(array: &DynArray<T>) {
    debug_assert!(
        array.len() <= array.capacity(),
        "invariant violation: len {} > capacity {}",
        array.len(),
        array.capacity()
    );
}

/// Check that a window range is valid for a buffer of `buf_len` elements.
///
/// # Panics (debug builds only)
///
/// Panics if `beg > end` or `end > buf_len`.
#[inline]
pub fn check_window_valid(beg: usize, end: usize, buf_len: usize) {
    debug_assert!(
        beg <= end,
        "invariant violation: window begin {} > end {}",
        beg,
        end
    );
    debug_assert!(
        end <= buf_len,
        "invariant violation: window end {} > buffer length {}",
        end,
        buf_len
    );
}

/// Check a bit array's word count and canonical zero tail.
///
/// # Panics (debug builds only)
///
/// Panics if the word count disagrees with `ceil(len / 32)` or any bit at
/// position `>= len` is set.
#[inline]
pub fn check_bit_array_well_formed(bits: &BitArray) {
    let words = bits.words();
    debug_assert_eq!(
        words.len(),
        bits.len().div_ceil(WORD_BITS),
        "invariant violation: {} words for {} bits",
        words.len(),
        bits.len()
    );
    let spill = bits.len() % WORD_BITS;
    if spill != 0 {
        // spill != 0 implies at least one word.
        let last = words[words.len() - 1];
        debug_assert_eq!(
            last & !((1u32 << spill) - 1),
            0,
            "invariant violation: set bits past length {}",
            bits.len()
        );
    }
}
