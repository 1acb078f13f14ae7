//! Tests for range set/clear on the word-backed store.

use super::*;
use crate::verify::reference::NaiveBits;

fn patterned(word_count: usize) -> BitRangeStore {
    BitRangeStore::from_words(
        (0..word_count as u64)
            .map(|i| 0x0123_4567_89ab_cdef_u64.wrapping_mul(i + 1))
            .collect(),
    )
}

fn assert_only_range_changed(
    before: &BitRangeStore,
    after: &BitRangeStore,
    range: Range<usize>,
    value: bool,
) {
    for i in 0..after.capacity() {
        let got = after.test(i).unwrap();
        if range.contains(&i) {
            assert_eq!(got, value, "bit {i} inside range");
        } else {
            assert_eq!(got, before.test(i).unwrap(), "bit {i} outside range");
        }
    }
}

#[test]
fn new_rounds_capacity_up_to_words() {
    assert_eq!(BitRangeStore::new(0).capacity(), 0);
    assert_eq!(BitRangeStore::new(1).capacity(), 64);
    assert_eq!(BitRangeStore::new(512).capacity(), 512);
    assert_eq!(BitRangeStore::new(513).word_count(), 9);
    assert!(BitRangeStore::new(512).words().iter().all(|&w| w == 0));
}

#[test]
fn set_range_touches_only_the_range() {
    let before = patterned(4);
    let mut store = before.clone();
    store.set_range(37, 150).unwrap();
    assert_only_range_changed(&before, &store, 37..187, true);
}

#[test]
fn clear_range_touches_only_the_range() {
    let before = patterned(4);
    let mut store = before.clone();
    store.clear_range(5, 200).unwrap();
    assert_only_range_changed(&before, &store, 5..205, false);
}

#[test]
fn range_within_one_word() {
    let mut store = BitRangeStore::with_words(2);
    store.set_range(68, 8).unwrap();
    assert_eq!(store.words(), &[0, 0xff0]);
}

#[test]
fn range_ending_on_word_boundary_leaves_next_word() {
    let mut store = BitRangeStore::with_words(3);
    store.set_range(32, 96).unwrap();
    assert_eq!(store.words(), &[0xffff_ffff_0000_0000, Word::MAX, 0]);
}

#[test]
fn set_is_idempotent() {
    let mut once = patterned(3);
    once.set_range(10, 100).unwrap();
    let mut twice = once.clone();
    twice.set_range(10, 100).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn clear_is_idempotent() {
    let mut once = patterned(3);
    once.clear_range(70, 50).unwrap();
    let mut twice = once.clone();
    twice.clear_range(70, 50).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn set_then_clear_leaves_range_zero() {
    let before = patterned(4);
    let mut store = before.clone();
    store.set_range(99, 77).unwrap();
    store.clear_range(99, 77).unwrap();
    assert_only_range_changed(&before, &store, 99..176, false);
}

#[test]
fn full_range_sets_and_clears_everything() {
    let mut store = patterned(8);
    store.set_range(0, 512).unwrap();
    assert!(store.words().iter().all(|&w| w == Word::MAX));
    assert_eq!(store.count_ones(), 512);
    store.clear_range(0, 512).unwrap();
    assert!(store.words().iter().all(|&w| w == 0));
}

#[test]
fn overrun_by_one_is_rejected_without_mutation() {
    let mut store = patterned(8);
    let before = store.render();
    let err = store.set_range(511, 2).unwrap_err();
    assert_eq!(
        err,
        RangeError::OutOfBounds {
            start: 511,
            length: 2,
            capacity: 512
        }
    );
    assert_eq!(store.render(), before);
    assert!(store.clear_range(511, 2).is_err());
    assert_eq!(store.render(), before);
}

#[test]
fn last_bit_is_addressable() {
    let mut store = BitRangeStore::with_words(8);
    store.set_range(511, 1).unwrap();
    assert_eq!(store.test(511), Some(true));
    assert_eq!(store.words()[7], 1 << 63);
}

#[test]
fn overflowing_range_is_rejected() {
    let mut store = BitRangeStore::with_words(1);
    assert!(store.set_range(1, usize::MAX).is_err());
    assert!(store.clear_range(usize::MAX, 1).is_err());
}

#[test]
fn zero_length_validates_but_does_nothing() {
    let mut store = patterned(2);
    let before = store.clone();
    store.set_range(128, 0).unwrap();
    store.clear_range(17, 0).unwrap();
    assert_eq!(store, before);
    assert!(store.set_range(129, 0).is_err());
}

#[test]
fn cross_word_matches_bit_by_bit_reference() {
    // Starts mid word 1, ends mid word 3.
    let mut store = patterned(5);
    let mut naive = NaiveBits::from_words(store.words());
    store.set_range(100, 120).unwrap();
    naive.set_range(100, 120);
    assert_eq!(store.render(), naive.to_words());

    store.clear_range(70, 150).unwrap();
    naive.clear_range(70, 150);
    assert_eq!(store.render(), naive.to_words());
}

#[test]
fn example_512_bits() {
    let mut store = BitRangeStore::new(512);
    store.set_range(311, 68).unwrap();
    assert_eq!(store.iter_ones().collect::<Vec<_>>(), (311..379).collect::<Vec<_>>());
    assert_eq!(
        store.words(),
        &[0, 0, 0, 0, 0xff80_0000_0000_0000, 0x07ff_ffff_ffff_ffff, 0, 0]
    );

    store.clear_range(121, 18).unwrap();
    assert_eq!(store.test(311), Some(true));
    assert!((379..512).all(|i| store.test(i) == Some(false)));
    assert_eq!(store.count_ones(), 68);
}

#[test]
fn test_past_end_is_none() {
    let store = BitRangeStore::with_words(1);
    assert_eq!(store.test(63), Some(false));
    assert_eq!(store.test(64), None);
}

#[test]
fn iter_ones_skips_empty_words() {
    let mut store = BitRangeStore::with_words(4);
    store.set_range(0, 1).unwrap();
    store.set_range(190, 3).unwrap();
    assert_eq!(store.iter_ones().collect::<Vec<_>>(), vec![0, 190, 191, 192]);
    assert_eq!(BitRangeStore::default().iter_ones().next(), None);
}

#[test]
fn check_range_returns_half_open_range() {
    let store = BitRangeStore::with_words(2);
    assert_eq!(store.check_range(3, 10), Ok(3..13));
    assert_eq!(store.check_range(128, 0), Ok(128..128));
}
