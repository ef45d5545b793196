use slotvec::{slotvec, SlotVec};

#[test]
fn test_assign_count_reuses_buffer() {
    let mut v = slotvec![1, 2, 3, 4];

    v.assign(2, 9);

    assert_eq!(v, [9, 9]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_assign_count_grows_exactly() {
    let mut v = slotvec![1];

    v.assign(5, 0);

    assert_eq!(v, [0, 0, 0, 0, 0]);
    assert_eq!(v.capacity(), 5);
}

#[test]
fn test_assign_slice() {
    let mut v = slotvec![1, 2, 3];

    v.assign_slice(&[7, 8]);
    assert_eq!(v, [7, 8]);
    assert_eq!(v.capacity(), 3);

    v.assign_slice(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    assert_eq!(v.capacity(), 6);
}

#[test]
fn test_assign_range() {
    let mut v: SlotVec<u32> = SlotVec::new();

    v.assign_range(10..13);
    assert_eq!(v, [10, 11, 12]);
    assert_eq!(v.capacity(), 3);

    v.assign_range(0..0);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 3);
}

#[test]
fn test_assign_range_from_cursors() {
    let source = slotvec!["a", "b", "c", "d"];
    let mut v = slotvec!["x"; 8];

    // Safe: `source` is not mutated while the range is alive
    let range = unsafe { (source.cbegin() + 2).range_to(source.cend()) };
    v.assign_range(range.copied());

    assert_eq!(v, ["c", "d"]);
    assert_eq!(v.capacity(), 8);
}

#[test]
fn test_copy_from_discards_excess_capacity() {
    let mut big = slotvec![0; 10];
    let small = slotvec![1, 2, 3];

    big.copy_from(&small);

    assert_eq!(big, [1, 2, 3]);
    assert_eq!(big.len(), 3);
    assert_eq!(big.capacity(), 3);
}

#[test]
fn test_copy_from_larger_source_reallocates() {
    let mut small = slotvec![1];
    let big = slotvec![4, 5, 6, 7];

    small.copy_from(&big);

    assert_eq!(small, big);
    assert_eq!(small.capacity(), 4);
}

#[test]
fn test_clone_from_matches_clone() {
    let mut source = slotvec![1, 2];
    source.reserve(8);
    let mut target = slotvec![0; 6];

    target.clone_from(&source);

    assert_eq!(target, [1, 2]);
    assert_eq!(target.capacity(), source.clone().capacity());
    assert_eq!(target.capacity(), 8);

    // copy assignment trims instead
    target.copy_from(&source);
    assert_eq!(target.capacity(), 2);
}

#[test]
fn test_copy_from_slice() {
    let mut v = slotvec![9; 4];

    v.copy_from_slice(&[1, 2]);

    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 2);
    assert_eq!(v.to_debug_string(), "[ 1 2 | ], end = 2, capacity = 2");
}

#[test]
fn test_grow_after_narrowed_capacity() {
    let mut v = slotvec![0; 4];
    v.copy_from_slice(&[1]);

    v.push_back(2);
    v.push_back(3);

    assert_eq!(v, [1, 2, 3]);
    assert_eq!(v.capacity(), 4);
}

#[test]
fn test_swap_exchanges_everything() {
    let mut a = slotvec![1, 2, 3];
    a.reserve(8);
    let mut b = slotvec![9];
    let a_ptr = a.as_ptr();

    slotvec::swap(&mut a, &mut b);

    assert_eq!(a, [9]);
    assert_eq!(a.capacity(), 1);
    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 8);
    assert_eq!(b.as_ptr(), a_ptr);

    b.swap(&mut a);
    assert_eq!(a, [1, 2, 3]);
}
