use slotvec::{distance, slotvec, ConstCursor, Cursor, SlotVec};

#[test]
fn test_begin_to_end_walk() {
    let v = slotvec![3, 1, 4, 1, 5];
    let mut seen = Vec::new();

    let mut it = v.cbegin();
    while it != v.cend() {
        // Safe: `it` stays within the live range of an unmodified vector
        seen.push(unsafe { *it.get() });
        it.increment();
    }

    assert_eq!(seen, [3, 1, 4, 1, 5]);
}

#[test]
fn test_reverse_walk() {
    let v = slotvec![1, 2, 3];
    let mut seen = Vec::new();

    let mut it = v.cend();
    while it != v.cbegin() {
        let current = it.decrement();
        // Safe: `current` is within the live range
        seen.push(unsafe { *current.get() });
    }

    assert_eq!(seen, [3, 2, 1]);
}

#[test]
fn test_post_forms_return_previous_position() {
    let v = slotvec![10, 20];
    let mut it = v.cbegin();

    let before = it.post_increment();
    assert_eq!(before, v.cbegin());
    assert_eq!(it, v.cbegin() + 1);

    let before = it.post_decrement();
    assert_eq!(before, v.cbegin() + 1);
    assert_eq!(it, v.cbegin());
}

#[test]
fn test_arithmetic_forms_agree() {
    let v = slotvec![0u64; 8];
    let begin = v.cbegin();

    assert_eq!(begin + 3, 3 + begin);
    assert_eq!(begin + 3, begin.offset(3));
    assert_eq!((begin + 5) - 2, begin + 3);

    let mut it = begin;
    it += 6;
    it -= 1;
    assert_eq!(it - begin, 5);
    assert_eq!(begin - it, -5);
    assert_eq!(distance(begin, it), 5);
    assert_eq!(begin.distance_to(it), 5);
    assert_eq!(distance(v.cbegin(), v.cend()), 8);
}

#[test]
fn test_ordering_follows_address() {
    let v = slotvec![1, 2, 3];

    assert!(v.cbegin() < v.cend());
    assert!(v.cbegin() + 2 > v.cbegin() + 1);
    assert_eq!(v.cbegin().max(v.cend()), v.cend());
}

#[test]
fn test_write_through_mutable_cursor() {
    let mut v = slotvec![1, 2, 3];
    let mut it = v.begin();

    for _ in 0..v.len() {
        // Safe: the vector is only accessed through `it` inside the loop
        let slot = unsafe { it.get_mut() };
        *slot *= 10;
        it.increment();
    }

    assert_eq!(v, [10, 20, 30]);
}

#[test]
fn test_cursor_converts_to_const() {
    let mut v = slotvec![1, 2, 3];
    let it: Cursor<i32> = v.begin() + 1;

    let read_only: ConstCursor<i32> = it.into();

    assert_eq!(read_only, v.cbegin() + 1);
    assert_eq!(read_only.as_ptr(), it.as_ptr() as *const i32);
}

#[test]
fn test_null_sentinel() {
    let sentinel: ConstCursor<i32> = ConstCursor::default();
    let v = slotvec![1];

    assert!(sentinel.is_null());
    assert!(!v.cbegin().is_null());
    assert_ne!(sentinel, v.cbegin());
}

#[test]
fn test_range_to_is_double_ended() {
    let v = slotvec![1, 2, 3, 4];

    // Safe: `v` is not mutated while the range is alive
    let mut range = unsafe { v.cbegin().range_to(v.cend()) };

    assert_eq!(range.len(), 4);
    assert_eq!(range.next(), Some(&1));
    assert_eq!(range.next_back(), Some(&4));
    assert_eq!(range.clone().collect::<Vec<_>>(), [&2, &3]);
    assert_eq!(range.len(), 2);
}

#[test]
fn test_reversed_range_is_empty() {
    let v = slotvec![1, 2, 3];

    // Safe: both cursors belong to `v`
    let mut range = unsafe { v.cend().range_to(v.cbegin()) };

    assert_eq!(range.len(), 0);
    assert_eq!(range.next(), None);
}

#[test]
fn test_range_drives_std_algorithms() {
    let v = slotvec![5, 3, 8, 1];

    // Safe: `v` is not mutated while the range is alive
    let range = unsafe { v.cbegin().range_to(v.cend()) };

    assert_eq!(range.clone().max(), Some(&8));
    assert_eq!(range.clone().position(|&x| x == 8), Some(2));
    assert_eq!(range.sum::<i32>(), 17);
}

#[test]
fn test_zero_sized_positions_are_distinct() {
    let mut v: SlotVec<()> = SlotVec::with_len(5);

    assert_ne!(v.cbegin(), v.cend());
    assert_eq!(v.cend() - v.cbegin(), 5);
    assert_eq!(distance(v.begin() + 2, v.end()), 3);

    let mut steps = 0;
    let mut it = v.cbegin();
    while it != v.cend() {
        // Safe: zero-sized reads never touch the buffer
        let () = unsafe { *it.get() };
        it.increment();
        steps += 1;
    }
    assert_eq!(steps, 5);

    // Safe: `v` is not modified while the range is alive
    let range = unsafe { (v.cbegin() + 1).range_to(v.cend()) };
    assert_eq!(range.len(), 4);
    assert_eq!(range.rev().count(), 4);
}
