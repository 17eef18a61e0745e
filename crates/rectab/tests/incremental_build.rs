use rectab::{RectTable, TableError, Unset};
use rectab_test_utils::{assert_row_major, cyclic_cayley_table, sequential_table};

#[test]
fn cayley_table_of_z5_is_latin_square() {
    let t = cyclic_cayley_table(5);
    assert_eq!(t.row_count(), 5);
    assert_eq!(t.column_count(), 5);
    assert_row_major(&t);
    for row in t.iter_rows() {
        let mut seen = row.to_vec();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
    assert_eq!(t.get(3, 4), 2);
}

#[test]
fn sequential_table_sequence_is_identity_ramp() {
    let t = sequential_table(4, 3);
    assert_row_major(&t);
    let expected: Vec<i64> = (0..12).collect();
    assert_eq!(t.as_sequence(), expected);
}

#[test]
fn speculative_rows_roll_back_and_stay_in_storage() {
    let mut t = sequential_table(3, 2);
    t.expand(4);
    t.set(5, 2, 99);
    t.set_row_count(2).unwrap();
    assert_eq!(t.size(), 18);
    assert_eq!(
        t.try_get(5, 2).unwrap_err(),
        TableError::OutOfBounds {
            row: 5,
            col: 2,
            rows: 2,
            cols: 3,
        }
    );

    // Re-exposing the rolled-back rows finds them untouched.
    t.set_row_count(6).unwrap();
    assert_eq!(t.get(5, 2), 99);
    assert_eq!(t.row(2), &[i64::UNSET; 3]);

    // Growth always appends exactly `extra * cols` elements.
    t.set_row_count(2).unwrap();
    t.expand(1);
    assert_eq!(t.row_count(), 3);
    assert_eq!(t.size(), 21);
    assert_eq!(&t.as_slice()[18..], &[i64::UNSET; 3]);
    assert_row_major(&t);
}

#[test]
fn raw_elements_are_completed_by_expand() {
    let mut t = sequential_table(3, 1);
    t.append_raw(10);
    t.append_raw(11);
    assert_eq!(t.size(), 5);
    t.expand(1);
    assert_eq!(t.size(), 8);
    assert_eq!(t.row(1), &[10, 11, i64::UNSET]);
    assert!(t.is_aligned());
    assert_row_major(&t);
}

#[test]
fn mixed_growth_paths_keep_layout() {
    let mut t = RectTable::<i32>::with_capacity(2, 8);
    t.expand(1);
    t.set(0, 0, 1);

    let mut row = t.row_builder();
    row.extend_from_slice(&[2, 3]).unwrap();
    row.finish().unwrap();

    t.expand_one();
    t.set(2, 1, 4);

    t.append_raw(5);
    t.append_raw(6);
    t.set_row_count(4).unwrap();

    assert_eq!(t.as_sequence(), vec![1, -1, 2, 3, -1, 4, 5, 6]);
    assert_row_major(&t);
}

#[test]
fn clone_is_independent_after_growth() {
    let original = cyclic_cayley_table(3);
    let mut copy = original.clone();
    copy.expand(2);
    copy.set(0, 0, 7);
    assert_eq!(original.row_count(), 3);
    assert_eq!(original.get(0, 0), 0);
    assert_eq!(copy.row_count(), 5);
    assert_eq!(copy.get(0, 0), 7);
}

#[test]
fn table_moves_across_threads() {
    let t = sequential_table(2, 2);
    let handle = std::thread::spawn(move || t.get(1, 1));
    assert_eq!(handle.join().unwrap(), 3);
}
