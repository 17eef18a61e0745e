//! Reusable table fixtures.
//!
//! - [`sequential_table`] — every cell holds its own row-major offset.
//! - [`cyclic_cayley_table`] — the addition table of Z/n, built row by row
//!   through [`RowBuilder`](rectab::RowBuilder) the way enumeration
//!   algorithms fill their tables.
//! - [`assert_row_major`] — checks a table's store against its rows.

use rectab::RectTable;

/// A `rows x cols` table where cell `(r, c)` holds `r * cols + c`.
pub fn sequential_table(cols: usize, rows: usize) -> RectTable<i64> {
    let mut table = RectTable::new(cols, rows);
    for r in 0..rows {
        for c in 0..cols {
            table.set(r, c, (r * cols + c) as i64);
        }
    }
    table
}

/// The Cayley table of the cyclic group of order `n` under addition.
///
/// Row `a` is discovered one element at a time and committed once
/// complete, mirroring an enumeration that only learns products as it
/// goes.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn cyclic_cayley_table(n: usize) -> RectTable<u32> {
    let mut table = RectTable::with_capacity(n, n);
    for a in 0..n {
        let mut row = table.row_builder();
        for b in 0..n {
            row.push(((a + b) % n) as u32).expect("row has n columns");
        }
        row.finish().expect("row was filled");
    }
    table
}

/// Assert that the logical part of the store is exactly the concatenation
/// of the table's rows, and each row agrees with `get`.
pub fn assert_row_major<T: Copy + PartialEq + std::fmt::Debug>(table: &RectTable<T>) {
    let cols = table.column_count();
    let store = table.as_sequence();
    assert!(
        store.len() >= table.row_count() * cols,
        "store of {} elements cannot back {} rows of {} columns",
        store.len(),
        table.row_count(),
        cols,
    );
    for (r, row) in table.iter_rows().enumerate() {
        assert_eq!(row, &store[r * cols..(r + 1) * cols], "row {r} misplaced");
        for (c, value) in row.iter().enumerate() {
            assert_eq!(*value, table.get(r, c), "cell ({r}, {c}) disagrees");
        }
    }
}
