//! Benchmark profiles for rectab.
//!
//! - [`TableProfile::REFERENCE`]: 64 columns x 10K rows, the shape of a
//!   right-Cayley table for a 10K-element semigroup with 64 generators.
//! - [`grow_by_expand`]: fill a profile with `expand_one` + `set`.
//! - [`grow_by_builder`]: fill a profile through `RowBuilder`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rectab::RectTable;

/// Shape of a benchmark table.
#[derive(Clone, Copy, Debug)]
pub struct TableProfile {
    /// Column count.
    pub cols: usize,
    /// Rows built per iteration.
    pub rows: usize,
}

impl TableProfile {
    /// 64 x 10_000 (640K cells).
    pub const REFERENCE: Self = Self {
        cols: 64,
        rows: 10_000,
    };

    /// 8 x 100_000, narrow and tall.
    pub const NARROW: Self = Self {
        cols: 8,
        rows: 100_000,
    };
}

/// Value stored at `(row, col)` by the growth helpers.
#[inline]
fn cell_value(profile: TableProfile, row: usize, col: usize) -> u32 {
    ((row * 31 + col) % profile.rows) as u32
}

/// Build the profile one `expand_one` at a time, then overwrite each cell.
///
/// When `reserve` is set the whole table is reserved first.
pub fn grow_by_expand(profile: TableProfile, reserve: bool) -> RectTable<u32> {
    let mut table = if reserve {
        RectTable::with_capacity(profile.cols, profile.rows)
    } else {
        RectTable::new(profile.cols, 0)
    };
    for r in 0..profile.rows {
        table.expand_one();
        for c in 0..profile.cols {
            table.set(r, c, cell_value(profile, r, c));
        }
    }
    table
}

/// Build the profile through [`RowBuilder`](rectab::RowBuilder).
pub fn grow_by_builder(profile: TableProfile) -> RectTable<u32> {
    let mut table = RectTable::with_capacity(profile.cols, profile.rows);
    for r in 0..profile.rows {
        let mut row = table.row_builder();
        for c in 0..profile.cols {
            row.push(cell_value(profile, r, c)).expect("profile width matches table");
        }
        row.finish().expect("row was filled");
    }
    table
}
