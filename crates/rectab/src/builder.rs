//! Staged construction of a single table row.
//!
//! [`RowBuilder`] collects exactly `column_count` values and only then
//! appends them to the table as one row, so the table never observes a
//! partially written row.

use smallvec::SmallVec;

use crate::error::TableError;
use crate::sentinel::Unset;
use crate::table::RectTable;

/// Rows up to this width are staged without a heap allocation.
const INLINE_ROW: usize = 16;

/// Stages one row for a [`RectTable`].
///
/// Obtained from [`RectTable::row_builder`]. Dropping the builder without
/// calling [`finish`](Self::finish) discards the staged values.
///
/// ```
/// use rectab::RectTable;
///
/// let mut table = RectTable::<i32>::new(3, 0);
/// let mut row = table.row_builder();
/// row.extend_from_slice(&[1, 2, 3]).unwrap();
/// assert_eq!(row.finish(), Ok(0));
/// assert_eq!(table.row(0), &[1, 2, 3]);
/// ```
pub struct RowBuilder<'a, T: Unset> {
    table: &'a mut RectTable<T>,
    staged: SmallVec<[T; INLINE_ROW]>,
}

impl<'a, T: Unset> RowBuilder<'a, T> {
    pub(crate) fn new(table: &'a mut RectTable<T>) -> Self {
        let staged = SmallVec::with_capacity(table.column_count());
        Self { table, staged }
    }

    /// Stage the next value of the row.
    ///
    /// Returns [`TableError::RowFull`] if the row already holds
    /// `column_count` values.
    pub fn push(&mut self, value: T) -> Result<(), TableError> {
        if self.is_full() {
            return Err(TableError::RowFull {
                cols: self.table.column_count(),
            });
        }
        self.staged.push(value);
        Ok(())
    }

    /// Stage several values at once.
    ///
    /// Either all of `values` are staged or, if they do not fit in the
    /// remaining columns, none are and [`TableError::RowFull`] is returned.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), TableError> {
        if values.len() > self.remaining() {
            return Err(TableError::RowFull {
                cols: self.table.column_count(),
            });
        }
        self.staged.extend_from_slice(values);
        Ok(())
    }

    /// Number of values staged so far.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Returns `true` if nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Returns `true` once a full row is staged.
    pub fn is_full(&self) -> bool {
        self.staged.len() == self.table.column_count()
    }

    /// Number of values still needed to complete the row.
    pub fn remaining(&self) -> usize {
        self.table.column_count() - self.staged.len()
    }

    /// Append the staged row to the table and return its row index.
    ///
    /// Returns [`TableError::IncompleteRow`] if fewer than `column_count`
    /// values were staged, and [`TableError::UnalignedStore`] if the store
    /// holds elements past the logical extent (after
    /// [`RectTable::set_row_count`] shrank it or
    /// [`RectTable::append_raw`] pushed loose elements). The table is left
    /// unchanged on error.
    pub fn finish(self) -> Result<usize, TableError> {
        let expected = self.table.column_count();
        if self.staged.len() != expected {
            return Err(TableError::IncompleteRow {
                staged: self.staged.len(),
                expected,
            });
        }
        if !self.table.is_aligned() {
            return Err(TableError::UnalignedStore {
                size: self.table.size(),
                rows: self.table.row_count(),
                cols: expected,
            });
        }
        Ok(self.table.commit_row(&self.staged))
    }
}
