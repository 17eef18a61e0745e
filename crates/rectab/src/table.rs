//! The growable row-major table.
//!
//! A [`RectTable`] has a column count fixed at construction and a row count
//! that grows one block of rows at a time. Storage is a single `Vec<T>`;
//! cell `(row, col)` lives at offset `row * column_count + col`.
//!
//! The *logical* extent (`row_count`) may be smaller than the *allocated*
//! extent (`size() / column_count`) after [`RectTable::set_row_count`]
//! shrinks it. All accessors check against the logical extent.

use std::ops::{Index, IndexMut};

use crate::builder::RowBuilder;
use crate::error::TableError;
use crate::sentinel::Unset;

/// Dense, row-major table with a fixed column count and growable row count.
///
/// `Clone` produces an independent deep copy. There is deliberately no API
/// for overwriting one table's contents with another's; build or clone a
/// new table instead.
#[derive(Clone, Debug)]
pub struct RectTable<T> {
    /// Backing store. Holds at least `rows * cols` elements.
    data: Vec<T>,
    /// Column count. Always positive, never changes.
    cols: usize,
    /// Logical row count.
    rows: usize,
}

impl<T> RectTable<T> {
    /// Create an empty table with storage reserved for `row_capacity` rows.
    ///
    /// # Panics
    ///
    /// Panics if `column_count` is zero or the requested capacity
    /// overflows.
    pub fn with_capacity(column_count: usize, row_capacity: usize) -> Self {
        assert!(column_count > 0, "{}", TableError::ZeroColumns);
        let elements = row_capacity
            .checked_mul(column_count)
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    TableError::CapacityOverflow {
                        rows: row_capacity,
                        cols: column_count,
                    }
                )
            });
        Self {
            data: Vec::with_capacity(elements),
            cols: column_count,
            rows: 0,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Number of logical rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Total number of elements in the backing store.
    ///
    /// Equals `row_count() * column_count()` unless the logical extent was
    /// shrunk with [`set_row_count`](Self::set_row_count) or loose elements
    /// were pushed with [`append_raw`](Self::append_raw).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table has no logical rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Number of complete rows present in the backing store.
    pub fn allocated_rows(&self) -> usize {
        self.data.len() / self.cols
    }

    /// Returns `true` if the store holds exactly `row_count()` rows.
    pub fn is_aligned(&self) -> bool {
        self.data.len() == self.rows * self.cols
    }

    /// Element capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Heap memory held by the backing store, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<T>()
    }

    /// The whole backing store in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Store `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()` or `col >= column_count()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.checked_offset(row, col);
        self.data[offset] = value;
    }

    /// Checked variant of [`set`](Self::set).
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<(), TableError> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Borrow logical row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()`.
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        let start = self.checked_offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow logical row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()`.
    #[track_caller]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = self.checked_offset(row, 0);
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over the logical rows in index order.
    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data[..self.rows * self.cols].chunks_exact(self.cols)
    }

    /// Reinterpret the allocated storage as `rows` logical rows.
    ///
    /// Storage is neither freed nor initialised. Shrinking hides the rows
    /// past the new extent without discarding them; growing exposes rows
    /// that are already present in the store (for example rows completed
    /// with [`append_raw`](Self::append_raw)).
    ///
    /// Returns [`TableError::RowCountExceedsStorage`] if the store does not
    /// hold `rows` complete rows.
    pub fn set_row_count(&mut self, rows: usize) -> Result<(), TableError> {
        let available = self.allocated_rows();
        if rows > available {
            return Err(TableError::RowCountExceedsStorage {
                requested: rows,
                available,
            });
        }
        self.rows = rows;
        Ok(())
    }

    /// Reserve capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Reserve capacity for at least `additional` more rows.
    pub fn reserve_rows(&mut self, additional: usize) {
        self.data.reserve(additional.saturating_mul(self.cols));
    }

    /// Push a single element onto the end of the backing store.
    ///
    /// This ignores the row structure and does not change `row_count()`.
    /// Until the owner restores consistency, `size()` need not be a multiple
    /// of `column_count()`, and [`RowBuilder::finish`] refuses to commit.
    /// A following [`expand`](Self::expand) pads the partial row with
    /// `UNSET`. Prefer [`row_builder`](Self::row_builder).
    pub fn append_raw(&mut self, value: T) {
        self.data.push(value);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize, TableError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(TableError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    #[track_caller]
    fn checked_offset(&self, row: usize, col: usize) -> usize {
        match self.offset(row, col) {
            Ok(offset) => offset,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy> RectTable<T> {
    /// The value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= row_count()` or `col >= column_count()`.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.checked_offset(row, col)]
    }

    /// Checked variant of [`get`](Self::get).
    pub fn try_get(&self, row: usize, col: usize) -> Result<T, TableError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Copy of the whole backing store in row-major order.
    pub fn as_sequence(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Unset> RectTable<T> {
    /// Create a table with `column_count` columns and `initial_rows` rows
    /// of [`Unset::UNSET`].
    ///
    /// # Panics
    ///
    /// Panics if `column_count` is zero.
    pub fn new(column_count: usize, initial_rows: usize) -> Self {
        let mut table = Self::with_capacity(column_count, 0);
        table.expand(initial_rows);
        table
    }

    /// Checked variant of [`new`](Self::new).
    pub fn try_new(column_count: usize, initial_rows: usize) -> Result<Self, TableError> {
        if column_count == 0 {
            return Err(TableError::ZeroColumns);
        }
        if initial_rows.checked_mul(column_count).is_none() {
            return Err(TableError::CapacityOverflow {
                rows: initial_rows,
                cols: column_count,
            });
        }
        Ok(Self::new(column_count, initial_rows))
    }

    /// Append `extra_rows * column_count()` elements of [`Unset::UNSET`]
    /// to the end of the backing store and add `extra_rows` to the logical
    /// row count.
    ///
    /// The store always grows by exactly `extra_rows * column_count()`.
    /// Nothing already in the store is overwritten: elements pushed with
    /// [`append_raw`](Self::append_raw) are kept and become the leading
    /// cells of the first new row, and rows hidden by
    /// [`set_row_count`](Self::set_row_count) stay where they are, so after
    /// a shrink the logical rows map back onto the hidden ones.
    ///
    /// # Panics
    ///
    /// Panics if the resulting element count overflows `usize`.
    pub fn expand(&mut self, extra_rows: usize) {
        if extra_rows == 0 {
            return;
        }
        let end = extra_rows
            .checked_mul(self.cols)
            .and_then(|extra| extra.checked_add(self.data.len()))
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    TableError::CapacityOverflow {
                        rows: self.rows.saturating_add(extra_rows),
                        cols: self.cols,
                    }
                )
            });
        self.data.resize(end, T::UNSET);
        self.rows += extra_rows;
    }

    /// Append a single row of [`Unset::UNSET`].
    pub fn expand_one(&mut self) {
        self.expand(1);
    }

    /// Start staging a new row to append to this table.
    pub fn row_builder(&mut self) -> RowBuilder<'_, T> {
        RowBuilder::new(self)
    }

    /// Append a complete row to an aligned store and return its index.
    pub(crate) fn commit_row(&mut self, values: &[T]) -> usize {
        debug_assert_eq!(values.len(), self.cols);
        debug_assert!(self.is_aligned());
        self.data.extend_from_slice(values);
        self.rows += 1;
        self.rows - 1
    }
}

impl<T> Index<(usize, usize)> for RectTable<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.checked_offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for RectTable<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.checked_offset(row, col);
        &mut self.data[offset]
    }
}
