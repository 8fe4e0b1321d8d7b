use std::collections::BTreeSet;

use super::errors::DashboardError;

///
/// Selected rows of a result table of fixed length.
///
/// Indices are kept ordered, so iteration is always ascending regardless of
/// the order rows were checked in.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    rows: BTreeSet<usize>,
    len: usize,
}

impl Selection {
    /// An empty selection over a table of `len` rows.
    pub fn new(len: usize) -> Self {
        Selection {
            rows: BTreeSet::new(),
            len,
        }
    }

    ///
    /// Flip the checked state of one row.
    ///
    /// # Returns
    /// - whether the row is selected after the call
    ///
    pub fn toggle(&mut self, index: usize) -> Result<bool, DashboardError> {
        if index >= self.len {
            return Err(DashboardError::RowOutOfRange {
                index,
                len: self.len,
            });
        }

        if self.rows.remove(&index) {
            Ok(false)
        } else {
            self.rows.insert(index);
            Ok(true)
        }
    }

    pub fn select_all(&mut self) {
        self.rows = (0..self.len).collect();
    }

    pub fn deselect_all(&mut self) {
        self.rows.clear();
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows in the underlying table.
    pub fn table_len(&self) -> usize {
        self.len
    }

    pub fn all_selected(&self) -> bool {
        self.len > 0 && self.rows.len() == self.len
    }
}
