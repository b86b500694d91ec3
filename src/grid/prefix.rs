//! Hexadecimal row addresses shown left of each panel row

use rand::Rng;
use std::ops::Range;

/// Range the first row's address is drawn from
pub const ADDRESS_RANGE: Range<u32> = 0x1000..0x4000;

/// Consecutive addresses, one per row, continuing across panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressColumn {
    start: u32,
    rows: usize,
}

impl AddressColumn {
    #[must_use]
    pub const fn new(start: u32, rows: usize) -> Self {
        Self { start, rows }
    }

    /// Draw the starting address from [`ADDRESS_RANGE`]
    pub fn random<R: Rng>(rows: usize, rng: &mut R) -> Self {
        Self::new(rng.random_range(ADDRESS_RANGE), rows)
    }

    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Label of the given global row
    ///
    /// # Examples
    /// ```
    /// use wordhack::grid::AddressColumn;
    ///
    /// let column = AddressColumn::new(0x1FFE, 4);
    /// assert_eq!(column.label(0).as_deref(), Some("0x1FFE"));
    /// assert_eq!(column.label(3).as_deref(), Some("0x2001"));
    /// assert_eq!(column.label(4), None);
    /// ```
    #[must_use]
    pub fn label(&self, row: usize) -> Option<String> {
        if row >= self.rows {
            return None;
        }
        let offset = u32::try_from(row).ok()?;
        Some(format!("0x{:X}", self.start.checked_add(offset)?))
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).filter_map(|row| self.label(row))
    }
}
