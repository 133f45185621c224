//! Boolean result tables.
//!
//! A table over `n` variables is a column of `2^n` tri-state values indexed
//! by the variable assignment. Variable `0` is the most significant bit of the
//! row index, i.e. the leftmost column of the displayed truth table:
//!
//! ```text
//! row  A B | Y
//!   0  0 0 | .
//!   1  0 1 | .
//!   2  1 0 | .
//!   3  1 1 | .
//! ```

use std::fmt;
use std::ops::Index;

/// Value of a single table row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TableValue {
    Zero,
    One,
    /// The row imposes no constraint on the result.
    DontCare,
}

impl TableValue {
    /// Check whether two values can describe the same function.
    ///
    /// Don't-care is compatible with anything.
    pub fn is_compatible(self, other: TableValue) -> bool {
        self == other || self == TableValue::DontCare || other == TableValue::DontCare
    }

    pub fn is_dont_care(self) -> bool {
        self == TableValue::DontCare
    }

    /// Combine two compatible values into the one honouring both.
    ///
    /// The result is a don't-care only when both inputs are.
    pub fn merge(self, other: TableValue) -> TableValue {
        if self.is_dont_care() {
            other
        } else {
            self
        }
    }
}

impl From<bool> for TableValue {
    fn from(value: bool) -> Self {
        if value {
            TableValue::One
        } else {
            TableValue::Zero
        }
    }
}

impl fmt::Display for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableValue::Zero => write!(f, "0"),
            TableValue::One => write!(f, "1"),
            TableValue::DontCare => write!(f, "x"),
        }
    }
}

/// Read-only access to a result column.
pub trait BoolTable {
    /// Number of rows, always a power of two.
    fn size(&self) -> usize;

    /// Value at the given row.
    fn get(&self, row: usize) -> TableValue;

    /// Number of variables spanning the row index.
    fn var_count(&self) -> usize {
        self.size().trailing_zeros() as usize
    }
}

/// Owned result column.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ValueTable {
    values: Vec<TableValue>,
}

impl ValueTable {
    /// Create a table from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows is not a power of two.
    pub fn new(values: Vec<TableValue>) -> Self {
        assert!(
            values.len().is_power_of_two(),
            "Table size must be a power of two, got {}",
            values.len()
        );
        Self { values }
    }

    /// Create a table from plain Boolean rows.
    pub fn from_bools(values: &[bool]) -> Self {
        Self::new(values.iter().map(|&b| b.into()).collect())
    }

    /// Create a table over `vars` variables by evaluating `f` on every row index.
    pub fn from_fn(vars: usize, f: impl Fn(usize) -> TableValue) -> Self {
        assert!(vars < usize::BITS as usize, "Too many variables: {}", vars);
        Self::new((0..1usize << vars).map(f).collect())
    }

    /// Copy any table into an owned one.
    pub fn from_table<T: BoolTable + ?Sized>(table: &T) -> Self {
        Self::new((0..table.size()).map(|row| table.get(row)).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[TableValue] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = TableValue> + '_ {
        self.values.iter().copied()
    }
}

impl BoolTable for ValueTable {
    fn size(&self) -> usize {
        self.values.len()
    }

    fn get(&self, row: usize) -> TableValue {
        self.values[row]
    }
}

impl Index<usize> for ValueTable {
    type Output = TableValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
