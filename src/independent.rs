//! Detection and removal of variables a table does not depend on.

use log::trace;

use crate::table::{BoolTable, TableValue, ValueTable};

/// Checks whether a table's result depends on a given variable.
///
/// Rows are compared pairwise: for variable `v`, row `r` with bit `v` clear
/// is paired with the same row with bit `v` set. The variable is independent
/// iff every pair is [compatible][TableValue::is_compatible].
pub struct IndependentChecker<'a, T: BoolTable + ?Sized> {
    table: &'a T,
    vars: usize,
}

impl<'a, T: BoolTable + ?Sized> IndependentChecker<'a, T> {
    pub fn new(table: &'a T) -> Self {
        assert!(
            table.size().is_power_of_two(),
            "Table size must be a power of two, got {}",
            table.size()
        );
        let vars = table.var_count();
        Self { table, vars }
    }

    /// Number of variables of the checked table.
    pub fn vars(&self) -> usize {
        self.vars
    }

    fn bit_mask(&self, var: usize) -> usize {
        assert!(
            var < self.vars,
            "Variable {} out of range for {}-variable table",
            var,
            self.vars
        );
        1 << (self.vars - var - 1)
    }

    /// Check whether flipping variable `var` never changes the result.
    pub fn is_independent_from(&self, var: usize) -> bool {
        let bit = self.bit_mask(var);
        low_rows(self.table.size(), bit).all(|row| {
            let low = self.table.get(row);
            let high = self.table.get(row | bit);
            let ok = low.is_compatible(high);
            if !ok {
                trace!("var {} matters: row {} = {}, row {} = {}", var, row, low, row | bit, high);
            }
            ok
        })
    }

    /// Drop variable `var` from the index space.
    ///
    /// Each pair of rows differing only in `var` collapses into one row
    /// carrying the [merged][TableValue::merge] value, so a care value is
    /// never lost to a don't-care partner. Only meaningful when
    /// [`is_independent_from`][Self::is_independent_from] holds for `var`.
    pub fn remove_var(&self, var: usize) -> ValueTable {
        let bit = self.bit_mask(var);
        let values: Vec<TableValue> = low_rows(self.table.size(), bit)
            .map(|row| self.table.get(row).merge(self.table.get(row | bit)))
            .collect();
        ValueTable::new(values)
    }
}

/// Row indices with `bit` clear, in ascending order.
fn low_rows(size: usize, bit: usize) -> impl Iterator<Item = usize> {
    let low_mask = bit - 1;
    let high_mask = !low_mask;
    (0..size / 2).map(move |i| (i & low_mask) | ((i & high_mask) << 1))
}
