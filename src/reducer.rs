//! Removal of variables the result does not depend on.
//!
//! The reducer sweeps the variable list once, left to right. Each variable is
//! checked against the table as reduced so far; an independent variable is
//! dropped together with its index bit, so the next variable takes over its
//! ordinal. Variables kept earlier in the sweep are not revisited.

use log::debug;

use crate::independent::IndependentChecker;
use crate::table::{BoolTable, ValueTable};
use crate::types::Variable;

pub struct TableReducer {
    vars: Vec<Variable>,
    table: ValueTable,
}

impl TableReducer {
    /// Create a reducer over a copy of the given variables and table.
    ///
    /// # Panics
    ///
    /// Panics if the table does not span exactly `vars.len()` variables.
    pub fn new<T: BoolTable + ?Sized>(vars: &[Variable], table: &T) -> Self {
        let table = ValueTable::from_table(table);
        assert_eq!(
            table.var_count(),
            vars.len(),
            "Table with {} rows does not match {} variables",
            table.len(),
            vars.len()
        );
        Self {
            vars: vars.to_vec(),
            table,
        }
    }

    /// Run the reduction sweep.
    ///
    /// Returns `true` if at least one variable was removed.
    pub fn can_reduce(&mut self) -> bool {
        let (vars, table, reduced) = self.vars.iter().fold(
            (Vec::with_capacity(self.vars.len()), self.table.clone(), false),
            |(mut kept, table, reduced), var| {
                // Kept variables occupy the ordinals before the current one.
                let ordinal = kept.len();
                let checker = IndependentChecker::new(&table);
                if checker.is_independent_from(ordinal) {
                    debug!("removing variable {} at ordinal {}", var, ordinal);
                    let table = checker.remove_var(ordinal);
                    (kept, table, true)
                } else {
                    kept.push(var.clone());
                    (kept, table, reduced)
                }
            },
        );
        debug!("reduced {} -> {} variables", self.vars.len(), vars.len());
        self.vars = vars;
        self.table = table;
        reduced
    }

    /// The remaining variables.
    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    /// The reduced table.
    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    pub fn into_parts(self) -> (Vec<Variable>, ValueTable) {
        (self.vars, self.table)
    }
}
