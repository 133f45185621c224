//! Named Boolean variables.
//!
//! A variable is identified by its name only. Its ordinal position is not
//! stored here: it is the index of the variable in whatever list currently
//! owns it (the reducer's variable list, the input bus slots).

use std::fmt;

/// A named input variable.
///
/// # Invariants
///
/// - The name is non-empty.
/// - Two variables are the same variable iff their names are equal.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Variable(String);

impl Variable {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Variable name must not be empty");
        Variable(name)
    }

    /// Returns the identifier of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable::new(name)
    }
}
