use std::fmt::{Display, Formatter};

/// Kind of a placed circuit node.
///
/// Gate kinds record their arity so the shape catalog can size the symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Circuit input terminal.
    Input,
    /// Labeled circuit output terminal.
    Output,
    Not,
    And(usize),
    Or(usize),
}

// Constructors
impl NodeKind {
    /// N-input AND gate.
    ///
    /// # Panics
    ///
    /// Panics if `inputs == 0`.
    pub fn andn(inputs: usize) -> NodeKind {
        assert!(inputs > 0, "AND gate needs at least one input");
        NodeKind::And(inputs)
    }

    /// N-input OR gate.
    ///
    /// # Panics
    ///
    /// Panics if `inputs == 0`.
    pub fn orn(inputs: usize) -> NodeKind {
        assert!(inputs > 0, "OR gate needs at least one input");
        NodeKind::Or(inputs)
    }
}

// Getters
impl NodeKind {
    /// Number of input pins.
    pub fn inputs(&self) -> usize {
        match self {
            NodeKind::Input => 0,
            NodeKind::Output | NodeKind::Not => 1,
            NodeKind::And(n) | NodeKind::Or(n) => *n,
        }
    }

    /// Whether the node drives a signal.
    pub fn has_output(&self) -> bool {
        !matches!(self, NodeKind::Output)
    }

    pub fn is_gate(&self) -> bool {
        matches!(self, NodeKind::Not | NodeKind::And(_) | NodeKind::Or(_))
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Input => write!(f, "In"),
            NodeKind::Output => write!(f, "Out"),
            NodeKind::Not => write!(f, "Not"),
            NodeKind::And(n) => write!(f, "And{}", n),
            NodeKind::Or(n) => write!(f, "Or{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_and() {
        let gate = NodeKind::andn(3);
        assert_eq!(gate.inputs(), 3);
        assert!(gate.has_output());
        assert!(gate.is_gate());
        assert_eq!(gate.to_string(), "And3");
    }

    #[test]
    fn test_terminals() {
        assert_eq!(NodeKind::Input.inputs(), 0);
        assert_eq!(NodeKind::Output.inputs(), 1);
        assert!(!NodeKind::Output.has_output());
        assert!(!NodeKind::Input.is_gate());
    }

    #[test]
    #[should_panic(expected = "at least one input")]
    fn test_empty_or_panics() {
        NodeKind::orn(0);
    }
}
