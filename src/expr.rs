use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::types::Variable;

/// Boolean expression tree.
///
/// This is the shape produced by table minimization. The circuit builder
/// only lowers [`Variable`][Expression::Variable], [`Not`][Expression::Not],
/// [`And`][Expression::And] and [`Or`][Expression::Or]; the remaining
/// variants are rejected at lowering time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    Variable(Variable),
    Constant(bool),
    Not(Box<Expression>),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Xor(Vec<Expression>),
}

// Constructors
impl Expression {
    pub fn var(variable: impl Into<Variable>) -> Self {
        Expression::Variable(variable.into())
    }

    pub fn constant(value: bool) -> Self {
        Expression::Constant(value)
    }

    pub fn not(value: Self) -> Self {
        Expression::Not(Box::new(value))
    }

    pub fn and(operands: impl IntoIterator<Item = Self>) -> Self {
        Expression::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Self>) -> Self {
        Expression::Or(operands.into_iter().collect())
    }

    pub fn xor(operands: impl IntoIterator<Item = Self>) -> Self {
        Expression::Xor(operands.into_iter().collect())
    }
}

// Traversal
impl Expression {
    /// Short name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Variable(_) => "variable",
            Expression::Constant(_) => "constant",
            Expression::Not(_) => "not",
            Expression::And(_) => "and",
            Expression::Or(_) => "or",
            Expression::Xor(_) => "xor",
        }
    }

    /// Visit every node in pre-order, operands left to right.
    pub fn traverse<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Expression),
    {
        visit(self);
        match self {
            Expression::Variable(_) | Expression::Constant(_) => {}
            Expression::Not(inner) => inner.traverse(visit),
            Expression::And(operands) | Expression::Or(operands) | Expression::Xor(operands) => {
                for operand in operands {
                    operand.traverse(visit);
                }
            }
        }
    }

    /// Distinct variables, in the order they are first seen during traversal.
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        self.traverse(&mut |e| {
            if let Expression::Variable(v) = e {
                if seen.insert(v) {
                    result.push(v.clone());
                }
            }
        });
        result
    }

    /// Number of variable references, counting duplicates.
    pub fn occurrences(&self) -> usize {
        let mut count = 0;
        self.traverse(&mut |e| {
            if matches!(e, Expression::Variable(_)) {
                count += 1;
            }
        });
        count
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (operands, sep) = match self {
            Expression::Variable(v) => return write!(f, "{}", v),
            Expression::Constant(c) => return write!(f, "{}", if *c { "1" } else { "0" }),
            Expression::Not(inner) => return write!(f, "!{}", inner),
            Expression::And(operands) => (operands, " & "),
            Expression::Or(operands) => (operands, " | "),
            Expression::Xor(operands) => (operands, " ^ "),
        };
        write!(f, "(")?;
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", sep)?;
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}
