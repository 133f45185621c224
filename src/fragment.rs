//! Intermediate gate tree between an [`Expression`] and the placed circuit.
//!
//! Synthesis runs in three steps, each with its own type:
//!
//! 1. [`Fragment::lower`] mirrors the expression as a tree of gates and
//!    variable leaves.
//! 2. [`Fragment::measure`] computes, bottom-up, the extent of every subtree
//!    and the relative offsets of children, gate symbols and output pins.
//!    The result is a [`MeasuredFragment`].
//! 3. [`MeasuredFragment::place`] walks the measured tree top-down, adding
//!    nodes and wires at absolute positions.
//!
//! Only a measured fragment can be placed, so placement never sees a subtree
//! whose layout has not been computed.
//!
//! Layout grows to the right: variable leaves sit in the leftmost column of
//! their subtree, each gate to the right of its widest operand, operands
//! stacked top to bottom in order with one grid cell between them.

use log::{debug, trace};

use crate::circuit::{AttrKey, AttrValue, Circuit, Node, Wire};
use crate::error::{BuildError, Result};
use crate::expr::Expression;
use crate::gate::NodeKind;
use crate::geometry::{Extent, Vector};
use crate::shape::{Shape, ShapeFactory};
use crate::types::Variable;

/// Lowered, not yet measured, gate tree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Fragment {
    /// Reference to an input, optionally through the bus inverter.
    Variable { variable: Variable, negated: bool },
    /// Gate fed by the child fragments, in operand order.
    Gate { kind: NodeKind, children: Vec<Fragment> },
    /// Labeled output terminal wrapping the whole tree.
    Output { label: String, child: Box<Fragment> },
}

impl Fragment {
    /// Lower an expression into a gate tree.
    ///
    /// Every variable leaf registers its variable in `registry` (distinct,
    /// first-seen order). Negation of a bare variable is absorbed into the
    /// leaf; the input bus supplies the inverted signal.
    pub fn lower(expression: &Expression, registry: &mut Vec<Variable>) -> Result<Fragment> {
        match expression {
            Expression::And(operands) => Self::lower_gate(expression, operands, NodeKind::andn, registry),
            Expression::Or(operands) => Self::lower_gate(expression, operands, NodeKind::orn, registry),
            Expression::Not(inner) => match inner.as_ref() {
                Expression::Variable(variable) => Ok(Self::leaf(variable, true, registry)),
                other => {
                    let child = Self::lower(other, registry)?;
                    Ok(Fragment::Gate {
                        kind: NodeKind::Not,
                        children: vec![child],
                    })
                }
            },
            Expression::Variable(variable) => Ok(Self::leaf(variable, false, registry)),
            Expression::Constant(_) | Expression::Xor(_) => Err(BuildError::UnsupportedExpression {
                kind: expression.kind_name(),
                expression: expression.to_string(),
            }),
        }
    }

    fn lower_gate(
        expression: &Expression,
        operands: &[Expression],
        kind: fn(usize) -> NodeKind,
        registry: &mut Vec<Variable>,
    ) -> Result<Fragment> {
        if operands.is_empty() {
            return Err(BuildError::EmptyOperation {
                kind: expression.kind_name(),
            });
        }
        let children = operands
            .iter()
            .map(|operand| Self::lower(operand, registry))
            .collect::<Result<Vec<_>>>()?;
        Ok(Fragment::Gate {
            kind: kind(children.len()),
            children,
        })
    }

    fn leaf(variable: &Variable, negated: bool, registry: &mut Vec<Variable>) -> Fragment {
        if !registry.contains(variable) {
            registry.push(variable.clone());
        }
        Fragment::Variable {
            variable: variable.clone(),
            negated,
        }
    }

    /// Wrap a tree in a labeled output terminal.
    pub fn output(label: impl Into<String>, child: Fragment) -> Fragment {
        Fragment::Output {
            label: label.into(),
            child: Box::new(child),
        }
    }

    /// Number of variable leaves, counting repeated variables.
    pub fn leaf_count(&self) -> usize {
        match self {
            Fragment::Variable { .. } => 1,
            Fragment::Gate { children, .. } => children.iter().map(Fragment::leaf_count).sum(),
            Fragment::Output { child, .. } => child.leaf_count(),
        }
    }

    /// Compute extents and relative offsets for the whole tree.
    pub fn measure<S: ShapeFactory + ?Sized>(self, shapes: &S) -> MeasuredFragment {
        let s = shapes.size();
        match self {
            Fragment::Variable { variable, negated } => MeasuredFragment {
                extent: Extent::new(s, s),
                pin: Vector::default(),
                content: Measured::Variable { variable, negated },
            },
            Fragment::Gate { kind, children } => {
                let shape = shapes.shape(kind);
                let mut y = 0;
                let mut children_width = 0;
                let children: Vec<(Vector, MeasuredFragment)> = children
                    .into_iter()
                    .map(|child| {
                        let child = child.measure(shapes);
                        let offset = Vector::new(0, y);
                        y += child.extent.height + s;
                        children_width = children_width.max(child.extent.width);
                        (offset, child)
                    })
                    .collect();
                let stack_height = y - s;
                let gate_offset = Vector::new(children_width + s, 0);
                let pin = gate_offset + shape.output.unwrap_or_default();
                let extent = Extent::new(
                    children_width + s + shape.footprint.width,
                    stack_height.max(shape.footprint.height),
                );
                trace!("measured {} with {} operands: {:?}", kind, children.len(), extent);
                MeasuredFragment {
                    extent,
                    pin,
                    content: Measured::Gate {
                        kind,
                        shape,
                        gate_offset,
                        children,
                    },
                }
            }
            Fragment::Output { label, child } => {
                assert!(
                    shapes.supports(NodeKind::Output, AttrKey::Label),
                    "Shape catalog cannot label output terminals"
                );
                let shape = shapes.shape(NodeKind::Output);
                let child = child.measure(shapes);
                // The label takes the top row; the tree starts one row below.
                let child_offset = Vector::new(0, s);
                let node_offset = Vector::new(child.extent.width + s, s + child.pin.y);
                let extent = Extent::new(
                    child.extent.width + s + shape.footprint.width,
                    child.extent.height + s,
                );
                debug!("measured output {}: {:?}", label, extent);
                MeasuredFragment {
                    extent,
                    pin: node_offset,
                    content: Measured::Output {
                        label,
                        shape,
                        node_offset,
                        child_offset,
                        child: Box::new(child),
                    },
                }
            }
        }
    }
}

/// Variable leaf at its final position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacedLeaf {
    pub variable: Variable,
    pub negated: bool,
    pub pos: Vector,
}

/// Gate tree with known extents, ready to be placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MeasuredFragment {
    extent: Extent,
    /// Output pin, relative to the top-left corner.
    pin: Vector,
    content: Measured,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Measured {
    Variable {
        variable: Variable,
        negated: bool,
    },
    Gate {
        kind: NodeKind,
        shape: Shape,
        gate_offset: Vector,
        children: Vec<(Vector, MeasuredFragment)>,
    },
    Output {
        label: String,
        shape: Shape,
        node_offset: Vector,
        child_offset: Vector,
        child: Box<MeasuredFragment>,
    },
}

impl MeasuredFragment {
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Output pin relative to the top-left corner.
    pub fn pin(&self) -> Vector {
        self.pin
    }

    /// Add the tree to `circuit` with its top-left corner at `pos`.
    ///
    /// Each node is added before its operands. Leaves are appended to
    /// `leaves` in operand order. Returns the absolute output pin.
    pub fn place(&self, pos: Vector, circuit: &mut Circuit, leaves: &mut Vec<PlacedLeaf>) -> Vector {
        match &self.content {
            Measured::Variable { variable, negated } => {
                trace!("leaf {}{} at {}", if *negated { "!" } else { "" }, variable, pos);
                leaves.push(PlacedLeaf {
                    variable: variable.clone(),
                    negated: *negated,
                    pos,
                });
            }
            Measured::Gate {
                kind,
                shape,
                gate_offset,
                children,
            } => {
                let gate_pos = pos + *gate_offset;
                trace!("gate {} at {}", kind, gate_pos);
                circuit.add_node(Node::new(*kind, gate_pos));
                for (i, (offset, child)) in children.iter().enumerate() {
                    let child_pin = child.place(pos + *offset, circuit, leaves);
                    circuit.add_wire(Wire::new(gate_pos + shape.input(i), child_pin));
                }
            }
            Measured::Output {
                label,
                shape,
                node_offset,
                child_offset,
                child,
            } => {
                let node_pos = pos + *node_offset;
                circuit.add_node(
                    Node::new(NodeKind::Output, node_pos).with_attr(AttrKey::Label, AttrValue::Text(label.clone())),
                );
                let child_pin = child.place(pos + *child_offset, circuit, leaves);
                circuit.add_wire(Wire::new(child_pin, node_pos + shape.input(0)));
            }
        }
        pos + self.pin
    }
}
