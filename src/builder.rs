//! Expression-to-circuit synthesis.
//!
//! The [`Builder`] accepts any number of named expressions. Each one is
//! lowered, measured and placed as its own subtree, stacked below the
//! previous ones. [`Builder::create_circuit`] then adds the input bus: one
//! input terminal and one inverter per distinct variable, each driving a
//! vertical rail, and a horizontal wire from every variable leaf to the
//! plain or inverted rail of its variable.
//!
//! # Examples
//!
//! ```
//! use logic_builder::builder::Builder;
//! use logic_builder::expr::Expression;
//! use logic_builder::gate::NodeKind;
//!
//! let a = Expression::var("A");
//! let b = Expression::var("B");
//! let y = Expression::or([Expression::not(a), b]);
//!
//! let circuit = Builder::new()
//!     .add_expression("Y", &y)?
//!     .create_circuit()?;
//!
//! assert_eq!(circuit.nodes_of(NodeKind::Or(2)).count(), 1);
//! assert_eq!(circuit.nodes_of(NodeKind::Input).count(), 2);
//! # Ok::<(), logic_builder::error::BuildError>(())
//! ```

use std::collections::HashMap;

use log::debug;

use crate::circuit::{AttrKey, AttrValue, Circuit, Node, Rotation, Wire};
use crate::error::{BuildError, Result};
use crate::expr::Expression;
use crate::fragment::{Fragment, PlacedLeaf};
use crate::gate::NodeKind;
use crate::geometry::Vector;
use crate::shape::{GenericShapes, ShapeFactory};
use crate::types::Variable;

/// Default grid size.
pub const SIZE: i32 = 20;

/// Configuration of the default builder.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Grid cell size (default: 20)
    pub size: i32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { size: SIZE }
    }
}

pub struct Builder<S: ShapeFactory = GenericShapes> {
    shapes: S,
    circuit: Circuit,
    /// Top of the next output subtree.
    pos: i32,
    /// Distinct variables in first-seen order; the order of the bus slots.
    variables: Vec<Variable>,
    /// Every variable leaf placed so far, duplicates included.
    leaves: Vec<PlacedLeaf>,
}

impl Builder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_shapes(GenericShapes::new(config.size))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShapeFactory> Builder<S> {
    pub fn with_shapes(shapes: S) -> Self {
        Self {
            shapes,
            circuit: Circuit::new(),
            pos: 0,
            variables: Vec::new(),
            leaves: Vec::new(),
        }
    }

    /// Distinct variables seen so far, in bus slot order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Vertical extent used by the outputs added so far.
    pub fn height(&self) -> i32 {
        self.pos
    }

    /// Add an expression driving the output named `name`.
    ///
    /// The subtree is placed below all previously added ones, followed by one
    /// grid cell of padding.
    pub fn add_expression(mut self, name: &str, expression: &Expression) -> Result<Self> {
        let mut registry = Vec::new();
        let fragment = Fragment::lower(expression, &mut registry)?;
        debug!(
            "lowered {} = {}: {} leaves, {} variables",
            name,
            expression,
            fragment.leaf_count(),
            registry.len()
        );

        let root = Fragment::output(name, fragment).measure(&self.shapes);
        root.place(Vector::new(0, self.pos), &mut self.circuit, &mut self.leaves);
        self.pos += root.extent().height + self.shapes.size();

        for variable in registry {
            if !self.variables.contains(&variable) {
                self.variables.push(variable);
            }
        }
        Ok(self)
    }

    /// Add the input bus and return the finished circuit.
    pub fn create_circuit(mut self) -> Result<Circuit> {
        self.create_input_bus()?;
        Ok(self.circuit)
    }

    fn attach(&self, node: Node, key: AttrKey, value: AttrValue) -> Node {
        assert!(
            self.shapes.supports(node.kind(), key),
            "{} does not support {:?}",
            node.kind(),
            key
        );
        node.with_attr(key, value)
    }

    fn create_input_bus(&mut self) -> Result<()> {
        let s = self.shapes.size();
        let bottom = self.pos;
        let mut dx = -(self.variables.len() as i32) * s * 2;
        debug!("input bus: {} slots starting at x = {}", self.variables.len(), dx);

        let mut rails: HashMap<&Variable, i32> = HashMap::new();
        let mut nodes = Vec::with_capacity(2 * self.variables.len());
        let mut wires = Vec::with_capacity(4 * self.variables.len() + self.leaves.len());
        for variable in &self.variables {
            let input = Node::new(NodeKind::Input, Vector::new(dx, -5 * s));
            let input = self.attach(input, AttrKey::Rotation, AttrValue::Rotation(Rotation::new(3)));
            let input = self.attach(input, AttrKey::Label, AttrValue::Text(variable.name().to_string()));
            nodes.push(input);

            let inverter = Node::new(NodeKind::Not, Vector::new(dx + s, -3 * s));
            nodes.push(self.attach(inverter, AttrKey::Rotation, AttrValue::Rotation(Rotation::new(3))));

            wires.push(Wire::new(Vector::new(dx, -4 * s), Vector::new(dx + s, -4 * s)));
            wires.push(Wire::new(Vector::new(dx + s, -3 * s), Vector::new(dx + s, -4 * s)));
            wires.push(Wire::new(Vector::new(dx, -5 * s), Vector::new(dx, bottom)));
            wires.push(Wire::new(Vector::new(dx + s, -s), Vector::new(dx + s, bottom)));

            rails.insert(variable, dx);
            dx += 2 * s;
        }

        for leaf in &self.leaves {
            let base = rails
                .get(&leaf.variable)
                .copied()
                .ok_or_else(|| BuildError::UnregisteredVariable {
                    name: leaf.variable.name().to_string(),
                })?;
            let rail = if leaf.negated { base + s } else { base };
            wires.push(Wire::new(leaf.pos, Vector::new(rail, leaf.pos.y)));
        }

        for node in nodes {
            self.circuit.add_node(node);
        }
        for wire in wires {
            self.circuit.add_wire(wire);
        }
        Ok(())
    }
}
