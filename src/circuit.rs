//! The synthesized circuit: placed nodes and straight wires.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::gate::NodeKind;
use crate::geometry::Vector;

/// Attribute names a node may carry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AttrKey {
    Label,
    Rotation,
}

/// Rotation in quarter turns, counter-clockwise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub fn new(quarter_turns: u8) -> Self {
        Rotation(quarter_turns % 4)
    }

    pub fn quarter_turns(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum AttrValue {
    Text(String),
    Rotation(Rotation),
}

/// A placed node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    kind: NodeKind,
    pos: Vector,
    attrs: BTreeMap<AttrKey, AttrValue>,
}

impl Node {
    pub fn new(kind: NodeKind, pos: Vector) -> Self {
        Self {
            kind,
            pos,
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attr(mut self, key: AttrKey, value: AttrValue) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn attr(&self, key: AttrKey) -> Option<&AttrValue> {
        self.attrs.get(&key)
    }

    pub fn attrs(&self) -> &BTreeMap<AttrKey, AttrValue> {
        &self.attrs
    }

    pub fn label(&self) -> Option<&str> {
        match self.attr(AttrKey::Label) {
            Some(AttrValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn rotation(&self) -> Option<Rotation> {
        match self.attr(AttrKey::Rotation) {
            Some(AttrValue::Rotation(r)) => Some(*r),
            _ => None,
        }
    }
}

/// A straight wire between two absolute points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Wire {
    pub p1: Vector,
    pub p2: Vector,
}

impl Wire {
    pub fn new(p1: Vector, p2: Vector) -> Self {
        Self { p1, p2 }
    }

    /// Check whether the wire ends at `p`.
    pub fn touches(&self, p: Vector) -> bool {
        self.p1 == p || self.p2 == p
    }

    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }
}

/// Nodes and wires in insertion order.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Circuit {
    nodes: Vec<Node>,
    wires: Vec<Wire>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_wire(&mut self, wire: Wire) {
        self.wires.push(wire);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Nodes of the given kind.
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Node carrying the given label, if any.
    pub fn find_label(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label() == Some(label))
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "circuit: {} nodes, {} wires", self.nodes.len(), self.wires.len())?;
        for node in &self.nodes {
            write!(f, "  {} at {}", node.kind, node.pos)?;
            if let Some(label) = node.label() {
                write!(f, " \"{}\"", label)?;
            }
            writeln!(f)?;
        }
        for wire in &self.wires {
            writeln!(f, "  wire {} - {}", wire.p1, wire.p2)?;
        }
        Ok(())
    }
}
