//! Shape catalog: pin geometry and recognized attributes per node kind.
//!
//! All pin offsets are relative to the node position. The builder only
//! relies on the pins and the footprint; how a shape is drawn is up to the
//! renderer.

use crate::circuit::AttrKey;
use crate::gate::NodeKind;
use crate::geometry::{Extent, Vector};

/// Pin geometry of a node kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Shape {
    /// Input pins, in operand order.
    pub inputs: Vec<Vector>,
    /// Output pin, absent for sinks.
    pub output: Option<Vector>,
    /// Area the symbol occupies.
    pub footprint: Extent,
}

impl Shape {
    /// Position of input pin `index`.
    ///
    /// # Panics
    ///
    /// Panics if the shape has no such pin.
    pub fn input(&self, index: usize) -> Vector {
        assert!(
            index < self.inputs.len(),
            "Shape has {} inputs, requested pin {}",
            self.inputs.len(),
            index
        );
        self.inputs[index]
    }
}

/// Source of shapes for the builder.
pub trait ShapeFactory {
    /// Grid size the shapes are designed for.
    fn size(&self) -> i32;

    /// Arity-appropriate shape of the given kind.
    fn shape(&self, kind: NodeKind) -> Shape;

    /// Whether a node of this kind carries the given attribute.
    fn supports(&self, kind: NodeKind, key: AttrKey) -> bool {
        match key {
            AttrKey::Label => matches!(kind, NodeKind::Input | NodeKind::Output),
            AttrKey::Rotation => true,
        }
    }
}

/// Default catalog: rectangular gates on a square grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GenericShapes {
    size: i32,
}

impl GenericShapes {
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "Grid size must be positive, got {}", size);
        Self { size }
    }
}

impl Default for GenericShapes {
    fn default() -> Self {
        GenericShapes::new(crate::builder::SIZE)
    }
}

impl ShapeFactory for GenericShapes {
    fn size(&self) -> i32 {
        self.size
    }

    fn shape(&self, kind: NodeKind) -> Shape {
        let s = self.size;
        match kind {
            NodeKind::Input => Shape {
                inputs: vec![],
                output: Some(Vector::new(0, 0)),
                footprint: Extent::new(s, s),
            },
            NodeKind::Output => Shape {
                inputs: vec![Vector::new(0, 0)],
                output: None,
                footprint: Extent::new(s, s),
            },
            NodeKind::Not => Shape {
                inputs: vec![Vector::new(0, 0)],
                output: Some(Vector::new(2 * s, 0)),
                footprint: Extent::new(2 * s, s),
            },
            NodeKind::And(n) | NodeKind::Or(n) => {
                let n = n as i32;
                Shape {
                    inputs: (0..n).map(|i| Vector::new(0, i * s)).collect(),
                    output: Some(Vector::new(3 * s, (n / 2) * s)),
                    footprint: Extent::new(3 * s, n * s),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_shape_scales_with_arity() {
        let shapes = GenericShapes::new(20);
        let and3 = shapes.shape(NodeKind::And(3));
        assert_eq!(and3.inputs.len(), 3);
        assert_eq!(and3.input(2), Vector::new(0, 40));
        assert_eq!(and3.output, Some(Vector::new(60, 20)));
        assert_eq!(and3.footprint, Extent::new(60, 60));

        let or2 = shapes.shape(NodeKind::Or(2));
        assert_eq!(or2.output, Some(Vector::new(60, 20)));
        assert_eq!(or2.footprint.height, 40);
    }

    #[test]
    fn test_terminals() {
        let shapes = GenericShapes::default();
        assert_eq!(shapes.size(), 20);
        assert!(shapes.shape(NodeKind::Output).output.is_none());
        assert!(shapes.shape(NodeKind::Input).inputs.is_empty());
        assert_eq!(shapes.shape(NodeKind::Not).output, Some(Vector::new(40, 0)));
    }

    #[test]
    fn test_supported_attributes() {
        let shapes = GenericShapes::default();
        assert!(shapes.supports(NodeKind::Output, AttrKey::Label));
        assert!(!shapes.supports(NodeKind::And(2), AttrKey::Label));
        assert!(shapes.supports(NodeKind::Not, AttrKey::Rotation));
    }

    #[test]
    #[should_panic(expected = "requested pin 1")]
    fn test_missing_pin() {
        GenericShapes::default().shape(NodeKind::Not).input(1);
    }
}
