//! # logic-builder: from truth tables to gate circuits
//!
//! **`logic-builder`** is the synthesis core of a logic-design tool. It covers two independent steps:
//!
//! - **Variable reduction**: detect inputs the result of a truth table does not depend on, and drop them
//!   together with their half of the table.
//! - **Circuit synthesis**: compile minimized Boolean expressions into a placed circuit of gates and wires,
//!   with a shared input bus that supplies every variable both plain and inverted.
//!
//! ## Reducing a table
//!
//! ```rust
//! use logic_builder::reducer::TableReducer;
//! use logic_builder::table::ValueTable;
//! use logic_builder::types::Variable;
//!
//! // Y = A, over variables (A, B)
//! let vars = [Variable::new("A"), Variable::new("B")];
//! let table = ValueTable::from_bools(&[false, false, true, true]);
//!
//! let mut reducer = TableReducer::new(&vars, &table);
//! assert!(reducer.can_reduce());
//! assert_eq!(reducer.vars(), &[Variable::new("A")]);
//! assert_eq!(reducer.table(), &ValueTable::from_bools(&[false, true]));
//! ```
//!
//! ## Building a circuit
//!
//! ```rust
//! use logic_builder::builder::Builder;
//! use logic_builder::expr::Expression;
//! use logic_builder::gate::NodeKind;
//!
//! let a = || Expression::var("A");
//! let b = || Expression::var("B");
//! let y = Expression::and([a(), Expression::not(b())]);
//!
//! let circuit = Builder::new().add_expression("Y", &y)?.create_circuit()?;
//! assert_eq!(circuit.nodes_of(NodeKind::And(2)).count(), 1);
//! assert_eq!(circuit.find_label("Y").map(|n| n.kind()), Some(NodeKind::Output));
//! # Ok::<(), logic_builder::error::BuildError>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`reducer`]** and **[`independent`]**: variable reduction over a [`table::BoolTable`].
//! - **[`fragment`]**: lowering of an [`expr::Expression`] into a gate tree, and its layout.
//! - **[`builder`]**: placement of several outputs and the input bus.
//! - **[`circuit`]**: the produced nodes and wires.

pub mod builder;
pub mod circuit;
pub mod error;
pub mod expr;
pub mod fragment;
pub mod gate;
pub mod geometry;
pub mod independent;
pub mod reducer;
pub mod shape;
pub mod table;
pub mod types;
