//! End-to-end tests for table reduction and circuit synthesis.

use std::collections::HashMap;

use logic_builder::builder::Builder;
use logic_builder::circuit::Circuit;
use logic_builder::error::BuildError;
use logic_builder::expr::Expression;
use logic_builder::fragment::Fragment;
use logic_builder::gate::NodeKind;
use logic_builder::geometry::Vector;
use logic_builder::independent::IndependentChecker;
use logic_builder::reducer::TableReducer;
use logic_builder::table::{BoolTable, TableValue, ValueTable};
use logic_builder::types::Variable;

fn a() -> Expression {
    Expression::var("A")
}

fn b() -> Expression {
    Expression::var("B")
}

fn c() -> Expression {
    Expression::var("C")
}

fn not(e: Expression) -> Expression {
    Expression::not(e)
}

/// `!(A & !B & C) | (!A & C) | (B & !C)`
fn example() -> Expression {
    Expression::or([
        not(Expression::and([a(), not(b()), c()])),
        Expression::and([not(a()), c()]),
        Expression::and([b(), not(c())]),
    ])
}

/// Bus rails by x coordinate: plain rail at the slot base, inverted one cell right.
fn rails(circuit: &Circuit) -> HashMap<i32, (String, bool)> {
    let mut rails = HashMap::new();
    for input in circuit.nodes_of(NodeKind::Input) {
        let name = input.label().unwrap().to_string();
        rails.insert(input.pos().x, (name.clone(), false));
        rails.insert(input.pos().x + 20, (name, true));
    }
    rails
}

// ─── Reduction ─────────────────────────────────────────────────────────────────

#[test]
fn reducer_drops_ignored_variable() {
    let vars = [Variable::new("A"), Variable::new("B")];
    let table = ValueTable::from_fn(2, |row| (row >> 1 == 1).into());

    let mut reducer = TableReducer::new(&vars, &table);
    assert!(reducer.can_reduce());
    assert_eq!(reducer.vars(), &[Variable::new("A")]);
    assert_eq!(reducer.table().len(), 2);
    assert_eq!(reducer.table().values(), &[TableValue::Zero, TableValue::One]);
}

#[test]
fn reduction_is_sound_and_halves() {
    // Y = (A & C) | D over (A, B, C, D) with a few don't-cares where B=1.
    let f = |row: usize| {
        let bit = |i: usize| (row >> (3 - i)) & 1 == 1;
        if bit(1) && row % 5 == 0 {
            TableValue::DontCare
        } else {
            ((bit(0) && bit(2)) || bit(3)).into()
        }
    };
    let table = ValueTable::from_fn(4, f);
    let checker = IndependentChecker::new(&table);
    for v in 0..4 {
        if checker.is_independent_from(v) {
            let mask: usize = 1 << (3 - v);
            for row in (0..16).filter(|r| r & mask == 0) {
                let (x, y) = (table.get(row), table.get(row | mask));
                assert!(x.is_dont_care() || y.is_dont_care() || x == y);
            }
            let reduced = checker.remove_var(v);
            assert_eq!(reduced.len(), table.len() / 2);
            assert_eq!(reduced.var_count(), 3);
        }
    }
    assert!(checker.is_independent_from(1));
    assert!(!checker.is_independent_from(0));
}

#[test]
fn reducer_is_idempotent() {
    let vars: Vec<Variable> = ["A", "B", "C"].into_iter().map(Variable::new).collect();
    let table = ValueTable::from_fn(3, |row| (row & 1 == 1 && row & 4 == 0).into());

    let mut reducer = TableReducer::new(&vars, &table);
    assert!(reducer.can_reduce());
    let (vars, table) = reducer.into_parts();
    assert_eq!(vars, vec![Variable::new("A"), Variable::new("C")]);
    assert_eq!(table.len(), 1 << vars.len());

    let mut again = TableReducer::new(&vars, &table);
    assert!(!again.can_reduce());
    assert_eq!(again.table(), &table);
}

// ─── Lowering ──────────────────────────────────────────────────────────────────

#[test]
fn lowering_keeps_every_occurrence() {
    let mut registry = vec![];
    let fragment = Fragment::lower(&example(), &mut registry).unwrap();
    assert_eq!(fragment.leaf_count(), example().occurrences());
    assert_eq!(fragment.leaf_count(), 7);
    assert_eq!(registry, vec![Variable::new("A"), Variable::new("B"), Variable::new("C")]);
}

#[test]
fn negated_variable_is_a_single_leaf() {
    let mut registry = vec![];
    let fragment = Fragment::lower(&not(b()), &mut registry).unwrap();
    assert!(matches!(fragment, Fragment::Variable { negated: true, .. }));
    assert_eq!(fragment.leaf_count(), 1);
}

// ─── Synthesis ─────────────────────────────────────────────────────────────────

#[test]
fn example_circuit_structure() {
    let circuit = Builder::new()
        .add_expression("Y", &example())
        .unwrap()
        .create_circuit()
        .unwrap();

    assert_eq!(circuit.nodes_of(NodeKind::Or(3)).count(), 1);
    assert_eq!(circuit.nodes_of(NodeKind::And(3)).count(), 1);
    assert_eq!(circuit.nodes_of(NodeKind::And(2)).count(), 2);
    // One inverter for `!(A & !B & C)`, one per bus slot.
    assert_eq!(circuit.nodes_of(NodeKind::Not).count(), 1 + 3);
    assert_eq!(circuit.nodes_of(NodeKind::Input).count(), 3);
    assert_eq!(circuit.nodes_of(NodeKind::Output).count(), 1);

    // The AND3 feeds the separate inverter.
    let and3 = circuit.nodes_of(NodeKind::And(3)).next().unwrap().pos();
    let and3_out = and3 + Vector::new(60, 20);
    let inverter = circuit
        .nodes_of(NodeKind::Not)
        .find(|n| n.pos().y >= 0)
        .unwrap()
        .pos();
    assert!(circuit
        .wires()
        .iter()
        .any(|w| w.touches(and3_out) && w.touches(inverter)));
}

#[test]
fn every_leaf_wired_to_its_rail() {
    let circuit = Builder::new()
        .add_expression("Y", &example())
        .unwrap()
        .create_circuit()
        .unwrap();
    let rails = rails(&circuit);

    // Leaves are the only wire ends left of the gate trees that are not rails.
    let taps: Vec<_> = circuit
        .wires()
        .iter()
        .filter(|w| w.is_horizontal() && w.p1.x == 0 && w.p2.x < 0)
        .collect();
    assert_eq!(taps.len(), 7);

    // Taps follow leaf order: A, !B, C, !A, C, B, !C.
    let tapped: Vec<(String, bool)> = taps.iter().map(|w| rails[&w.p2.x].clone()).collect();
    let expected = [
        ("A", false),
        ("B", true),
        ("C", false),
        ("A", true),
        ("C", false),
        ("B", false),
        ("C", true),
    ];
    assert_eq!(tapped.len(), expected.len());
    for ((name, inverted), (want_name, want_inverted)) in tapped.iter().zip(expected) {
        assert_eq!((name.as_str(), *inverted), (want_name, want_inverted));
    }

    // Each tap starts at its leaf and stays on the leaf's row.
    let mut registry = vec![];
    let root = Fragment::output("Y", Fragment::lower(&example(), &mut registry).unwrap())
        .measure(&logic_builder::shape::GenericShapes::default());
    let mut leaves = vec![];
    root.place(Vector::new(0, 0), &mut Circuit::new(), &mut leaves);
    assert_eq!(leaves.len(), taps.len());
    for (tap, leaf) in taps.iter().zip(&leaves) {
        assert_eq!(tap.p1, leaf.pos);
        assert_eq!(tap.p2.y, leaf.pos.y);
        assert_eq!(rails[&tap.p2.x], (leaf.variable.name().to_string(), leaf.negated));
    }
}

#[test]
fn outputs_do_not_overlap() {
    let y = example();
    let y1 = Expression::or([example(), Expression::and([b(), not(c())])]);
    let l = Expression::and([y.clone(), y1, a()]);

    let circuit = Builder::new()
        .add_expression("L", &l)
        .unwrap()
        .add_expression("Y", &y)
        .unwrap()
        .create_circuit()
        .unwrap();

    let out_l = circuit.find_label("L").unwrap().pos();
    let out_y = circuit.find_label("Y").unwrap().pos();
    assert!(out_y.y > out_l.y);

    // Everything belonging to L is above the top of Y's subtree.
    let mut registry = vec![];
    let measured = Fragment::output("L", Fragment::lower(&l, &mut registry).unwrap())
        .measure(&logic_builder::shape::GenericShapes::default());
    let top_of_y = measured.extent().height + 20;
    for node in circuit.nodes().iter().filter(|n| n.pos().y >= 0) {
        if node.pos().y < top_of_y {
            assert_ne!(node.label(), Some("Y"));
        } else {
            assert_ne!(node.label(), Some("L"));
        }
    }
    // Or3, And3, Not, two And2 and the output terminal of Y.
    assert_eq!(circuit.nodes().iter().filter(|n| n.pos().y >= top_of_y).count(), 6);

    // Bus still has one slot per distinct variable.
    assert_eq!(circuit.nodes_of(NodeKind::Input).count(), 3);
}

#[test]
fn unsupported_expression_yields_no_circuit() {
    let builder = Builder::new().add_expression("X", &a()).unwrap();
    let err = builder
        .add_expression("Y", &Expression::or([a(), Expression::constant(false)]))
        .err()
        .unwrap();
    assert!(matches!(err, BuildError::UnsupportedExpression { kind: "constant", .. }));
    assert!(err.to_string().contains("constant"));
}
