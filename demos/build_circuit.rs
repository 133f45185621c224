use clap::Parser;

use logic_builder::builder::{Builder, BuilderConfig};
use logic_builder::expr::Expression;
use logic_builder::gate::NodeKind;
use logic_builder::reducer::TableReducer;
use logic_builder::table::ValueTable;
use logic_builder::types::Variable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Grid cell size.
    #[clap(long, value_name = "INT", default_value = "20")]
    size: i32,

    /// Print every node and wire.
    #[clap(long)]
    dump: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    // Reduction: Y = A & !C over (A, B, C, D).
    let vars: Vec<Variable> = ["A", "B", "C", "D"].into_iter().map(Variable::new).collect();
    let table = ValueTable::from_fn(4, |row| (row & 0b1010 == 0b1000).into());
    println!("table = {}", table);
    let mut reducer = TableReducer::new(&vars, &table);
    if reducer.can_reduce() {
        let names: Vec<_> = reducer.vars().iter().map(|v| v.name()).collect();
        println!("reduced to {:?}, table = {}", names, reducer.table());
    } else {
        println!("nothing to reduce");
    }

    // Synthesis: two outputs sharing one input bus.
    let a = || Expression::var("A");
    let b = || Expression::var("B");
    let c = || Expression::var("C");
    let y = Expression::or([
        Expression::not(Expression::and([a(), Expression::not(b()), c()])),
        Expression::and([Expression::not(a()), c()]),
        Expression::and([b(), Expression::not(c())]),
    ]);
    let y1 = Expression::or([y.clone(), Expression::and([b(), Expression::not(c())])]);
    let l = Expression::and([y.clone(), y1, a()]);
    println!("L = {}", l);
    println!("Y = {}", y);

    let time_build = std::time::Instant::now();
    let circuit = Builder::with_config(BuilderConfig { size: args.size })
        .add_expression("L", &l)?
        .add_expression("Y", &y)?
        .create_circuit()?;
    let time_build = time_build.elapsed();

    println!(
        "circuit: {} nodes, {} wires in {:.3}s",
        circuit.nodes().len(),
        circuit.wires().len(),
        time_build.as_secs_f64()
    );
    for kind in [NodeKind::Input, NodeKind::Not, NodeKind::Output] {
        println!("- {}: {}", kind, circuit.nodes_of(kind).count());
    }
    let gates = circuit.nodes().iter().filter(|n| n.kind().is_gate()).count();
    println!("- gates: {}", gates);

    if args.dump {
        print!("{}", circuit);
    }

    Ok(())
}
