//! Builds the sample graphs and runs the three algorithms on them.
//!
//! Run with `RUST_LOG=debug cargo run --example algorithms_demo --features tracing`
//! to see the library's log events.

use adjgraph::{is_connected, topological_sort, transitive_closure, AdjacencyGraph};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn numbered(n: i32, arcs: &[(i32, i32)]) -> Result<AdjacencyGraph<i32>> {
    let capacity = usize::try_from(n).context("vertex count must be positive")?;
    let mut g = AdjacencyGraph::new(capacity)?;
    for v in 1..=n {
        g.add_vertex(v)?;
    }
    for (u, v) in arcs {
        g.add_arc(u, v)
            .with_context(|| format!("adding arc {u} -> {v}"))?;
    }
    Ok(g)
}

const DAG: &[(i32, i32)] = &[(6, 5), (6, 3), (5, 2), (4, 2), (1, 2), (7, 1), (7, 3)];
const CYCLIC: &[(i32, i32)] = &[
    (1, 2),
    (1, 3),
    (2, 4),
    (2, 6),
    (2, 3),
    (3, 6),
    (4, 5),
    (5, 2),
    (6, 4),
];
const SPARSE: &[(i32, i32)] = &[
    (2, 4),
    (2, 8),
    (2, 6),
    (2, 10),
    (2, 12),
    (3, 6),
    (3, 9),
    (3, 12),
    (4, 8),
    (4, 12),
    (5, 10),
    (6, 12),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let g1 = numbered(7, DAG)?;
    let g2 = numbered(6, CYCLIC)?;
    let g3 = numbered(12, SPARSE)?;

    println!("Transitive closure");
    println!("==================");
    println!("\nClosure of (g1)\n{}", transitive_closure(&g1)?);
    println!("Closure of (g2)\n{}", transitive_closure(&g2)?);

    println!("Connectivity");
    println!("============");
    for (name, g) in [("g2", &g2), ("g3", &g3)] {
        let verdict = if is_connected(g) { "is" } else { "is not" };
        println!("Graph {name} {verdict} connected");
    }

    println!("\nTopological sort");
    println!("================");
    let order = topological_sort(&g1)?;
    let rendered: Vec<String> = order.iter().map(ToString::to_string).collect();
    println!("(g1): {}", rendered.join(" "));

    match topological_sort(&g2) {
        Ok(order) => println!("(g2): {order:?}"),
        Err(err) => println!("(g2): {err}"),
    }

    Ok(())
}
