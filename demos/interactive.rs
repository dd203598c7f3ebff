// Line-oriented console for poking at an incremental hull.
//
//   cargo run --example interactive
//   RUST_LOG=incremental_hull=debug cargo run --example interactive
//
// Commands:
//   add X Y         insert a point
//   remove I        dissolve the hull vertex at position I
//   flip I J        flip the edge between hull positions I and J
//   contains X Y    test hull membership
//   tangents X Y    tangent vertices seen from a point
//   pick X Y        vertex or edge under a pointer
//   hull | edges    print the current state
//   quit
use incremental_hull::algorithms::{pick, Pick};
use incremental_hull::data::{PlanarGraph, Point, VertexId};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_target(false)
    .init();

  let mut graph = PlanarGraph::new();
  let stdin = io::stdin();
  prompt()?;
  for line in stdin.lock().lines() {
    let line = line?;
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
      [] => {}
      ["quit"] | ["exit"] => break,
      [cmd, args @ ..] => {
        if let Err(err) = run(&mut graph, cmd, args) {
          println!("error: {}", err);
        }
      }
    }
    prompt()?;
  }
  Ok(())
}

fn prompt() -> io::Result<()> {
  print!("> ");
  io::stdout().flush()
}

fn run(graph: &mut PlanarGraph, cmd: &str, args: &[&str]) -> Result<(), BoxError> {
  match (cmd, args) {
    ("add", [x, y]) => match graph.insert(x.parse()?, y.parse()?)? {
      Some(id) => println!("added {}", label(graph, id)),
      None => println!("already covered"),
    },
    ("remove", [i]) => {
      let id = graph.at(i.parse()?)?;
      let p = graph.remove(id)?;
      println!("removed ({}, {})", p.x(), p.y());
    }
    ("flip", [i, j]) => {
      let (a, b) = (graph.at(i.parse()?)?, graph.at(j.parse()?)?);
      let edge = graph.flip(a, b)?;
      println!("new edge {} - {}", label(graph, edge.min), label(graph, edge.max));
    }
    ("contains", [x, y]) => println!("{}", graph.contains(x.parse()?, y.parse()?)?),
    ("tangents", [x, y]) => match graph.tangents(x.parse()?, y.parse()?)? {
      Some((a, b)) => println!("{} .. {}", label(graph, a), label(graph, b)),
      None => println!("none"),
    },
    ("pick", [x, y]) => match pick(graph, &Point::new(x.parse()?, y.parse()?)?) {
      Some(Pick::Vertex(id)) => println!("vertex {}", label(graph, id)),
      Some(Pick::Edge(e)) => println!("edge {} - {}", label(graph, e.min), label(graph, e.max)),
      None => println!("nothing"),
    },
    ("hull", []) => {
      for (id, _) in graph.vertices() {
        println!("{}", label(graph, id));
      }
    }
    ("edges", []) => {
      for e in graph.edges() {
        println!("{} - {}", label(graph, e.min), label(graph, e.max));
      }
    }
    _ => println!("unknown command: {} {}", cmd, args.join(" ")),
  }
  Ok(())
}

fn label(graph: &PlanarGraph, id: VertexId) -> String {
  match (graph.index_of(id), graph.vertex(id)) {
    (Ok(i), Some(v)) => format!("#{} ({}, {})", i, v.point().x(), v.point().y()),
    _ => format!("{:?}", id),
  }
}
