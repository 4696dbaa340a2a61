use dijkstra_sssp::graph::generators::demo_graph;
use dijkstra_sssp::solve;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Optional source vertex as the first argument
    let args: Vec<String> = env::args().collect();
    let source = if args.len() > 1 {
        args[1].parse::<usize>()?
    } else {
        0
    };

    let graph = demo_graph();
    let result = solve(&graph, source)?;

    for (vertex, distance) in result.iter() {
        match distance {
            Some(dist) => println!("{} {}", vertex, dist),
            None => println!("{} unreachable", vertex),
        }
    }

    Ok(())
}
