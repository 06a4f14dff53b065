use ahash::AHashSet;
use clap::Parser;
use gridflow::grid::{GridDefinition, LinkDefinition, MAX_LINK_CAPACITY, NodeDefinition, NodeId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs;

/// A CLI tool to generate random grid descriptions for gridflow
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated grid description to
    #[arg(short, long, default_value = "generated_grid.txt")]
    output: String,

    /// Number of producer nodes
    #[arg(long, default_value_t = 3)]
    producers: usize,

    /// Number of consumer nodes
    #[arg(long, default_value_t = 12)]
    consumers: usize,

    /// Links added on top of the spanning tree that keeps the grid connected
    #[arg(long, default_value_t = 10)]
    extra_links: usize,

    /// Upper bound for producer output and consumer demand
    #[arg(long, default_value_t = 50)]
    max_power: i64,

    /// Upper bound for link capacity
    #[arg(long, default_value_t = 30)]
    max_capacity: i64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.producers + cli.consumers == 0 {
        eprintln!("Error: at least one producer or consumer is required");
        std::process::exit(1);
    }
    if cli.max_power < 1 || !(0..=MAX_LINK_CAPACITY).contains(&cli.max_capacity) {
        eprintln!(
            "Error: --max-power ({}) must be positive and --max-capacity ({}) within [0, {}]",
            cli.max_power, cli.max_capacity, MAX_LINK_CAPACITY
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating grid with {} producer(s), {} consumer(s)...",
        cli.producers, cli.consumers
    );

    let nodes = generate_nodes(&mut rng, &cli);
    let links = generate_links(&mut rng, &nodes, &cli);
    println!(
        "-> Generated {} node(s) and {} link(s).",
        nodes.len(),
        links.len()
    );

    let definition = GridDefinition { nodes, links };
    fs::write(&cli.output, definition.to_string())?;

    println!("Successfully saved grid description to '{}'", cli.output);
    Ok(())
}

fn generate_nodes(rng: &mut StdRng, cli: &Cli) -> Vec<NodeDefinition> {
    let mut nodes = Vec::with_capacity(cli.producers + cli.consumers);
    for i in 0..cli.producers {
        let power = rng.random_range(1..=cli.max_power);
        nodes.push(NodeDefinition::new(i as NodeId, format!("P{}", i), power));
    }
    for i in 0..cli.consumers {
        let id = (cli.producers + i) as NodeId;
        let demand = rng.random_range(1..=cli.max_power);
        nodes.push(NodeDefinition::new(id, format!("C{}", i), -demand));
    }
    nodes
}

/// A random spanning tree plus up to `extra_links` further links, never parallel or self-looping.
fn generate_links(rng: &mut StdRng, nodes: &[NodeDefinition], cli: &Cli) -> Vec<LinkDefinition> {
    let mut order: Vec<NodeId> = nodes.iter().map(|node| node.id).collect();
    order.shuffle(rng);

    let mut seen = AHashSet::new();
    let mut links = Vec::new();

    for i in 1..order.len() {
        let parent = order[rng.random_range(0..i)];
        if seen.insert((parent.min(order[i]), parent.max(order[i]))) {
            let capacity = rng.random_range(0..=cli.max_capacity);
            links.push(LinkDefinition::new(parent, order[i], capacity));
        }
    }

    let max_links = order.len() * order.len().saturating_sub(1) / 2;
    let target = (links.len() + cli.extra_links).min(max_links);
    let mut attempts = 0;
    while links.len() < target && attempts < target * 20 {
        attempts += 1;
        let a = order[rng.random_range(0..order.len())];
        let b = order[rng.random_range(0..order.len())];
        if a != b && seen.insert((a.min(b), a.max(b))) {
            let capacity = rng.random_range(0..=cli.max_capacity);
            links.push(LinkDefinition::new(a, b, capacity));
        }
    }

    links
}
