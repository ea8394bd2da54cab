use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Target};
use log::{debug, info, LevelFilter};
use simple_linked_list::LinkedList;

/// Builds a list, pushes onto it, walks it, reverses it and pops from it.
#[derive(Parser, Debug)]
#[command(name = "simple-linked-list", version)]
struct Args {
    /// Initial values, pushed in the given order
    #[arg(default_values = ["foo", "bar"])]
    values: Vec<String>,

    /// Value pushed after construction
    #[arg(long, default_value = "baz")]
    push: String,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG overrides per module
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn init_logging(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);
    debug!("{:?}", args);

    let mut list = LinkedList::from(args.values);
    info!("built list with {} values", list.len());
    println!("{:?}", list);

    list.push(args.push);
    println!("{:?}", list);

    for value in &list {
        println!("node: {}", value);
    }

    println!("{:?}", list.reversed());

    let popped = list.pop()?;
    println!("popped: {}", popped);
    println!("{:?}", list);
    info!("{} values left", list.len());

    Ok(())
}
