use siftcss::{PipelineError, critical_css, parse_tree, stylesheet_for};
use std::env;
use std::io::{self, Read, Write};

/// A simple CLI filter: reads a serialized UI tree (JSON) from stdin
/// and writes the critical stylesheet plus the compiled utilities for
/// exactly the classes the tree uses to stdout.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    if env::args().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Compiles the tree-shaken stylesheet for a serialized UI tree.");
        eprintln!();
        eprintln!("Usage: siftcss < tree.json > styles.css");
        return Ok(());
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    if input.trim().is_empty() {
        return Ok(());
    }

    let tree = parse_tree(&input)?;
    let utilities = stylesheet_for(&tree);

    let mut stdout = io::stdout().lock();
    stdout.write_all(critical_css().as_bytes())?;
    stdout.write_all(utilities.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
