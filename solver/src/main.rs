use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pipemaze::Maze;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the loop in a pipe maze and count the cells it encloses")]
struct Cli {
    /// Maze files, or day directories holding `sample*.txt` and `input.txt`.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Also draw the loop, marking enclosed cells `I` and the rest `O`.
    #[arg(long)]
    render: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    for path in &cli.paths {
        for input in inputs_in(path)? {
            handle_input(&input, cli.render)?;
        }
    }

    Ok(())
}

/// A file is its own input. A directory contributes its samples in name order, then `input.txt`.
fn inputs_in(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(path).with_context(|| format!("failed to list {}", path.display()))? {
        let candidate = entry.with_context(|| format!("failed to list {}", path.display()))?.path();
        let is_sample = candidate.is_file()
            && candidate.extension().is_some_and(|ext| ext == "txt")
            && candidate.file_stem().and_then(|stem| stem.to_str()).is_some_and(|stem| stem.starts_with("sample"));
        if is_sample {
            inputs.push(candidate);
        }
    }
    inputs.sort();

    let input = path.join("input.txt");
    if input.is_file() {
        inputs.push(input);
    }

    if inputs.is_empty() {
        bail!("no sample*.txt or input.txt found in {}", path.display());
    }
    debug!(dir = %path.display(), count = inputs.len(), "discovered inputs");

    Ok(inputs)
}

fn handle_input(path: &Path, render: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let maze = Maze::parse(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let solution = maze.solve()
        .with_context(|| format!("failed to solve {}", path.display()))?;

    let name = path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    println!("{}:", name);
    println!("  Part 1: {}", solution.farthest_distance);
    println!("  Part 2: {}", solution.interior_count);
    if render {
        print!("{}", solution.render(maze.grid()));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
