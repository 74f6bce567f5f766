//! Pick separated city positions from a raw vertex buffer dumped to disk.
//!
//! The file holds the vertex bytes exactly as a mesh loader would hand them
//! over; the layout is described on the command line. The selected samples
//! are printed to stdout as JSON.
//!
//! Run: `cargo run -p globe-cities --features tools --bin sample_cities -- <vertex-file> [options]`

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use globe_cities::{ComponentKind, Selector, SelectorConfig, VertexBuffer, VertexLayout};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Raw vertex buffer file.
    vertex_file: PathBuf,

    /// Bytes between consecutive vertex records.
    #[arg(long, default_value_t = 12)]
    stride: usize,

    /// Byte offset of the first record.
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Number of records. Defaults to as many as fit in the file.
    #[arg(long)]
    count: Option<usize>,

    /// Components per record.
    #[arg(long, default_value_t = 3)]
    components: usize,

    /// Bytes per component.
    #[arg(long, default_value_t = 4)]
    bytes: usize,

    /// Components are signed integers rather than floats.
    #[arg(long)]
    int: bool,

    /// JSON file with selector settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cities to place. Overrides the config file.
    #[arg(long)]
    target: Option<usize>,

    /// Minimum distance between cities. Overrides the config file.
    #[arg(long)]
    separation: Option<f32>,

    /// Seed for a reproducible selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Log selection progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SelectorConfig::default(),
    };
    if let Some(target) = args.target {
        config.target_count = target;
    }
    if let Some(separation) = args.separation {
        config.min_separation = separation;
    }

    let data = fs::read(&args.vertex_file)?;
    let mut layout = VertexLayout {
        stride: args.stride,
        offset: args.offset,
        vector_count: 0,
        components_per_vector: args.components,
        bytes_per_component: args.bytes,
        component_kind: if args.int {
            ComponentKind::SignedInt
        } else {
            ComponentKind::Float
        },
    };
    layout.vector_count = args
        .count
        .unwrap_or_else(|| layout.max_vectors_in(data.len()));

    let buffer = VertexBuffer::new(&data, layout)?;
    tracing::info!(
        "Loaded {} vertices from {}",
        buffer.vector_count(),
        args.vertex_file.display()
    );

    let selector = Selector::new(config);
    let samples = match args.seed {
        Some(seed) => selector.select_with(&mut StdRng::seed_from_u64(seed), &buffer)?,
        None => selector.select(&buffer)?,
    };

    println!("{}", serde_json::to_string_pretty(&samples)?);
    Ok(())
}
