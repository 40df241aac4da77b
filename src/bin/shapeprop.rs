use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shapeprop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a shape document as a Lottie shape property.
    Export(ExportArgs),
    /// Print the frame window a shape document animates over.
    Window(WindowArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input shape document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output Lottie JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Export config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sample end tangents at the start frame, like older exporters did.
    #[arg(long)]
    legacy_end_tangents: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct WindowArgs {
    /// Input shape document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Window(args) => cmd_window(args),
    }
}

fn read_shape(path: &Path) -> anyhow::Result<shapeprop::Shape> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read shape document '{}'", path.display()))?;
    let doc = shapeprop::Document::from_json_str(&s).with_context(|| "parse shape document")?;
    Ok(doc.to_shape()?)
}

fn read_config(args: &ExportArgs) -> anyhow::Result<shapeprop::ExportConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            shapeprop::ExportConfig::from_json_str(&s).with_context(|| "parse config")?
        }
        None => shapeprop::ExportConfig::default(),
    };
    if args.legacy_end_tangents {
        config.end_tangents = shapeprop::EndTangentFrame::SameFrame;
    }
    Ok(config)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let shape = read_shape(&args.in_path)?;
    let config = read_config(&args)?;

    let mut keyframes = Vec::new();
    let window = shapeprop::export_shape(&shape, &config, &mut keyframes)?;

    let property = shapeprop::ShapeProperty {
        keyframes: &keyframes,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&property)
    } else {
        serde_json::to_string(&property)
    }
    .with_context(|| "encode lottie json")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write output '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} keyframes, frames {}..={})",
        args.out.display(),
        keyframes.len(),
        window.first.0,
        window.last.0
    );
    Ok(())
}

fn cmd_window(args: WindowArgs) -> anyhow::Result<()> {
    let shape = read_shape(&args.in_path)?;
    shape.validate()?;
    let window = shapeprop::discover_window(&shape);
    window.validate()?;
    println!("{}..={}", window.first.0, window.last.0);
    Ok(())
}
