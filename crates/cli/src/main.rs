use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use fresnel2d_backend_cpu::{CpuBackend, ParallelCpuBackend};
use fresnel2d_core::{
    io::TrainConfig,
    train::{self, TrainTrace},
};

#[derive(Parser, Debug)]
#[command(name = "fresnel2d", about = "Gaussian-beam Fresnel propagation through a lens train")]
struct Cli {
    /// Path to a TOML optical-train configuration
    #[arg(short, long)]
    config: PathBuf,
    /// Path to CSV output (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Run FFTs on a dedicated pool with this many threads
    #[arg(long)]
    threads: Option<usize>,
    /// Suppress progress logs (stderr)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if !cli.quiet {
        eprintln!("[cli] loading config {}", cli.config.display());
    }
    let config = TrainConfig::from_file(&cli.config)?;
    if !cli.quiet {
        eprintln!(
            "[cli] grid {}x{}, {} steps",
            config.beam.grid.n,
            config.beam.grid.n,
            config.steps.len()
        );
        if let Some(dest) = &cli.output {
            eprintln!("[cli] writing CSV to {}", dest.display());
        } else {
            eprintln!("[cli] streaming CSV to stdout");
        }
    }

    let trace = match cli.threads {
        Some(threads) => train::run_train(ParallelCpuBackend::with_threads(threads)?, &config)?,
        None => train::run_train(CpuBackend::new(), &config)?,
    };
    if let Some(last) = trace.snapshots.last() {
        log::info!(
            "final plane z={:.4e}: w={:.4e}, waist at {:.4e}",
            last.position_z,
            last.spot_radius,
            last.waist_position
        );
    }
    emit_csv(&trace, cli.output.as_deref())?;
    if !cli.quiet {
        if let Some(path) = cli.output {
            eprintln!("wrote {} rows to {}", trace.snapshots.len(), path.display());
        } else {
            eprintln!("wrote {} rows to stdout", trace.snapshots.len());
        }
    }
    Ok(())
}

fn emit_csv(trace: &TrainTrace, dest: Option<&Path>) -> io::Result<()> {
    let mut writer: Box<dyn Write> = match dest {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    writeln!(
        writer,
        "step,label,position_z,waist_position,waist_radius,rayleigh_range,spot_radius,is_spherical,pixel_scale,energy"
    )?;
    for snap in &trace.snapshots {
        writeln!(
            writer,
            "{},\"{}\",{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{},{:.9e},{:.9e}",
            snap.step,
            snap.label.replace('"', "\"\""),
            snap.position_z,
            snap.waist_position,
            snap.waist_radius,
            snap.rayleigh_range,
            snap.spot_radius,
            snap.is_spherical,
            snap.pixel_scale,
            snap.energy
        )?;
    }
    writer.flush()
}
