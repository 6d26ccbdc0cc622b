//! LS8 emulator CLI.
//!
//! This binary is a thin wrapper around `ls8-core`. It performs:
//! 1. **Run:** Load a program image (`.ls8` text or raw binary), execute it to `HLT`, print `PRN`
//!    output on stdout.
//! 2. **Disasm:** Print a listing of a program image.
//!
//! Logging goes to stderr through `tracing-subscriber`; `--trace` turns on a per-instruction
//! trace, otherwise `RUST_LOG` applies.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use ls8_core::Config;
use ls8_core::config::FetchPolicy;
use ls8_core::isa::{Dispatcher, disasm};
use ls8_core::sim::{Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS8 8-bit CPU emulator",
    long_about = "Run or disassemble an LS8 program.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run --trace --stats programs/call.ls8\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program image (`.ls8` text, anything else is raw bytes).
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log machine state before every instruction.
        #[arg(long)]
        trace: bool,

        /// Fetch only the operand bytes each instruction uses.
        #[arg(long)]
        lenient: bool,

        /// Print execution statistics to stderr after the run.
        #[arg(long)]
        stats: bool,

        /// Print execution statistics as JSON to stderr after the run.
        #[arg(long)]
        stats_json: bool,
    },

    /// Print a disassembly listing.
    Disasm {
        /// Program image.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            lenient,
            stats,
            stats_json,
        } => {
            init_logging(trace);
            let mut config = load_config(config.as_deref());
            config.general.trace_instructions |= trace;
            if lenient {
                config.general.fetch_policy = FetchPolicy::Lenient;
            }
            cmd_run(&file, &config, stats, stats_json);
        }
        Commands::Disasm { file } => {
            init_logging(false);
            cmd_disasm(&file);
        }
    }
}

/// Installs the stderr subscriber. `--trace` forces the `trace` level.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads the JSON config, or returns the defaults. Exits on error.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| Config::from_json(&json).map_err(|e| e.to_string()));
    parsed.unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not load config '{}': {}", path.display(), e);
        process::exit(1);
    })
}

/// Reads a program image. Exits on error.
fn read_image(file: &Path) -> Vec<u8> {
    loader::load_program(file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    })
}

/// Loads and runs a program; on a machine fault dumps state and exits with code 1.
fn cmd_run(file: &Path, config: &Config, stats: bool, stats_json: bool) {
    let image = read_image(file);
    let mut sim = Simulator::new(config);
    tracing::info!(
        file = %file.display(),
        bytes = image.len(),
        policy = ?config.general.fetch_policy,
        "starting"
    );

    let result = sim.load(&image).and_then(|()| sim.run());

    if stats {
        sim.cpu.stats().print();
    }
    if stats_json {
        match serde_json::to_string_pretty(sim.cpu.stats()) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("[!] could not serialize stats: {e}"),
        }
    }

    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        eprintln!("{}", sim.cpu.dump_state());
        process::exit(1);
    }
}

/// Prints `addr: text` for every instruction in the image.
fn cmd_disasm(file: &Path) {
    let image = read_image(file);
    let dispatcher = Dispatcher::new();
    for (addr, text) in disasm::disassemble_program(&dispatcher, &image) {
        println!("{addr:02X}: {text}");
    }
}
