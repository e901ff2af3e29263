//! build-project - Build the c-datastructures libraries and tests
//!
//! Declares `libcdatastructures.a`, `libcdatastructures.so`, `vectortest`
//! and `llisttest`, then builds them in one pass.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use depgraph::{BuildGraph, DependencyGraph, Toolchain};
use tracing::debug;

#[derive(Parser)]
#[command(name = "build-project")]
#[command(about = "Build the c-datastructures libraries and test executables")]
#[command(version)]
#[command(after_help = "\
OUTPUTS:
    lib/libcdatastructures.a    Static library (vector, llist)
    lib/libcdatastructures.so   Shared library (vector, llist)
    bin/vectortest              Vector tests
    bin/llisttest               Linked list tests

EXAMPLES:
    build-project                      Build everything
    build-project --dry-run            Show the commands without running them
    build-project --cc clang --cflag -O2
    RUST_LOG=info build-project        Log each command as it runs")]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print the planned commands without running them
    #[arg(long)]
    dry_run: bool,

    /// Print the toolchain and plan as JSON (implies --dry-run)
    #[arg(long)]
    json: bool,

    /// C compiler
    #[arg(long, value_name = "CC")]
    cc: Option<String>,

    /// Static library archiver
    #[arg(long, value_name = "AR")]
    ar: Option<String>,

    /// Compiler flag, replaces the defaults (can be repeated)
    #[arg(long = "cflag", value_name = "FLAG", allow_hyphen_values = true)]
    cflags: Vec<String>,
}

impl Cli {
    fn toolchain(&self) -> Toolchain {
        let mut toolchain = Toolchain::default();
        if let Some(ref cc) = self.cc {
            toolchain = toolchain.cc(cc.as_str());
        }
        if let Some(ref ar) = self.ar {
            toolchain = toolchain.ar(ar.as_str());
        }
        if !self.cflags.is_empty() {
            toolchain = toolchain.cflags(self.cflags.iter().cloned());
        }
        toolchain
    }
}

fn main() {
    cds_core::logging::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    debug!(root = %root.display(), "Declaring project artifacts");
    let mut graph = DependencyGraph::new(root).with_toolchain(cli.toolchain());
    build_project::declare(&mut graph);

    if cli.dry_run || cli.json {
        let plan = graph.plan()?;
        if cli.json {
            let json = serde_json::json!({
                "toolchain": graph.toolchain(),
                "plan": plan,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            for step in &plan.steps {
                println!("{}", step);
            }
        }
        return Ok(());
    }

    let report = graph.build()?;
    println!(
        "Built {} artifact(s) with {} command(s) in {:.2}s",
        report.outputs.len(),
        report.commands,
        report.duration.as_secs_f64()
    );
    for output in &report.outputs {
        println!("  {}", output.display());
    }

    Ok(())
}
