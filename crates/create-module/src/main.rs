//! create-module - Scaffold a new C module
//!
//! Creates `src/<name>/` with a source file, a header with an include guard,
//! a smoke test and a Makefile for the test binary.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use cds_core::ProjectPaths;
use create_module::{ModuleLayout, ScaffoldError};

const USAGE: &str = "Usage: create-module <module_name>";

#[derive(Parser)]
#[command(name = "create-module")]
#[command(about = "Scaffold a new C module with header, source, test and Makefile")]
#[command(version)]
#[command(after_help = r#"FILES CREATED:
    src/<name>/<name>.c       Source file
    src/<name>/<name>.h       Header with include guard
    src/<name>/<name>test.c   Smoke test including the header
    src/<name>/Makefile       Builds bin/<name>test

EXAMPLES:
    create-module vector              # Creates src/vector/
    create-module llist --root ../lib # Creates ../lib/src/llist/
"#)]
struct Cli {
    /// Name of the module (directory and file stem)
    #[arg(allow_hyphen_values = true)]
    module_name: String,

    /// Project root containing src/ (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

fn main() {
    cds_core::logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE);
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<ScaffoldError>() {
            Some(conflict @ ScaffoldError::AlreadyExists { .. }) => println!("{}", conflict),
            _ => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = ProjectPaths::from_option(cli.root.as_deref());
    let layout = ModuleLayout::new(&paths, &cli.module_name)?;
    layout.ensure_absent()?;

    println!(
        "Creating module '{}' in {}.",
        layout.name,
        layout.dir.display()
    );

    let files = layout.create()?;

    println!("Created files:");
    for file in &files {
        println!("{}", file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional_required() {
        assert!(Cli::try_parse_from(["create-module"]).is_err());
        assert!(Cli::try_parse_from(["create-module", "a", "b"]).is_err());

        let cli = Cli::try_parse_from(["create-module", "foo"]).unwrap();
        assert_eq!(cli.module_name, "foo");
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_leading_hyphen_is_a_name() {
        let cli = Cli::try_parse_from(["create-module", "-foo"]).unwrap();
        assert_eq!(cli.module_name, "-foo");

        let cli = Cli::try_parse_from(["create-module", "--root", "x", "-bar"]).unwrap();
        assert_eq!(cli.module_name, "-bar");
        assert_eq!(cli.root, Some(PathBuf::from("x")));
    }
}
