//! prune-empty: Remove empty files and empty directory trees
//!
//! Scans every given directory bottom-up, then removes the zero-byte files
//! and the directories that hold nothing else.

use std::process::ExitCode;

use prune_empty::cli::{usage_exit_code, CliArgs};
use prune_empty::error::PruneError;
use prune_empty::remover::Remover;
use prune_empty::scanner::{Removals, Scanner};
use prune_empty::signals;

fn main() -> ExitCode {
    let args = match CliArgs::parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version print to stdout, usage errors to stderr
            let _ = e.print();
            return usage_exit_code(&e).into();
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("prune-empty: {}", e);
            e.exit_code().into()
        }
    }
}

/// Main execution logic
fn run(args: CliArgs) -> Result<(), PruneError> {
    if let Err(e) = signals::install_interrupt_handler() {
        eprintln!("prune-empty: warning: cannot install interrupt handler: {}", e);
    }

    // An unresolvable cwd only disables cwd protection
    let cwd = std::env::current_dir().ok();
    let config = args.into_config(cwd.as_deref());

    // SCAN
    let mut scanner = Scanner::new(config.keep_empty_files);
    let mut removals = Removals::new();
    let mut invalid_roots = 0;

    for root in &config.roots {
        if let Err(e) = scanner.scan(root, &mut removals) {
            eprintln!("prune-empty: {}", e);
            invalid_roots += 1;
        }
    }

    if invalid_roots == config.roots.len() {
        return Err(PruneError::NoValidRoots);
    }

    // EXCLUDE-ROOTS, APPLY
    let remover = Remover::new(&config, cwd.as_deref());
    remover.exclude_roots(&mut removals);
    let report = remover.apply(&removals);

    if report.is_success() && invalid_roots == 0 {
        Ok(())
    } else {
        Err(PruneError::PartialFailure {
            removed: report.removed(),
            skipped: report.skipped(),
            failed: report.failed(),
            invalid_roots,
        })
    }
}
