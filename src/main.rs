use anyhow::{Context, Result};
use clap::Parser;
use linkmap_audit::{
    Cli, CsvFormatter, Diagnostics, JsonFormatter, LinkMapSource, Module, TextFormatter,
    build_modules, scan_lines,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_cli(cli)
}

fn run_cli(cli: Cli) -> Result<()> {
    let diag = Diagnostics::new(cli.verbose);

    let modules = analyze(&cli.input, &diag)?;

    let include_files = !cli.module_only;
    let report = if cli.csv {
        CsvFormatter::new(include_files).format(&modules)
    } else if cli.json {
        JsonFormatter::new(include_files, cli.pretty).format(&modules)
    } else {
        TextFormatter::new(include_files).format(&modules)
    };

    match &cli.output {
        Some(path) => {
            diag.progress(&format!("Writing report to {}", path.display()));
            std::fs::write(path, format!("{report}\n"))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
        }
        None => println!("{report}"),
    }

    Ok(())
}

/// Run the parse/aggregate pipeline for one link map.
fn analyze(input: &Path, diag: &Diagnostics) -> Result<Vec<Module>> {
    diag.progress(&format!("Loading link map {}", input.display()));
    let source = LinkMapSource::open(input)
        .with_context(|| format!("Failed to open link map: {}", input.display()))?;

    let scan = scan_lines(source, diag)
        .with_context(|| format!("Failed to parse link map: {}", input.display()))?;
    diag.progress(&format!(
        "Parsed {} object files and {} symbols",
        scan.object_files.len(),
        scan.symbols.len()
    ));

    let modules = build_modules(scan.object_files, scan.symbols, diag);
    diag.progress(&format!("Aggregated {} modules", modules.len()));

    Ok(modules)
}
