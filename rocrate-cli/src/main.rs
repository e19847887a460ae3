mod cli;
mod error;
mod io;

use clap::Parser;
use cli::{Cli, Commands};
use error::{exit_with_error, CliError};
use rocrate_ark::SystemAuthority;
use rocrate_transform::{
    promote_imaging, promote_sequencing, ImagingOptions, SequencingOptions,
};

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → "off" (no logs at all)
    //   --verbose → "info" (full pipeline diagnostics)
    //   default   → "warn" (skip notices and dangling-reference warnings)
    //   RUST_LOG  → honoured unless --quiet is set.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Sra {
            input,
            output,
            naan,
            pattern,
        } => {
            let doc = io::read_document(&input)?;
            let mut opts = SequencingOptions::default();
            if let Some(pattern) = pattern {
                opts.rule.needle = pattern;
            }
            let authority = SystemAuthority::new(&naan);
            let promoted = promote_sequencing(doc, &opts, &authority)?;
            io::write_document(&output, &promoted)?;
        }
        Commands::Imaging {
            input,
            output,
            naan,
            format,
        } => {
            let doc = io::read_document(&input)?;
            let mut opts = ImagingOptions::default();
            if let Some(format) = format {
                opts.format_marker = Some(format);
            }
            let authority = SystemAuthority::new(&naan);
            let promoted = promote_imaging(doc, &opts, &authority)?;
            io::write_document(&output, &promoted)?;
        }
    }
    Ok(())
}
