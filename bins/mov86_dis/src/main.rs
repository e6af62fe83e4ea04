use clap::Parser;
use mov86_decoder::{write_listing, ListingError, ListingOptions};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "mov86-dis", version, about = "Disassemble 8086 mov instructions")]
struct Opt {
    /// The binary file to disassemble
    binary: PathBuf,

    /// Write the listing to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Append the offset and raw bytes of each instruction as a comment
    #[arg(short, long)]
    annotate: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Listing(#[from] ListingError),
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Set `RUST_LOG=debug` to see every decoded instruction.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn write_to(
    out: &mut impl Write,
    binary: &Path,
    data: Vec<u8>,
    options: ListingOptions,
) -> Result<usize, Error> {
    writeln!(out, "; {}", binary.display()).map_err(ListingError::from)?;

    // Flush whatever was decoded before reporting an error.
    let result = write_listing(data, out, options);
    out.flush().map_err(ListingError::from)?;

    Ok(result?)
}

fn disassemble(opt: &Opt) -> Result<usize, Error> {
    let data = std::fs::read(&opt.binary).map_err(|source| Error::Read {
        path: opt.binary.clone(),
        source,
    })?;

    info!("Read {} bytes from {}", data.len(), opt.binary.display());

    let options = ListingOptions {
        annotate: opt.annotate,
    };

    match opt.output {
        Some(ref path) => {
            let file = File::create(path).map_err(|source| Error::Create {
                path: path.clone(),
                source,
            })?;
            write_to(&mut BufWriter::new(file), &opt.binary, data, options)
        }
        None => {
            let stdout = std::io::stdout();
            write_to(&mut BufWriter::new(stdout.lock()), &opt.binary, data, options)
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let opt = Opt::parse();

    match disassemble(&opt) {
        Ok(count) => {
            info!("Disassembled {} instructions", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
