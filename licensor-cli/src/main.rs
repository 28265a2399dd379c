//! lkgen: key and license tool for licensor.
//!
//! Usage:
//!   lkgen gen --output private.key
//!   lkgen pub private.key > public.key
//!   lkgen sign private.key --data doc.json > license.txt
//!   lkgen verify public.key license.txt
//!
//! Keys and licenses are read and written in `--format` (base32 unless
//! `LKGEN_FORMAT` says otherwise). Logs go to stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use licensor::{Codec, Format, License, PrivateKey, PublicKey};
use tracing::{Level, debug, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "lkgen")]
#[command(about = "Generate keys, sign and verify licenses")]
struct Args {
    /// Encoding for keys and licenses: b64, b32, hex or bytes
    #[arg(short, long, global = true, env = "LKGEN_FORMAT", default_value = "b32")]
    format: Format,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new private key
    Gen {
        /// Write the key to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the public key of a private key
    Pub {
        /// Private key file
        private_key: PathBuf,

        /// Write the key to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Sign a document into a license
    Sign {
        /// Private key file
        private_key: PathBuf,

        /// Document to sign (stdin if omitted)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Write the license to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Verify a license and print its document
    Verify {
        /// Public key file
        public_key: PathBuf,

        /// License file
        license: PathBuf,
    },
}

/// Exit status for a successful command.
const EXIT_OK: u8 = 0;
/// Exit status for a license whose signature does not match.
const EXIT_UNTRUSTED: u8 = 1;
/// Exit status for unreadable or malformed input.
const EXIT_MALFORMED: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    ExitCode::from(exit_status(run(&args)))
}

/// Maps a command outcome to the process exit status.
fn exit_status(outcome: Result<u8>) -> u8 {
    outcome.unwrap_or_else(|err| {
        error!("{err:#}");
        EXIT_MALFORMED
    })
}

/// Result of checking a license file against a public key file.
#[derive(Debug)]
enum Verdict {
    /// Signature matches; carries the signed document.
    Trusted(Vec<u8>),
    /// Well-formed, but the signature does not match.
    Untrusted,
}

impl Verdict {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Trusted(_) => EXIT_OK,
            Self::Untrusted => EXIT_UNTRUSTED,
        }
    }
}

fn run(args: &Args) -> Result<u8> {
    let format = args.format;
    debug!(%format, "selected format");

    match &args.command {
        Command::Gen { output } => {
            let key = PrivateKey::generate().context("failed to generate private key")?;
            write_output(output.as_deref(), format, &key.encode(format))?;
            info!("generated private key");
        }
        Command::Pub {
            private_key,
            output,
        } => {
            let key: PrivateKey = read_encoded(private_key, format)?;
            write_output(output.as_deref(), format, &key.public_key().encode(format))?;
        }
        Command::Sign {
            private_key,
            data,
            output,
        } => {
            let key: PrivateKey = read_encoded(private_key, format)?;
            let document = read_document(data.as_deref())?;
            let license = License::sign(&key, document);
            write_output(output.as_deref(), format, &license.encode(format))?;
            info!(data_len = license.data().len(), "license signed");
        }
        Command::Verify {
            public_key,
            license,
        } => {
            let verdict = verify_files(public_key, license, format)?;
            match &verdict {
                Verdict::Trusted(document) => {
                    info!("license valid");
                    io::stdout()
                        .write_all(document)
                        .context("failed to write document")?;
                }
                Verdict::Untrusted => error!("license signature invalid"),
            }
            return Ok(verdict.exit_code());
        }
    }
    Ok(EXIT_OK)
}

/// Verifies the license file against the public key file.
///
/// Unreadable or malformed files are errors; a mismatched signature is
/// [`Verdict::Untrusted`].
fn verify_files(public_key: &Path, license: &Path, format: Format) -> Result<Verdict> {
    let key: PublicKey = read_encoded(public_key, format)?;
    let license: License = read_encoded(license, format)?;
    if license.verify(&key).context("cannot verify license")? {
        Ok(Verdict::Trusted(license.into_data()))
    } else {
        Ok(Verdict::Untrusted)
    }
}

/// Reads a key or license file in `format`.
fn read_encoded<T: Codec>(path: &Path, format: Format) -> Result<T> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    T::decode(format, trim_text(&raw, format))
        .with_context(|| format!("failed to decode {} as {format}", path.display()))
}

fn read_document(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read document from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, format: Format, encoded: &[u8]) -> Result<()> {
    let mut out = encoded.to_vec();
    if format != Format::Bytes {
        out.push(b'\n');
    }
    match path {
        Some(path) => {
            fs::write(path, &out).with_context(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout().write_all(&out).context("failed to write stdout"),
    }
}

/// Text files usually end in a newline; raw byte files are taken as-is.
fn trim_text(raw: &[u8], format: Format) -> &[u8] {
    match format {
        Format::Bytes => raw,
        _ => raw.trim_ascii(),
    }
}
