//! sigdoc: sign and verify `{cleartext, signature}` JSON documents
//!
//! Exit status: 0 when a document verifies, 1 when its signature does not
//! match, 2 for every error (unreadable input, malformed key or document,
//! undecodable signature, bad arguments).

mod commands;
mod error;
mod logging;
mod settings;

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgGroup, Parser, Subcommand};
use colored::Colorize;
use error::CliResult;
use settings::Settings;

/// Exit status for any error.
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "sigdoc")]
#[command(about = "Sign and verify JSON documents with RSA and ECDSA keys")]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true, env = "SIGDOC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a signed document against a public key
    Verify {
        /// Signed JSON document [default: document.json]
        #[arg(short, long)]
        document: Option<String>,

        /// PEM public key [default: public_key.ecdsa.pem]
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Sign a cleartext and write the JSON document
    #[command(group(ArgGroup::new("source").required(true).args(["cleartext", "file", "random"])))]
    Sign {
        /// PKCS#8 PEM private key
        #[arg(short, long, default_value = settings::DEFAULT_PRIVATE_KEY)]
        key: String,

        /// Text to sign
        #[arg(short, long)]
        cleartext: Option<String>,

        /// Sign the contents of a UTF-8 file
        #[arg(short, long)]
        file: Option<String>,

        /// Sign a random hex string
        #[arg(long)]
        random: bool,

        /// Passphrase for an encrypted private key
        #[arg(long, env = "SIGDOC_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Output document
        #[arg(short, long, default_value = "document.json")]
        output: String,
    },

    /// Generate a new key pair
    Generate {
        /// rsa2048, rsa3072, rsa4096, p256 or p384
        #[arg(short, long, default_value = "p384")]
        algorithm: String,

        /// Write <name>_private.pem and <name>_public.pem instead of
        /// private.ecdsa.secure.pem and public_key.ecdsa.pem
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<String>,

        /// Encrypt the private key with this passphrase
        #[arg(long, env = "SIGDOC_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Replace key files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Show algorithm, size and fingerprint of a key
    Info {
        /// PEM public or private key
        #[arg(short, long)]
        key: String,

        /// Passphrase for an encrypted private key
        #[arg(long, env = "SIGDOC_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    logging::init_tracing(&settings.log);

    match cli.command {
        Commands::Verify { document, key } => {
            let document = document.unwrap_or(settings.verify.document);
            let key = key.unwrap_or(settings.verify.key);
            return commands::verify::handle(document, key);
        }
        Commands::Sign { key, cleartext, file, random, passphrase, output } => {
            let source = commands::sign::CleartextSource::from_args(cleartext, file, random)?;
            commands::sign::handle(key, source, passphrase, output)?;
        }
        Commands::Generate { algorithm, name, output, passphrase, force } => {
            commands::generate::handle(name, algorithm, output, passphrase, force)?;
        }
        Commands::Info { key, passphrase } => {
            commands::info::handle(key, passphrase)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
