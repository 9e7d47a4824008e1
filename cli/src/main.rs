use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "kcrypt")]
#[command(about = "KMAC hashing, E-521 signatures and authenticated encryption")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter directives, e.g. "kcrypt=debug,protocol=debug"
    #[arg(long, global = true, env = "KCRYPT_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a file with KMAC (512-bit digest)
    Hash(commands::digest::HashArgs),
    /// Compute a passphrase-keyed authentication tag over a file
    Tag(commands::digest::TagArgs),
    /// Encrypt a file under a passphrase
    Encrypt(commands::symmetric::EncryptArgs),
    /// Decrypt a file encrypted under a passphrase
    Decrypt(commands::symmetric::DecryptArgs),
    /// Derive a key pair from a passphrase and export it
    Keypair(commands::keys::KeypairArgs),
    /// Encrypt a file to a public key
    EcEncrypt(commands::hybrid::EcEncryptArgs),
    /// Decrypt a file with the key pair derived from a passphrase
    EcDecrypt(commands::hybrid::EcDecryptArgs),
    /// Sign a file with the key pair derived from a passphrase
    Sign(commands::signature::SignArgs),
    /// Verify a signature over a file against a public key
    Verify(commands::signature::VerifyArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = match cli.log.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None if cli.verbose => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kcrypt=debug,protocol=debug")),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kcrypt=info"))
        }
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Hash(args) => commands::digest::hash(args),
        Commands::Tag(args) => commands::digest::tag(args),
        Commands::Encrypt(args) => commands::symmetric::encrypt(args),
        Commands::Decrypt(args) => commands::symmetric::decrypt(args),
        Commands::Keypair(args) => commands::keys::keypair(args),
        Commands::EcEncrypt(args) => commands::hybrid::encrypt(args),
        Commands::EcDecrypt(args) => commands::hybrid::decrypt(args),
        Commands::Sign(args) => commands::signature::sign(args),
        Commands::Verify(args) => commands::signature::verify(args),
    }
}
