use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use protocol::{SymmetricCryptogram, symmetric};

use super::{finish_decryption, read_file, write_output};

#[derive(Args)]
pub struct EncryptArgs {
    /// File to encrypt
    pub input: PathBuf,
    /// File holding the passphrase bytes
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Output file for the cryptogram
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Cryptogram to decrypt
    pub input: PathBuf,
    /// File holding the passphrase bytes
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Output file for the plaintext
    #[arg(long)]
    pub output: PathBuf,
}

pub fn encrypt(args: EncryptArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    let passphrase = read_file(&args.passphrase)?;

    let cryptogram = symmetric::encrypt(&mut rand::rng(), &msg, &passphrase);
    write_output(Some(args.output.as_path()), &cryptogram.to_bytes())?;
    Ok(ExitCode::SUCCESS)
}

pub fn decrypt(args: DecryptArgs) -> Result<ExitCode> {
    let bytes = read_file(&args.input)?;
    let passphrase = read_file(&args.passphrase)?;

    let cryptogram = SymmetricCryptogram::from_bytes(&bytes).context("Malformed cryptogram")?;
    finish_decryption(symmetric::decrypt(&cryptogram, &passphrase), &args.output)
}
