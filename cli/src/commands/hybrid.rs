use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use protocol::{Cryptogram, PrivateKey};

use super::{finish_decryption, parse_public_key, read_file, write_output};

#[derive(Args)]
pub struct EcEncryptArgs {
    /// File to encrypt
    pub input: PathBuf,
    /// Public key file: a bare point or a key-pair export
    #[arg(long)]
    pub public_key: PathBuf,
    /// Output file for the cryptogram
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct EcDecryptArgs {
    /// Cryptogram to decrypt
    pub input: PathBuf,
    /// File holding the passphrase the key pair was derived from
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Output file for the plaintext
    #[arg(long)]
    pub output: PathBuf,
}

pub fn encrypt(args: EcEncryptArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    let public_key = parse_public_key(&read_file(&args.public_key)?)?;

    let cryptogram = public_key.encrypt(&mut rand::rng(), &msg);
    write_output(Some(args.output.as_path()), &cryptogram.to_bytes())?;
    Ok(ExitCode::SUCCESS)
}

pub fn decrypt(args: EcDecryptArgs) -> Result<ExitCode> {
    let bytes = read_file(&args.input)?;
    let passphrase = read_file(&args.passphrase)?;

    let cryptogram = Cryptogram::from_bytes(&bytes).context("Malformed cryptogram")?;
    let private_key = PrivateKey::from_passphrase(&passphrase);
    finish_decryption(private_key.decrypt(&cryptogram), &args.output)
}
