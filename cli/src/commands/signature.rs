use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use protocol::{Signature, sign as sign_message};
use tracing::info;

use super::{parse_public_key, read_file, write_output};

#[derive(Args)]
pub struct SignArgs {
    /// File to sign
    pub input: PathBuf,
    /// File holding the passphrase bytes
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Write the raw 130-byte signature here instead of printing hex
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Signed file
    pub input: PathBuf,
    /// Signature file (130 bytes)
    #[arg(long)]
    pub signature: PathBuf,
    /// Public key file: a bare point or a key-pair export
    #[arg(long)]
    pub public_key: PathBuf,
}

pub fn sign(args: SignArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    let passphrase = read_file(&args.passphrase)?;

    let signature = sign_message(&passphrase, &msg).context("Signing failed")?;
    write_output(args.output.as_deref(), &signature.to_bytes())?;
    Ok(ExitCode::SUCCESS)
}

pub fn verify(args: VerifyArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    let signature =
        Signature::from_bytes(&read_file(&args.signature)?).context("Malformed signature")?;
    let public_key = parse_public_key(&read_file(&args.public_key)?)?;

    if public_key.verify(&msg, &signature).context("Verification failed")? {
        info!("signature accepted");
        println!("Signature is valid.");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Signature is NOT valid.");
        Ok(ExitCode::FAILURE)
    }
}
