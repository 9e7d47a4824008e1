use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use protocol::KeyPair;

use super::{read_file, write_output};

#[derive(Args)]
pub struct KeypairArgs {
    /// File holding the passphrase bytes
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Output file for the `V || s` key-pair export
    #[arg(long)]
    pub output: PathBuf,
    /// Also write the bare 132-byte public key here
    #[arg(long)]
    pub public_key: Option<PathBuf>,
}

pub fn keypair(args: KeypairArgs) -> Result<ExitCode> {
    let passphrase = read_file(&args.passphrase)?;
    let key_pair = KeyPair::from_passphrase(&passphrase);

    write_output(Some(args.output.as_path()), &key_pair.to_bytes())?;
    if let Some(path) = args.public_key.as_deref() {
        write_output(Some(path), &key_pair.public.to_bytes())?;
    }
    Ok(ExitCode::SUCCESS)
}
