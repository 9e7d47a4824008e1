use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use protocol::digest;

use super::{read_file, write_output};

#[derive(Args)]
pub struct HashArgs {
    /// File to hash
    pub input: PathBuf,
    /// Write the raw digest here instead of printing hex
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct TagArgs {
    /// File to authenticate
    pub input: PathBuf,
    /// File holding the passphrase bytes
    #[arg(long)]
    pub passphrase: PathBuf,
    /// Write the raw tag here instead of printing hex
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn hash(args: HashArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    write_output(args.output.as_deref(), &digest::hash(&msg))?;
    Ok(ExitCode::SUCCESS)
}

pub fn tag(args: TagArgs) -> Result<ExitCode> {
    let msg = read_file(&args.input)?;
    let passphrase = read_file(&args.passphrase)?;
    write_output(
        args.output.as_deref(),
        &digest::authentication_tag(&msg, &passphrase),
    )?;
    Ok(ExitCode::SUCCESS)
}
