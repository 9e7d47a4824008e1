pub mod digest;
pub mod hybrid;
pub mod keys;
pub mod signature;
pub mod symmetric;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use protocol::{PK_SIZE, ProtocolError, PublicKey};
use tracing::info;

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes raw bytes to `output`, or their hex form to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote output");
        }
        None => println!("{}", hex::encode(bytes)),
    }
    Ok(())
}

/// Reads a public key from a bare 132-byte key or a `V || s` key-pair export.
pub(crate) fn parse_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let point = bytes.get(..PK_SIZE).ok_or_else(|| {
        anyhow!(
            "public key file holds {} bytes, expected at least {PK_SIZE}",
            bytes.len()
        )
    })?;
    PublicKey::from_bytes(point).context("Invalid public key")
}

/// Turns a decryption result into output or a failure notice.
pub(crate) fn finish_decryption(
    result: Result<Vec<u8>, ProtocolError>,
    output: &Path,
) -> Result<ExitCode> {
    match result {
        Ok(plaintext) => {
            write_output(Some(output), &plaintext)?;
            println!("Decryption succeeded.");
            Ok(ExitCode::SUCCESS)
        }
        Err(ProtocolError::AuthenticationFailed) => {
            eprintln!("Decryption failed: wrong key or modified cryptogram.");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("Decryption failed"),
    }
}
