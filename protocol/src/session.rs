//! Caller-owned holder for the active key pair.

use rand::CryptoRng;

use crate::errors::ProtocolError;
use crate::hybrid::Cryptogram;
use crate::keys::{KeyPair, PublicKey};
use crate::signatures::Signature;

/// Holds at most one key pair between generation and use.
///
/// Each logical session owns its own `Session`; nothing is shared between
/// instances, so separate threads need no locking as long as each keeps its
/// own.
#[derive(Clone, Debug, Default)]
pub struct Session {
    active: Option<KeyPair>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a key pair from `passphrase` and makes it the active one,
    /// replacing any previous pair.
    pub fn generate_key_pair(&mut self, passphrase: &[u8]) -> &KeyPair {
        self.active.insert(KeyPair::from_passphrase(passphrase))
    }

    pub fn key_pair(&self) -> Result<&KeyPair, ProtocolError> {
        self.active.as_ref().ok_or(ProtocolError::NoActiveKeyPair)
    }

    pub fn public_key(&self) -> Result<&PublicKey, ProtocolError> {
        Ok(&self.key_pair()?.public)
    }

    /// Hybrid-encrypts `msg` to the active public key.
    pub fn encrypt<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Cryptogram, ProtocolError> {
        Ok(self.public_key()?.encrypt(rng, msg))
    }

    /// Decrypts with the active private key.
    pub fn decrypt(&self, cryptogram: &Cryptogram) -> Result<Vec<u8>, ProtocolError> {
        self.key_pair()?.private.decrypt(cryptogram)
    }

    /// Signs with the active private key.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, ProtocolError> {
        self.key_pair()?.private.sign(msg)
    }
}
