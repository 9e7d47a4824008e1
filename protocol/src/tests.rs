use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const PASSPHRASE: &[u8] = b"password123";
const MESSAGE: &[u8] = b"test message";

const PUBLIC_KEY_HEX: &str = "001a5f6bcb0cae2b01e1831ba36052e6d43ba3a926f628834864803a168edf80\
                              b77de4c56c388d41e738fea09a75dc2f72dd3ac315650e70ba982574adf85374\
                              0c9501b7bb8e17485d4cbdf94b1b7fd790e34ebbc749858081d353e048ffce73\
                              33d9678945ab147284a391198a583fd7e6834eb29b8f22771c3bee9945897754\
                              f5fb9b66";

const PRIVATE_KEY_HEX: &str = "172139f18b957933dea752aa6a7ff2342e08a02ccc391dcbf4461f8a166e8c22\
                               e01dd71ba97ee378f67256d40eacb90790348ed5ccf6954c77891e6a4e8faba4";

const SIGNATURE_HEX: &str = "005560c1583609697fca1958e6b632cb0750f9758dddfcd8793f7e8c7c04f61e\
                             2828e95058046df99546d736297ee5c3ea94c0e570aef763609af8bae18e1981\
                             bb25836eab756621b24ca897a8c1bda40db3c99351c8d0d31cc540167fc983b4\
                             77345faa3583849a292e35bb68d19d5d7b8ed930c3d0e30328a5142e150b74fe\
                             ef07";

fn unhex(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).expect("hex")
}

#[test]
fn test_known_key_pair() {
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    assert_eq!(key_pair.public.to_bytes().to_vec(), unhex(PUBLIC_KEY_HEX));
    assert_eq!(key_pair.private.to_bytes(), unhex(PRIVATE_KEY_HEX));

    let exported = key_pair.to_bytes();
    assert_eq!(exported.len(), PK_SIZE + 64);
    assert_eq!(&exported[..PK_SIZE], &unhex(PUBLIC_KEY_HEX)[..]);
    assert_eq!(&exported[PK_SIZE..], &unhex(PRIVATE_KEY_HEX)[..]);
}

#[test]
fn test_known_signature() {
    let sig = sign(PASSPHRASE, MESSAGE).expect("sign");
    assert_eq!(sig.to_bytes().to_vec(), unhex(SIGNATURE_HEX));
}

#[test]
fn test_known_digests() {
    assert_eq!(
        hex::encode(digest::hash(MESSAGE)),
        "93df3181b2fbd0d0b9fb797cdb63989889b6a75583437791e6dbda533146a088\
         55ee64055ef98f56333bd7a56df50629bc0b7ebb3724313f0327f374a7c2f4c0"
    );
    assert_eq!(
        hex::encode(digest::authentication_tag(MESSAGE, PASSPHRASE)),
        "b1cca5b26a3dab11dfabda9820ad3bdcdf183b7ad048979316a3df744cfa8b19\
         9f43c73a998064dc194196d515808eb08e5126735ec763d7d911c3fffc26b0a1"
    );
    assert_eq!(
        hex::encode(digest::hash(b"")),
        "d714347493b4cf23af8bea77bf811ee75a99c4087b3329966a0952f57d087aba\
         d4a31831f05a815db330bee0e61be30dc78d4bdcc57f0ce5515a98a53e73505d"
    );
}

#[test]
fn test_sign_verify() {
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let sig = key_pair.private.sign(MESSAGE).expect("sign");
    let ok = key_pair.public.verify(MESSAGE, &sig).expect("verify");
    assert!(ok);
}

#[test]
fn test_sign_is_deterministic() {
    let private = PrivateKey::from_passphrase(PASSPHRASE);
    let a = private.sign(MESSAGE).expect("sign");
    let b = sign(PASSPHRASE, MESSAGE).expect("sign");
    assert_eq!(a, b);
}

#[test]
fn test_verify_rejects_wrong_message() {
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let sig = key_pair.private.sign(MESSAGE).expect("sign");

    let ok = key_pair.public.verify(b"test messagf", &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_wrong_key() {
    let sig = sign(PASSPHRASE, MESSAGE).expect("sign");
    let wrong_pk = PrivateKey::from_passphrase(b"password124").public_key();

    let ok = wrong_pk.verify(MESSAGE, &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_tampered_signature() {
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let mut bytes = key_pair.private.sign(MESSAGE).expect("sign").to_bytes();
    bytes[SIG_SIZE - 1] ^= 1;

    let sig = Signature::from_bytes(&bytes).expect("decode");
    assert!(!key_pair.public.verify(MESSAGE, &sig).expect("verify"));
}

#[test]
fn test_signature_from_bytes_lengths() {
    assert_eq!(
        Signature::from_bytes(&[0u8; SIG_SIZE - 1]),
        Err(ProtocolError::Truncated {
            what: "signature",
            minimum: SIG_SIZE,
            actual: SIG_SIZE - 1,
        })
    );
    assert!(Signature::from_bytes(&[0u8; SIG_SIZE + 1]).is_err());

    let sig = Signature::from_bytes(&unhex(SIGNATURE_HEX)).expect("decode");
    assert_eq!(sig.h()[0], 0x00);
    assert_eq!(sig.to_bytes().to_vec(), unhex(SIGNATURE_HEX));
}

#[test]
fn test_hybrid_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);

    let cryptogram = key_pair.public.encrypt(&mut rng, MESSAGE);
    assert_eq!(cryptogram.ciphertext.len(), MESSAGE.len());

    let bytes = cryptogram.to_bytes();
    assert_eq!(bytes.len(), MIN_CRYPTOGRAM_SIZE + MESSAGE.len());

    let decoded = Cryptogram::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded, cryptogram);
    assert_eq!(key_pair.private.decrypt(&decoded).expect("decrypt"), MESSAGE);
}

#[test]
fn test_hybrid_empty_message() {
    let mut rng = StdRng::seed_from_u64(7);
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);

    let cryptogram = key_pair.public.encrypt(&mut rng, b"");
    assert_eq!(cryptogram.to_bytes().len(), MIN_CRYPTOGRAM_SIZE);
    assert!(key_pair.private.decrypt(&cryptogram).expect("decrypt").is_empty());
}

#[test]
fn test_hybrid_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let other = PrivateKey::from_passphrase(b"another passphrase");

    let cryptogram = key_pair.public.encrypt(&mut rng, MESSAGE);
    assert_eq!(
        other.decrypt(&cryptogram),
        Err(ProtocolError::AuthenticationFailed)
    );
}

#[test]
fn test_hybrid_rejects_tampering() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let cryptogram = key_pair.public.encrypt(&mut rng, MESSAGE);

    let mut flipped = cryptogram.clone();
    flipped.ciphertext[0] ^= 0x01;
    assert_eq!(
        key_pair.private.decrypt(&flipped),
        Err(ProtocolError::AuthenticationFailed)
    );

    let mut flipped = cryptogram;
    flipped.tag[TAG_SIZE - 1] ^= 0x80;
    assert_eq!(
        key_pair.private.decrypt(&flipped),
        Err(ProtocolError::AuthenticationFailed)
    );
}

#[test]
fn test_cryptogram_from_bytes_rejects_malformed() {
    assert_eq!(
        Cryptogram::from_bytes(&[0u8; MIN_CRYPTOGRAM_SIZE - 1]),
        Err(ProtocolError::Truncated {
            what: "cryptogram",
            minimum: MIN_CRYPTOGRAM_SIZE,
            actual: MIN_CRYPTOGRAM_SIZE - 1,
        })
    );

    // An all-zero Z is not on the curve.
    assert_eq!(
        Cryptogram::from_bytes(&[0u8; MIN_CRYPTOGRAM_SIZE + 3]),
        Err(ProtocolError::Curve(curve::CurveError::InvalidPoint))
    );
}

#[test]
fn test_symmetric_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);

    let cryptogram = symmetric::encrypt(&mut rng, MESSAGE, PASSPHRASE);
    let bytes = cryptogram.to_bytes();
    assert_eq!(bytes.len(), MIN_SYMMETRIC_CRYPTOGRAM_SIZE + MESSAGE.len());

    let decoded = SymmetricCryptogram::from_bytes(&bytes).expect("decode");
    assert_eq!(symmetric::decrypt(&decoded, PASSPHRASE).expect("decrypt"), MESSAGE);
}

#[test]
fn test_symmetric_rejects_wrong_passphrase() {
    let mut rng = StdRng::seed_from_u64(42);
    let cryptogram = symmetric::encrypt(&mut rng, MESSAGE, PASSPHRASE);

    assert_eq!(
        symmetric::decrypt(&cryptogram, b"password124"),
        Err(ProtocolError::AuthenticationFailed)
    );
}

#[test]
fn test_symmetric_rejects_flipped_byte() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut bytes = symmetric::encrypt(&mut rng, MESSAGE, PASSPHRASE).to_bytes();
    bytes[NONCE_SIZE + 3] ^= 0x10;

    let cryptogram = SymmetricCryptogram::from_bytes(&bytes).expect("decode");
    assert_eq!(
        symmetric::decrypt(&cryptogram, PASSPHRASE),
        Err(ProtocolError::AuthenticationFailed)
    );
}

#[test]
fn test_symmetric_nonce_changes_ciphertext() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = symmetric::encrypt(&mut rng, MESSAGE, PASSPHRASE);
    let b = symmetric::encrypt(&mut rng, MESSAGE, PASSPHRASE);
    assert_ne!(a.nonce, b.nonce);
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn test_symmetric_from_bytes_truncated() {
    assert!(matches!(
        SymmetricCryptogram::from_bytes(&[0u8; MIN_SYMMETRIC_CRYPTOGRAM_SIZE - 1]),
        Err(ProtocolError::Truncated { .. })
    ));
}

#[test]
fn test_session_requires_key_pair() {
    let mut rng = StdRng::seed_from_u64(42);
    let session = Session::new();

    assert_eq!(session.public_key(), Err(ProtocolError::NoActiveKeyPair));
    assert_eq!(session.sign(MESSAGE), Err(ProtocolError::NoActiveKeyPair));
    assert!(matches!(
        session.encrypt(&mut rng, MESSAGE),
        Err(ProtocolError::NoActiveKeyPair)
    ));
}

#[test]
fn test_session_uses_latest_key_pair() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = Session::new();

    session.generate_key_pair(b"first");
    let cryptogram = session.encrypt(&mut rng, MESSAGE).expect("encrypt");
    assert_eq!(session.decrypt(&cryptogram).expect("decrypt"), MESSAGE);

    let second = session.generate_key_pair(PASSPHRASE).clone();
    assert_eq!(second.public.to_bytes().to_vec(), unhex(PUBLIC_KEY_HEX));
    assert_eq!(
        session.decrypt(&cryptogram),
        Err(ProtocolError::AuthenticationFailed)
    );
    assert_eq!(
        session.sign(MESSAGE).expect("sign").to_bytes().to_vec(),
        unhex(SIGNATURE_HEX)
    );
}

#[test]
fn test_bincode_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::from_passphrase(PASSPHRASE);
    let sig = key_pair.private.sign(MESSAGE).expect("sign");
    let cryptogram = key_pair.public.encrypt(&mut rng, MESSAGE);

    let pk_bytes = bincode::serialize(&key_pair.public).expect("serialize pk");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let ct_bytes = bincode::serialize(&cryptogram).expect("serialize cryptogram");

    let pk: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    let ct: Cryptogram = bincode::deserialize(&ct_bytes).expect("deserialize cryptogram");

    assert_eq!(pk, key_pair.public);
    assert!(pk.verify(MESSAGE, &sig2).expect("verify"));
    assert_eq!(key_pair.private.decrypt(&ct).expect("decrypt"), MESSAGE);
}

#[test]
fn test_public_key_from_bytes() {
    let bytes = unhex(PUBLIC_KEY_HEX);
    let pk = PublicKey::from_bytes(&bytes).expect("decode");
    assert_eq!(pk, PrivateKey::from_passphrase(PASSPHRASE).public_key());

    assert!(matches!(
        PublicKey::from_bytes(&bytes[..PK_SIZE - 1]),
        Err(ProtocolError::Curve(curve::CurveError::InvalidLength { .. }))
    ));
}
