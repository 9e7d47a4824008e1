use protocol::{Cryptogram, KeyPair, PublicKey, Signature};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let key_pair = KeyPair::from_passphrase(b"hello kmac");

    let pk_bytes = bincode::serialize(&key_pair.public).expect("serialize pk");

    let msg = b"hello e521";
    let sig = key_pair.private.sign(msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let cryptogram = key_pair.public.encrypt(&mut rng, msg);
    let ct_bytes = bincode::serialize(&cryptogram).expect("serialize cryptogram");

    let pk: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    let ct: Cryptogram = bincode::deserialize(&ct_bytes).expect("deserialize cryptogram");

    let ok = pk.verify(msg, &sig2).expect("verify");
    assert!(ok);

    let plaintext = key_pair.private.decrypt(&ct).expect("decrypt");
    assert_eq!(plaintext, msg);
}
