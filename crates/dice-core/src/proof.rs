//! Entropy proofs for after-the-fact roll verification.
//!
//! A proof is the first 16 hex characters of the SHA-256 digest of an entropy
//! block. The engine publishes the proof with every roll while keeping the
//! block itself secret; an auditor who is later shown the block can recompute
//! the fingerprint and confirm it produced the observed result.

use sha2::{Digest, Sha256};

use crate::entropy::ENTROPY_LEN;

/// Length in hex characters of a proof fingerprint.
pub const PROOF_LEN: usize = 16;

/// Derives the public fingerprint for an entropy block.
pub fn prove(entropy: &[u8; ENTROPY_LEN]) -> String {
    let digest = Sha256::digest(entropy);
    let mut fingerprint = hex::encode(digest);
    fingerprint.truncate(PROOF_LEN);
    fingerprint
}

/// Checks a claimed proof against candidate entropy.
///
/// Total: a mismatch is an expected outcome (tampering or a wrong-entropy
/// claim), never an error.
pub fn verify(proof: &str, entropy: &[u8; ENTROPY_LEN]) -> bool {
    prove(entropy) == proof
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_is_truncated_sha256_hex() {
        // SHA-256 of 32 zero bytes starts with 66687aadf862bd77.
        assert_eq!(prove(&[0u8; ENTROPY_LEN]), "66687aadf862bd77");
    }

    #[test]
    fn proof_has_fixed_length() {
        let mut source = crate::EntropySource::seeded(*b"proof len");
        for _ in 0..8 {
            assert_eq!(prove(&source.next_block()).len(), PROOF_LEN);
        }
    }

    #[test]
    fn verify_accepts_matching_entropy() {
        let entropy = [7u8; ENTROPY_LEN];
        assert!(verify(&prove(&entropy), &entropy));
    }

    #[test]
    fn verify_rejects_different_entropy() {
        let entropy = [7u8; ENTROPY_LEN];
        let mut tampered = entropy;
        tampered[0] ^= 1;
        assert!(!verify(&prove(&entropy), &tampered));
    }

    #[test]
    fn verify_rejects_malformed_proof() {
        assert!(!verify("", &[0u8; ENTROPY_LEN]));
        assert!(!verify("not a hex string", &[0u8; ENTROPY_LEN]));
    }
}
