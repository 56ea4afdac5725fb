//! On-chain Groth16 verification over BN254 via Solana's alt_bn128
//! precompiles. Compressed points in, uncompressed pairing check out; no
//! proof is ever treated as valid before the pairing equation holds.

use ark_ff::PrimeField;
use num_bigint::BigUint;
use solana_bn254::compression::prelude::{alt_bn128_g1_decompress, alt_bn128_g2_decompress};
use solana_bn254::prelude::{
    alt_bn128_g1_addition_be, alt_bn128_g1_multiplication_be, alt_bn128_pairing_be,
};

use crate::error::PrivacyError;
use crate::state::verification_key::VerificationKeyAccount;

/// BN254 base field modulus `p`, used only to negate proof `A`'s y-coordinate.
const BN254_FIELD_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Compressed Groth16 proof as submitted in instruction data.
pub struct CompressedProof {
    pub a: [u8; 32],
    pub b: [u8; 64],
    pub c: [u8; 32],
}

pub fn is_less_than_bn254_field_size_be(bytes: &[u8; 32]) -> bool {
    let value = BigUint::from_bytes_be(bytes);
    value < ark_bn254::Fr::MODULUS.into()
}

fn negate_y(y: &[u8; 32]) -> [u8; 32] {
    let p = BigUint::from_bytes_be(&BN254_FIELD_MODULUS);
    let y_val = BigUint::from_bytes_be(y);
    let neg_y = if y_val == BigUint::from(0u32) {
        y_val
    } else {
        &p - &y_val
    };
    let bytes = neg_y.to_bytes_be();
    let mut result = [0u8; 32];
    result[32 - bytes.len()..].copy_from_slice(&bytes);
    result
}

/// Decompresses the proof and negates `A`, as the pairing check requires `-A`.
fn decompress_and_negate(
    compressed: &CompressedProof,
) -> Result<([u8; 64], [u8; 128], [u8; 64]), PrivacyError> {
    let a_decompressed =
        alt_bn128_g1_decompress(&compressed.a).map_err(|_| PrivacyError::InvalidProof)?;

    let mut a_neg = [0u8; 64];
    a_neg[..32].copy_from_slice(&a_decompressed[..32]);
    let y: [u8; 32] = a_decompressed[32..64]
        .try_into()
        .map_err(|_| PrivacyError::InvalidProof)?;
    a_neg[32..64].copy_from_slice(&negate_y(&y));

    let b = alt_bn128_g2_decompress(&compressed.b).map_err(|_| PrivacyError::InvalidProof)?;
    let c = alt_bn128_g1_decompress(&compressed.c).map_err(|_| PrivacyError::InvalidProof)?;

    Ok((a_neg, b, c))
}

fn prepare_public_inputs(
    vk: &VerificationKeyAccount,
    public_inputs: &[[u8; 32]; 8],
) -> Result<[u8; 64], PrivacyError> {
    let mut prepared = vk.vk_ic[0];

    for (i, input) in public_inputs.iter().enumerate() {
        if !is_less_than_bn254_field_size_be(input) {
            return Err(PrivacyError::InvalidPublicInputs);
        }
        let mul = alt_bn128_g1_multiplication_be(&[&vk.vk_ic[i + 1][..], &input[..]].concat())
            .map_err(|_| PrivacyError::InvalidProof)?;
        prepared = alt_bn128_g1_addition_be(&[&mul[..], &prepared[..]].concat())
            .map_err(|_| PrivacyError::InvalidProof)?[..]
            .try_into()
            .map_err(|_| PrivacyError::InvalidProof)?;
    }

    Ok(prepared)
}

/// Verifies a compressed Groth16 proof against the stored verifying key and
/// the eight ordered public inputs. Returns `Ok(())` only if the pairing
/// equation holds; any structural or cryptographic failure is
/// `PrivacyError::InvalidProof`.
pub fn verify(
    compressed: &CompressedProof,
    public_inputs: &[[u8; 32]; 8],
    vk: &VerificationKeyAccount,
) -> Result<(), PrivacyError> {
    if vk.vk_ic.len() != public_inputs.len() + 1 {
        return Err(PrivacyError::InvalidPublicInputs);
    }

    let (a, b, c) = decompress_and_negate(compressed)?;
    let prepared = prepare_public_inputs(vk, public_inputs)?;

    let pairing_input = [
        a.as_slice(),
        b.as_slice(),
        prepared.as_slice(),
        vk.vk_gamma_g2.as_slice(),
        c.as_slice(),
        vk.vk_delta_g2.as_slice(),
        vk.vk_alpha_g1.as_slice(),
        vk.vk_beta_g2.as_slice(),
    ]
    .concat();

    let result =
        alt_bn128_pairing_be(pairing_input.as_slice()).map_err(|_| PrivacyError::InvalidProof)?;

    if result[31] != 1 {
        return Err(PrivacyError::InvalidProof);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_y_zero_is_zero() {
        assert_eq!(negate_y(&[0u8; 32]), [0u8; 32]);
    }

    #[test]
    fn negate_y_is_involution() {
        let mut y = [0u8; 32];
        y[31] = 42;
        assert_eq!(negate_y(&negate_y(&y)), y);
    }

    #[test]
    fn field_size_check_rejects_modulus_and_above() {
        let fr_modulus: BigUint = ark_bn254::Fr::MODULUS.into();
        let bytes = fr_modulus.to_bytes_be();
        let mut arr = [0u8; 32];
        arr[32 - bytes.len()..].copy_from_slice(&bytes);
        assert!(!is_less_than_bn254_field_size_be(&arr));
    }

    #[test]
    fn field_size_check_accepts_small_values() {
        let mut one = [0u8; 32];
        one[31] = 1;
        assert!(is_less_than_bn254_field_size_be(&one));
    }
}
