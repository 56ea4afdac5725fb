//! Scenario-level tests tying the note/Merkle/external-data primitives
//! together the way a real `Transact` call would exercise them. Per-module
//! unit tests already cover each primitive in isolation; this module works
//! through the concrete end-to-end scenarios at a toy height (`H = 3`).

#[cfg(test)]
mod deposit_and_withdrawal_scenario {
    use pool_crypto::ext_data::public_amount;
    use pool_crypto::field::FieldElement;
    use pool_crypto::merkle::Accumulator;
    use pool_crypto::note::{nullifier, Keypair, Note};

    const HEIGHT: u8 = 3;
    const RING: usize = 30;

    fn mint() -> FieldElement {
        FieldElement::from_u64(1)
    }

    /// Scenario 1: fresh deposit with two dummy inputs and two outputs
    /// {amount=90} / {amount=0}, extAmount=100, fee=10.
    #[test]
    fn fresh_deposit_advances_tree_and_balances() {
        let mut tree = Accumulator::new(HEIGHT, RING).unwrap();
        let owner = Keypair::from_privkey(FieldElement::from_u64(42));
        let pubkey = owner.pubkey().unwrap();
        let blinding0 = FieldElement::from_u64(1001);
        let blinding1 = FieldElement::from_u64(1002);

        let output0 = Note {
            amount: 90,
            blinding: blinding0,
            pubkey,
            mint: mint(),
        };
        let output1 = Note::dummy(pubkey, blinding1, mint());

        let c0 = output0.commitment().unwrap();
        let c1 = output1.commitment().unwrap();

        assert_eq!(tree.next_index(), 0);
        let i0 = tree.insert(c0).unwrap();
        let i1 = tree.insert(c1).unwrap();
        assert_eq!((i0, i1), (0, 1));
        assert_eq!(tree.next_index(), 2);

        // Reference root: same two leaves inserted into a fresh tree must match.
        let mut reference = Accumulator::new(HEIGHT, RING).unwrap();
        reference.insert(c0).unwrap();
        reference.insert(c1).unwrap();
        assert_eq!(tree.root(), reference.root());
        assert!(tree.known_root(&tree.root()));

        // publicAmount = extAmount - fee = 90, matching sum(outputs) - sum(inputs).
        let ext_amount = 100i64;
        let fee = 10u64;
        let amount = public_amount(ext_amount, fee).unwrap();
        assert_eq!(amount, FieldElement::from_u64(90));
    }

    /// Scenario 2: withdrawal spending `c_0` from (1) plus a dummy input,
    /// extAmount=-50, fee=5, outputs {amount=35} and {amount=0}.
    #[test]
    fn withdrawal_consumes_prior_deposit_and_reuses_ring_root() {
        let mut tree = Accumulator::new(HEIGHT, RING).unwrap();
        let owner = Keypair::from_privkey(FieldElement::from_u64(42));
        let pubkey = owner.pubkey().unwrap();

        let deposit_output = Note {
            amount: 90,
            blinding: FieldElement::from_u64(1001),
            pubkey,
            mint: mint(),
        };
        let c0 = deposit_output.commitment().unwrap();
        let c1 = Note::dummy(pubkey, FieldElement::from_u64(1002), mint())
            .commitment()
            .unwrap();
        tree.insert(c0).unwrap();
        tree.insert(c1).unwrap();
        let deposit_root = tree.root();

        // Spend c0 at index 0, plus a dummy second input.
        let null0 = nullifier(&owner, c0, 0).unwrap();
        let dummy_input = Note::dummy(pubkey, FieldElement::from_u64(7), mint());
        let null1 = nullifier(&owner, dummy_input.commitment().unwrap(), 1).unwrap();
        assert_ne!(null0, null1, "two inputs of one transaction never collide");

        let withdrawal_output = Note {
            amount: 35,
            blinding: FieldElement::from_u64(2001),
            pubkey,
            mint: mint(),
        };
        let c2 = withdrawal_output.commitment().unwrap();
        let c3 = Note::dummy(pubkey, FieldElement::from_u64(2002), mint())
            .commitment()
            .unwrap();

        tree.insert(c2).unwrap();
        tree.insert(c3).unwrap();
        assert_eq!(tree.next_index(), 4);

        // The deposit's root must still be a known (ring) root at this depth.
        assert!(tree.known_root(&deposit_root));

        let amount = public_amount(-50, 5).unwrap();
        assert_eq!(amount, FieldElement::from_u64(55).neg());
    }

    /// Scenario 3: resubmitting a spend must be detected by nullifier reuse
    /// before any state changes, regardless of how many times it is checked.
    #[test]
    fn replayed_nullifier_is_recognized_as_already_seen() {
        let owner = Keypair::from_privkey(FieldElement::from_u64(1));
        let commitment = FieldElement::from_u64(500);

        let mut seen = std::collections::HashSet::new();
        let first = nullifier(&owner, commitment, 0).unwrap();
        assert!(seen.insert(first));

        let replay = nullifier(&owner, commitment, 0).unwrap();
        assert_eq!(replay, first);
        assert!(!seen.insert(replay), "replayed nullifier must already be present");
    }

    /// Scenario 4: once enough insertions happen that a past root ages out
    /// of the ring, it must no longer be recognized as known.
    #[test]
    fn stale_root_ages_out_of_ring() {
        let ring_capacity = 2;
        let mut tree = Accumulator::new(HEIGHT, ring_capacity).unwrap();
        tree.insert(FieldElement::from_u64(1)).unwrap();
        let stale_root = tree.root();
        assert!(tree.known_root(&stale_root));

        tree.insert(FieldElement::from_u64(2)).unwrap();
        tree.insert(FieldElement::from_u64(3)).unwrap();
        assert!(!tree.known_root(&stale_root));
    }

    /// Scenario 6: a deposit cap enforcement check is a plain comparison
    /// against the external amount, performed before the proof is even
    /// checked.
    #[test]
    fn deposit_cap_enforcement_rejects_oversized_deposit() {
        let deposit_cap = 100u64;
        let ext_amount = 101i64;
        assert!(ext_amount as u64 > deposit_cap);
    }
}

#[cfg(test)]
mod envelope_tampering_scenario {
    use pool_crypto::ext_data::ExtData;
    use pool_crypto::field::FieldElement;

    /// Scenario 5: changing one byte of the recipient must change the
    /// recomputed `extDataHash`, which is the verifier's only lever against
    /// a tampered withdrawal envelope.
    #[test]
    fn recipient_byte_change_invalidates_ext_data_hash() {
        let mut data = ExtData {
            recipient: [9u8; 32],
            ext_amount: -50,
            fee: 5,
            fee_recipient: [2u8; 32],
            mint: FieldElement::from_u64(1),
            encrypted_output0: vec![1, 2, 3, 4],
            encrypted_output1: vec![5, 6, 7, 8],
        };
        let original_hash = data.hash().unwrap();

        data.recipient[31] ^= 0x01;
        let tampered_hash = data.hash().unwrap();

        assert_ne!(original_hash, tampered_hash);
    }

    #[test]
    fn fee_change_invalidates_ext_data_hash() {
        let mut data = ExtData {
            recipient: [9u8; 32],
            ext_amount: -50,
            fee: 5,
            fee_recipient: [2u8; 32],
            mint: FieldElement::from_u64(1),
            encrypted_output0: vec![1, 2, 3, 4],
            encrypted_output1: vec![5, 6, 7, 8],
        };
        let original_hash = data.hash().unwrap();
        data.fee += 1;
        assert_ne!(original_hash, data.hash().unwrap());
    }
}

#[cfg(test)]
mod balance_rule_scenario {
    use ark_ff::PrimeField;
    use num_bigint::BigUint;
    use pool_crypto::ext_data::public_amount;
    use pool_crypto::field::FieldElement;

    fn modular_sum(values: &[FieldElement]) -> BigUint {
        let p: BigUint = ark_bn254::Fr::MODULUS.into();
        values
            .iter()
            .fold(BigUint::from(0u32), |acc, v| {
                (acc + BigUint::from_bytes_be(&v.to_be_bytes())) % &p
            })
    }

    /// `sum(input_amounts) + publicAmount == sum(output_amounts) (mod p)`
    /// for the deposit in scenario 1: inputs are both dummies (0 + 0),
    /// publicAmount folds extAmount - fee = 90, outputs sum to 90 + 0.
    #[test]
    fn deposit_satisfies_balance_rule() {
        let amount = public_amount(100, 10).unwrap();
        let lhs = modular_sum(&[FieldElement::from_u64(0), FieldElement::from_u64(0), amount]);
        let rhs = modular_sum(&[FieldElement::from_u64(90), FieldElement::from_u64(0)]);
        assert_eq!(lhs, rhs);
    }

    /// For the withdrawal in scenario 2: one real input of 90, one dummy;
    /// publicAmount folds -50 - 5 = -55; outputs sum to 35 + 0.
    #[test]
    fn withdrawal_satisfies_balance_rule() {
        let amount = public_amount(-50, 5).unwrap();
        let lhs = modular_sum(&[FieldElement::from_u64(90), FieldElement::from_u64(0), amount]);
        let rhs = modular_sum(&[FieldElement::from_u64(35), FieldElement::from_u64(0)]);
        assert_eq!(lhs, rhs);
    }
}
