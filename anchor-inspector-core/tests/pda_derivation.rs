//! PDA derivation against pinned vectors.

use anchor_inspector_core::error::InspectorError;
use anchor_inspector_core::pda::{
    create_program_address, derive_pda, derive_pda_from_strings, is_on_curve, MAX_SEEDS,
};
use anchor_inspector_core::pubkey::Pubkey;
use anchor_inspector_core::seed::classify_all;

const METADATA_PROGRAM: &str = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s";
const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

fn key(s: &str) -> Pubkey {
    s.parse().unwrap()
}

#[test]
fn test_create_program_address_vectors() {
    let program_id = key("BPFLoaderUpgradeab1e11111111111111111111111");
    let public_key = key("SeedPubey1111111111111111111111111111111111");

    assert_eq!(
        create_program_address::<&[u8]>(&[b"", &[1]], &program_id).unwrap(),
        key("BwqrghZA2htAcqq8dzP1WDAhTXYTYWj7CHxF5j7TDBAe")
    );
    assert_eq!(
        create_program_address::<&[u8]>(&["☉".as_bytes(), &[0]], &program_id).unwrap(),
        key("13yWmRpaTR4r5nAktwLqMpRNr28tnVUZw26rTvPSSB19")
    );
    assert_eq!(
        create_program_address::<&[u8]>(&[b"Talking", b"Squirrels"], &program_id).unwrap(),
        key("2fnQrngrQT4SeLcdToJAD96phoEjNL2man2kfRLCASVk")
    );
    assert_eq!(
        create_program_address::<&[u8]>(&[public_key.as_ref(), &[1]], &program_id).unwrap(),
        key("976ymqVnfE32QFe6NfGDctSvVa36LWnvYxhU6G2232YL")
    );
}

#[test]
fn test_metadata_seed_fixture() {
    let result = derive_pda(&[b"metadata"], &key(METADATA_PROGRAM)).unwrap();
    assert_eq!(result.address, key("HuKB83z4HVs1kt8ZuPzFjEDV7LjUSxc8PS3sAnb6Q6hD"));
    assert_eq!(result.bump, 253);
}

#[test]
fn test_rejected_bumps_are_on_curve() {
    let program_id = key(METADATA_PROGRAM);
    for bump in [255u8, 254] {
        let err = create_program_address::<&[u8]>(&[b"metadata", &[bump]], &program_id).unwrap_err();
        assert_eq!(err, InspectorError::InvalidSeeds);
    }
    let address = create_program_address::<&[u8]>(&[b"metadata", &[253]], &program_id).unwrap();
    assert_eq!(address, key("HuKB83z4HVs1kt8ZuPzFjEDV7LjUSxc8PS3sAnb6Q6hD"));
    assert!(!is_on_curve(&address.to_bytes()));
}

#[test]
fn test_token_metadata_account_fixture() {
    let program_id = key(METADATA_PROGRAM);
    let mint = key(WRAPPED_SOL_MINT);
    let result =
        derive_pda::<&[u8]>(&[b"metadata", program_id.as_ref(), mint.as_ref()], &program_id).unwrap();
    assert_eq!(result.address, key("6dM4TqWyWJsbx7obrdLcviBkTafD5E8av61zfU6jq57X"));
    assert_eq!(result.bump, 255);
}

#[test]
fn test_from_strings_classifies_before_deriving() {
    let result =
        derive_pda_from_strings(&["metadata", METADATA_PROGRAM, WRAPPED_SOL_MINT], METADATA_PROGRAM)
            .unwrap();
    assert_eq!(result.address, key("6dM4TqWyWJsbx7obrdLcviBkTafD5E8av61zfU6jq57X"));
}

#[test]
fn test_typed_seed_fixtures() {
    let program_id = key(METADATA_PROGRAM);

    let bytes = derive_pda(&classify_all(&["[1,2,3]"]), &program_id).unwrap();
    assert_eq!(bytes.address, key("A31rgUGyrmgiUADVJ17ax3AfefdRq4aUrEhqY5jK4Ze"));
    assert_eq!(bytes.bump, 251);

    let number = derive_pda(&classify_all(&["1000"]), &program_id).unwrap();
    assert_eq!(number.address, key("CSNYZ2EiXsWQtL7sNcUhb2h3aE8KDH2WjWPLs5xfzwm8"));
    assert_eq!(number.bump, 255);
}

#[test]
fn test_no_seeds() {
    let empty: [&[u8]; 0] = [];
    let result = derive_pda(&empty, &key(METADATA_PROGRAM)).unwrap();
    assert_eq!(result.address, key("F5qujjbNbaUe7wtJtGgvFPJfL5a4xgLQMHSGzGUzo7bb"));
    assert_eq!(result.bump, 255);
}

#[test]
fn test_deterministic() {
    let program_id = key(METADATA_PROGRAM);
    let seeds = classify_all(&["vault", "[7,7]", "42"]);
    assert_eq!(derive_pda(&seeds, &program_id), derive_pda(&seeds, &program_id));
}

#[test]
fn test_order_sensitive() {
    let program_id = key(METADATA_PROGRAM);
    let ab = derive_pda(&[b"a", b"b"], &program_id).unwrap();
    let ba = derive_pda(&[b"b", b"a"], &program_id).unwrap();
    assert_eq!(ab.address, key("AxmzXZvFoF8nnbKVCyFm1KiwjxeeVW1duKPGaNKz4oKx"));
    assert_eq!(ba.address, key("EuYaWQbF22v6BKbK8VV6uzunBJ6j6Bni548Vyvagd7F6"));
    assert_ne!(ab, ba);
}

#[test]
fn test_whitespace_changes_the_address() {
    let program_id = key(METADATA_PROGRAM);
    let padded = derive_pda_from_strings(&[" metadata"], METADATA_PROGRAM).unwrap();
    assert_eq!(padded.address, key("3RBdit6r7TgMYZk3enPFAf21r6Yrx9knvA56yWKBrfL6"));
    assert_ne!(padded, derive_pda(&[b"metadata"], &program_id).unwrap());
}

#[test]
fn test_max_seeds_accepted() {
    let seeds = vec![&b"x"[..]; MAX_SEEDS];
    let result = derive_pda(&seeds, &key(METADATA_PROGRAM)).unwrap();
    assert_eq!(result.address, key("Rd75QdjZZDs36oJkHzQFGndayTsGptkbVjVkiMTT8g8"));
    assert_eq!(result.bump, 254);
}

#[test]
fn test_too_many_seeds() {
    let raws = vec!["s"; 17];
    let err = derive_pda_from_strings(&raws, METADATA_PROGRAM).unwrap_err();
    assert_eq!(err, InspectorError::TooManySeeds { count: 17 });
    assert_eq!(err.error_code(), 1003);
}

#[test]
fn test_too_many_seeds_is_checked_before_length() {
    let long = [0u8; 40];
    let seeds = vec![&long[..]; 17];
    let err = derive_pda(&seeds, &key(METADATA_PROGRAM)).unwrap_err();
    assert!(matches!(err, InspectorError::TooManySeeds { .. }));
}

#[test]
fn test_seed_too_long() {
    let raw = "this seed is definitely longer than 32 bytes";
    let err = derive_pda_from_strings(&["ok", raw], METADATA_PROGRAM).unwrap_err();
    assert_eq!(err, InspectorError::SeedTooLong { index: 1, len: raw.len() });
}

#[test]
fn test_exactly_32_byte_seed_is_accepted() {
    let seed = [0u8; 32];
    let result = derive_pda(&[&seed[..]], &key(METADATA_PROGRAM)).unwrap();
    assert_eq!(result.address, key("7yfHDmw58KpvAyyQ3mHLPQQiEsK93ihL6Ef7T3NxkyTt"));
}

#[test]
fn test_invalid_program_id() {
    let long_ones = "1".repeat(200);
    for raw in ["not-base58-0OIl", "", "abc", long_ones.as_str()] {
        let err = derive_pda_from_strings(&["metadata"], raw).unwrap_err();
        assert!(
            matches!(err, InspectorError::InvalidProgramId { .. }),
            "input {:?} gave {:?}",
            raw,
            err
        );
        assert_eq!(err.error_code(), 1000);
    }
}

#[test]
fn test_overlong_program_id_without_seeds() {
    let err = derive_pda_from_strings::<&str>(&[], &"1".repeat(200)).unwrap_err();
    assert!(matches!(err, InspectorError::InvalidProgramId { .. }));
}
