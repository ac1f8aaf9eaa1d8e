//! rand_core integration tests

use romu_random::{Duo, Mono32, Quad, Quad32, RngCore, SeedableRng, Trio, Trio32};

#[test]
fn test_next_u32_takes_high_half_of_64_bit_output() {
    let mut rng = Trio::from_state([0xaaaa_bbbb_cccc_dddd, 5, 6]);
    assert_eq!(rng.next_u32(), 0xaaaa_bbbb);
}

#[test]
fn test_next_u32_is_one_output_for_32_bit() {
    let mut a = Trio32::with_seed(5);
    let mut b = Trio32::with_seed(5);
    for _ in 0..8 {
        assert_eq!(a.next_u32(), b.next());
    }
}

#[test]
fn test_next_u64_from_16_bit_outputs() {
    let mut rng = Mono32::from_state([0x1234_5678]);
    let expected = 4660u64 | (38490 << 16) | (26941 << 32) | (4297 << 48);
    assert_eq!(rng.next_u64(), expected);
}

#[test]
fn test_fill_bytes_little_endian() {
    let mut rng = Quad::from_state([1, 2, 3, 4]);
    let mut bytes = [0u8; 8];
    rng.fill_bytes(&mut bytes);
    assert_eq!(bytes, 2u64.to_le_bytes());
}

#[test]
fn test_fill_bytes_partial_chunk() {
    let mut a = Duo::with_seed(9);
    let mut b = Duo::with_seed(9);

    let mut bytes = [0u8; 13];
    a.fill_bytes(&mut bytes);

    let first = b.random().to_le_bytes();
    let second = b.random().to_le_bytes();
    assert_eq!(&bytes[..8], &first[..]);
    assert_eq!(&bytes[8..], &second[..5]);
}

#[test]
fn test_try_fill_bytes_never_fails() {
    let mut rng = Quad32::with_seed(1);
    let mut bytes = [0u8; 32];
    assert!(rng.try_fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_from_seed_decodes_state_words() {
    let mut seed = [0u8; 16];
    seed[..4].copy_from_slice(&1u32.to_le_bytes());
    seed[12..].copy_from_slice(&4u32.to_le_bytes());
    assert_eq!(Quad32::from_seed(seed).state(), [1, 0, 0, 4]);
}

#[test]
fn test_from_seed_masks_mono32() {
    let rng = Mono32::from_seed([0xff; 4]);
    assert_eq!(rng.state(), Mono32::with_seed(u32::MAX).state());
}

#[test]
fn test_seed_from_u64_folds_for_32_bit() {
    assert_eq!(
        Trio32::seed_from_u64(0x0000_0001_0000_0002),
        Trio32::with_seed(3)
    );
    assert_eq!(Trio::seed_from_u64(77), Trio::with_seed(77));
}

#[test]
fn test_usable_as_dyn_rng_core() {
    let mut rng = Quad::with_seed(1);
    let dynamic: &mut dyn RngCore = &mut rng;
    let mut buf = [0u8; 3];
    dynamic.fill_bytes(&mut buf);
    assert_ne!(rng.state(), Quad::with_seed(1).state());
}
