//! Golden generator outputs.

use drsa_core::generate;

use super::hex;

#[test]
fn test_ab_one_round_32_bytes() {
    let out = generate(32, b"test", b"ab", 1).expect("generate");
    assert_eq!(
        hex(out.expose()),
        "7571521012045336ac4993b7a7d43e6acca1bc29740cd91bfa758b95fabecd60"
    );
    // Pattern b7a7 sits at offset 11.
    assert_eq!(&out.expose()[11..13], &[0xb7, 0xa7]);
}

#[test]
fn test_ab_two_rounds_48_bytes() {
    let out = generate(48, b"test", b"ab", 2).expect("generate");
    assert_eq!(
        hex(out.expose()),
        "52182edb2b808181ef737a4d102692057394536bdb2f2827391e0e36f993a796\
         820171ee3caa878b5c4be91c822b468d"
    );
}
