//! Helpers for embedding external test vectors.

/// Decodes a hex vector, ignoring whitespace so long vectors can be split across lines.
pub(crate) fn decode(vector: &str) -> Vec<u8> {
    let vector: String = vector.split_whitespace().collect();
    hex::decode(vector).unwrap()
}

#[test]
fn test_decode_multiline() {
    assert_eq!(
        decode(
            "01 02
             ff"
        ),
        vec![0x01, 0x02, 0xff]
    );
    assert!(decode("").is_empty());
}
