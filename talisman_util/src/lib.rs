//! Small helpers shared by the talisman crates. Currently this is only the byte-to-double-word
//! copy routines used by block-oriented hash functions to parse their input blocks.

/// Fills ``dest`` from the first ``4 * dest.len()`` bytes of ``source``, interpreting every four
/// bytes as one big endian double-word. ``source`` must be at least four times as long as
/// ``dest``, otherwise this function panics.
pub fn copy_to_u32_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Fills ``dest`` from the first ``4 * dest.len()`` bytes of ``source``, interpreting every four
/// bytes as one little endian double-word. ``source`` must be at least four times as long as
/// ``dest``, otherwise this function panics.
pub fn copy_to_u32_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_to_u32_le() {
        let mut dest = [0u32; 2];
        copy_to_u32_le(&mut dest, &[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0xFF, 0x00]);
        assert_eq!([0x1234_5678u32, 0x00FF_00FFu32], dest)
    }

    #[test]
    fn test_copy_to_u32_be() {
        let mut dest = [0u32; 2];
        copy_to_u32_be(&mut dest, &[0x12, 0x34, 0x56, 0x78, 0xFF, 0x00, 0xFF, 0x00]);
        assert_eq!([0x1234_5678u32, 0xFF00_FF00u32], dest)
    }

    #[test]
    fn test_copy_shorter_dest() {
        let mut dest = [0u32; 1];
        copy_to_u32_be(&mut dest, &[0x00, 0x00, 0x00, 0x2A, 0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!([42u32], dest)
    }
}
