use crate::{BlockHashFunction, HashValue};

/// Generate a keyed-hash message authentication code from a `BlockHashFunction` and a given key
/// using the HMAC protocol of RFC 2104.
/// #Parameters
/// - `key` a secret key for the authentication code
/// - `message` an arbitrary-sized message to authenticate
/// - `H` the block hash function underlying the authentication code
///
/// #Outputs
/// Returns a byte vector containing the raw authentication code, sized like the underlying
/// hash output
pub fn hmac<H>(key: &[u8], message: &[u8]) -> Vec<u8>
where
    H: BlockHashFunction<Context = ()>,
{
    let block_size = H::block_size(&());

    // keys longer than one block are shortened by digesting them, shorter keys are zero-padded
    // up to the block size
    let mut padded_key = if key.len() > block_size {
        H::digest_message(&(), key).raw()
    } else {
        key.to_vec()
    };
    padded_key.resize(block_size, 0);

    let mut inner_message: Vec<u8> = padded_key.iter().map(|byte| byte ^ 0x36).collect();
    inner_message.extend_from_slice(message);

    let mut outer_message: Vec<u8> = padded_key.iter().map(|byte| byte ^ 0x5C).collect();
    outer_message.extend_from_slice(&H::digest_message(&(), &inner_message).raw());

    H::digest_message(&(), &outer_message).raw()
}

#[cfg(test)]
mod tests {
    use crate::sha1::Sha1Hash;

    use super::hmac;

    const HMAC_EXAMPLE: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_hmac_sha1() {
        assert_eq!(
            hex::encode(hmac::<Sha1Hash>(b"key", HMAC_EXAMPLE)),
            "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
        );
    }

    #[test]
    fn test_hmac_sha1_rfc_vectors() {
        assert_eq!(
            hex::encode(hmac::<Sha1Hash>(&[0x0b; 20], b"Hi There")),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );

        assert_eq!(
            hex::encode(hmac::<Sha1Hash>(b"Jefe", b"what do ya want for nothing?")),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );

        assert_eq!(
            hex::encode(hmac::<Sha1Hash>(&[0xaa; 20], &[0xdd; 50])),
            "125d7342b9ac11cd91a39af48aa17b4f63f175d3"
        );
    }

    #[test]
    fn test_hmac_sha1_oversize_key() {
        // a key longer than the block size must be shortened by hashing before it is padded
        assert_eq!(
            hex::encode(hmac::<Sha1Hash>(
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            )),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112"
        );
    }
}
