#![allow(clippy::unreadable_literal)]

use std::convert::TryInto;
use std::mem::size_of;
use std::mem::take;

use talisman_util::copy_to_u32_be;

use crate::{BlockHashFunction, HashFunction, HashValue};

/// the digestion block length in bytes
const BLOCK_LENGTH_BYTES: usize = 64;

/// the digest length in bytes
const DIGEST_LENGTH_BYTES: usize = 20;

/// number of double-words in the expanded message schedule of one block
const SCHEDULE_LENGTH: usize = 80;

/// The initial state for any SHA-1 hash, as fixed by the standard. From here, all blocks are
/// applied.
pub const INITIAL: Sha1Hash = Sha1Hash {
    a: 0x67452301,
    b: 0xEFCDAB89,
    c: 0x98BADCFE,
    d: 0x10325476,
    e: 0xC3D2E1F0,
};

/// A SHA-1 hash. It consists of 5 double-words named `a`, `b`, `c`, `d` and `e`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sha1Hash {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

/// State of an unfinished SHA-1 digestion. It holds the intermediate hash, the amount of bits
/// digested so far and the residue of input data that did not fill a whole block yet.
pub struct Sha1State {
    hash: Sha1Hash,
    digested_bits: u64,
    residue: Vec<u8>,
}

impl Sha1Hash {
    /// Compress one block of input data into the hash state. The block is expanded into the
    /// 80 double-word message schedule and then mixed into the five state words over 80 rounds.
    fn compress(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut schedule = [0_u32; SCHEDULE_LENGTH];
        copy_to_u32_be(&mut schedule[0..16], block);

        for t in 16..SCHEDULE_LENGTH {
            schedule[t] = u32::rotate_left(
                schedule[t - 3] ^ schedule[t - 8] ^ schedule[t - 14] ^ schedule[t - 16],
                1,
            );
        }

        let mut round_state = *self;

        for (t, schedule_word) in schedule.iter().enumerate() {
            let (mixed_data, round_constant) = match t {
                0..=19 => (
                    (round_state.b & round_state.c) | (!round_state.b & round_state.d),
                    0x5A827999,
                ),
                20..=39 => (round_state.b ^ round_state.c ^ round_state.d, 0x6ED9EBA1),
                40..=59 => (
                    (round_state.b & round_state.c)
                        | (round_state.b & round_state.d)
                        | (round_state.c & round_state.d),
                    0x8F1BBCDC,
                ),
                60..=79 => (round_state.b ^ round_state.c ^ round_state.d, 0xCA62C1D6),
                _ => unreachable!(),
            };

            let temp = u32::rotate_left(round_state.a, 5)
                .wrapping_add(mixed_data)
                .wrapping_add(round_state.e)
                .wrapping_add(round_constant)
                .wrapping_add(*schedule_word);
            round_state.e = round_state.d;
            round_state.d = round_state.c;
            round_state.c = u32::rotate_left(round_state.b, 30);
            round_state.b = round_state.a;
            round_state.a = temp;
        }

        self.a = self.a.wrapping_add(round_state.a);
        self.b = self.b.wrapping_add(round_state.b);
        self.c = self.c.wrapping_add(round_state.c);
        self.d = self.d.wrapping_add(round_state.d);
        self.e = self.e.wrapping_add(round_state.e);
    }
}

impl Sha1State {
    /// Compress one full block of message data and account for it in the length counter. Padding
    /// blocks are compressed directly instead, as their bytes do not count towards the message
    /// length.
    fn digest_block(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        self.hash.compress(block);
        self.digested_bits = self
            .digested_bits
            .wrapping_add((BLOCK_LENGTH_BYTES * 8) as u64);
    }
}

impl HashFunction for Sha1Hash {
    type Context = ();
    type HashState = Sha1State;
    type HashData = Sha1Hash;

    fn init_hash(_ctx: &Self::Context) -> Self::HashState {
        Sha1State {
            hash: INITIAL,
            digested_bits: 0,
            residue: vec![],
        }
    }

    fn update_hash(hash: &mut Self::HashState, _ctx: &Self::Context, input: &[u8]) {
        // offset of input data that is consumed while completing the carried residue
        let mut input_data_offset = 0;

        if !hash.residue.is_empty() {
            // keep buffering until the residue and the new input fill at least one block
            if hash.residue.len() + input.len() < BLOCK_LENGTH_BYTES {
                hash.residue.extend_from_slice(input);
                return;
            }

            input_data_offset = BLOCK_LENGTH_BYTES - hash.residue.len();

            let mut first_block = [0_u8; BLOCK_LENGTH_BYTES];
            first_block[..hash.residue.len()].copy_from_slice(&hash.residue);
            first_block[hash.residue.len()..].copy_from_slice(&input[..input_data_offset]);

            hash.digest_block(&first_block);
            hash.residue.clear();
        }

        let mut blocks = input[input_data_offset..].chunks_exact(BLOCK_LENGTH_BYTES);
        for block in &mut blocks {
            hash.digest_block(block.try_into().unwrap());
        }

        hash.residue.extend_from_slice(blocks.remainder());
    }

    fn finish_hash(hash: &mut Self::HashState, _ctx: &Self::Context) -> Self::HashData {
        let residue = take(&mut hash.residue);

        let message_length_bits = hash.digested_bits.wrapping_add((residue.len() * 8) as u64);

        // last block: the residue, the single 1-bit end-of-message marker, then zero padding
        let mut last_block = [0_u8; BLOCK_LENGTH_BYTES];
        last_block[..residue.len()].copy_from_slice(&residue);
        last_block[residue.len()] = 0x80_u8;

        // the message length in bits occupies the final eight bytes as a big endian number; if
        // the marker left no room for it, the padding spills into one more block
        if residue.len() + 1 + size_of::<u64>() > BLOCK_LENGTH_BYTES {
            let mut spill_block = [0_u8; BLOCK_LENGTH_BYTES];
            spill_block[BLOCK_LENGTH_BYTES - size_of::<u64>()..]
                .copy_from_slice(&message_length_bits.to_be_bytes());

            hash.hash.compress(&last_block);
            hash.hash.compress(&spill_block);
        } else {
            last_block[BLOCK_LENGTH_BYTES - size_of::<u64>()..]
                .copy_from_slice(&message_length_bits.to_be_bytes());

            hash.hash.compress(&last_block);
        }

        hash.hash
    }
}

impl HashValue for Sha1Hash {
    /// Generates the raw 20 byte digest by concatenating the five state words as big endian
    /// numbers.
    fn raw(&self) -> Vec<u8> {
        let mut digest = Vec::with_capacity(DIGEST_LENGTH_BYTES);
        for word in &[self.a, self.b, self.c, self.d, self.e] {
            digest.extend_from_slice(&word.to_be_bytes());
        }
        digest
    }
}

impl BlockHashFunction for Sha1Hash {
    fn block_size(_ctx: &Self::Context) -> usize {
        BLOCK_LENGTH_BYTES
    }

    fn output_size(_ctx: &Self::Context) -> usize {
        DIGEST_LENGTH_BYTES
    }
}
