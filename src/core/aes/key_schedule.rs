//! AES-128 key expansion: one 16-byte key → 11 round keys

use super::state::State;
use super::tables::{RCON, S_BOX};
use crate::consts::{AES_KEY_LEN, AES_ROUNDS};

/// Round keys 0 through 10, derived once per key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundKeys([State; AES_ROUNDS + 1]);

impl RoundKeys {
    #[inline]
    pub fn round(&self, r: usize) -> &State {
        &self.0[r]
    }

    pub fn as_slice(&self) -> &[State] {
        &self.0
    }
}

/// Expand a 16-byte key into the full AES-128 schedule
pub fn expand_key(key: &[u8; AES_KEY_LEN]) -> RoundKeys {
    let mut rounds = [State::from_block(key); AES_ROUNDS + 1];

    for r in 1..=AES_ROUNDS {
        let prev = rounds[r - 1];

        let [b0, b1, b2, b3] = prev.column(3);
        let mut temp = [b1, b2, b3, b0].map(|b| S_BOX[b as usize]);
        temp[0] ^= RCON[r - 1];

        let mut cols = [[0u8; 4]; 4];
        for c in 0..4 {
            let feed = if c == 0 { temp } else { cols[c - 1] };
            let aligned = prev.column(c);
            for i in 0..4 {
                cols[c][i] = aligned[i] ^ feed[i];
            }
        }
        rounds[r] = State::from_columns(cols);
    }

    RoundKeys(rounds)
}
