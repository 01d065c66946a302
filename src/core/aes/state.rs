//! The 4×4 AES state and its round transforms
//!
//! The state is kept as four 4-byte columns: `cols[c][r]` holds row `r` of
//! column `c`, which is byte `4 * c + r` of the input block. Every transform
//! works in place and is a pure function of the state (plus the round key).

use super::tables::{INV_S_BOX, S_BOX};
use crate::consts::AES_BLOCK_SIZE;

/// One 16-byte AES block as a 4×4 byte grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    cols: [[u8; 4]; 4],
}

impl State {
    pub fn from_block(block: &[u8; AES_BLOCK_SIZE]) -> Self {
        let mut cols = [[0u8; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            col.copy_from_slice(&block[4 * c..4 * c + 4]);
        }
        Self { cols }
    }

    pub fn to_block(&self) -> [u8; AES_BLOCK_SIZE] {
        let mut block = [0u8; AES_BLOCK_SIZE];
        for (c, col) in self.cols.iter().enumerate() {
            block[4 * c..4 * c + 4].copy_from_slice(col);
        }
        block
    }

    pub(crate) fn from_columns(cols: [[u8; 4]; 4]) -> Self {
        Self { cols }
    }

    #[inline]
    pub fn column(&self, c: usize) -> [u8; 4] {
        self.cols[c]
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cols[col][row]
    }

    pub fn sub_bytes(&mut self) {
        for byte in self.cols.iter_mut().flatten() {
            *byte = S_BOX[*byte as usize];
        }
    }

    pub fn inv_sub_bytes(&mut self) {
        for byte in self.cols.iter_mut().flatten() {
            *byte = INV_S_BOX[*byte as usize];
        }
    }

    /// Row `r` rotates left by `r`
    pub fn shift_rows(&mut self) {
        let old = self.cols;
        for r in 1..4 {
            for c in 0..4 {
                self.cols[c][r] = old[(c + r) % 4][r];
            }
        }
    }

    /// Row `r` rotates right by `r`
    pub fn inv_shift_rows(&mut self) {
        let old = self.cols;
        for r in 1..4 {
            for c in 0..4 {
                self.cols[c][r] = old[(c + 4 - r) % 4][r];
            }
        }
    }

    pub fn mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let [a0, a1, a2, a3] = *col;
            col[0] = gf_mul(a0, 2) ^ gf_mul(a1, 3) ^ a2 ^ a3;
            col[1] = a0 ^ gf_mul(a1, 2) ^ gf_mul(a2, 3) ^ a3;
            col[2] = a0 ^ a1 ^ gf_mul(a2, 2) ^ gf_mul(a3, 3);
            col[3] = gf_mul(a0, 3) ^ a1 ^ a2 ^ gf_mul(a3, 2);
        }
    }

    pub fn inv_mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let [a0, a1, a2, a3] = *col;
            col[0] = gf_mul(a0, 0x0e) ^ gf_mul(a1, 0x0b) ^ gf_mul(a2, 0x0d) ^ gf_mul(a3, 0x09);
            col[1] = gf_mul(a0, 0x09) ^ gf_mul(a1, 0x0e) ^ gf_mul(a2, 0x0b) ^ gf_mul(a3, 0x0d);
            col[2] = gf_mul(a0, 0x0d) ^ gf_mul(a1, 0x09) ^ gf_mul(a2, 0x0e) ^ gf_mul(a3, 0x0b);
            col[3] = gf_mul(a0, 0x0b) ^ gf_mul(a1, 0x0d) ^ gf_mul(a2, 0x09) ^ gf_mul(a3, 0x0e);
        }
    }

    pub fn add_round_key(&mut self, round_key: &State) {
        for (col, key_col) in self.cols.iter_mut().zip(round_key.cols.iter()) {
            for (byte, key_byte) in col.iter_mut().zip(key_col) {
                *byte ^= key_byte;
            }
        }
    }
}

/// Multiply by x in GF(2^8) modulo 0x11B
#[inline]
pub fn xtime(a: u8) -> u8 {
    let reduce = if a & 0x80 != 0 { 0x1b } else { 0x00 };
    (a << 1) ^ reduce
}

/// Multiply two elements of GF(2^8) modulo 0x11B
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
