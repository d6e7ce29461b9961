/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversions between packed bytes and single bits
//!
//! Bits are packed least significant bit first, i.e. the first bit of a sequence
//! is stored in bit `0` of the first byte and the ninth bit in bit `0` of the second
//! byte.
//!
//! When the number of bits is not a multiple of [`BITS_PER_BYTE`] the unused
//! high-order positions of the last byte are zero.

/// Number of bits stored in a single byte
pub const BITS_PER_BYTE: usize = 8;

/// A single bit
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Bit {
    #[default]
    Zero = 0,
    One = 1
}

impl Bit {
    /// Return true if this bit is [`Bit::One`]
    pub const fn is_set(self) -> bool {
        matches!(self, Bit::One)
    }
    pub const fn from_bool(value: bool) -> Bit {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

impl From<Bit> for u8 {
    fn from(value: Bit) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err("A bit can only be 0 or 1")
        }
    }
}

/// Number of bytes needed to hold `bits` bits
#[inline]
pub const fn bytes_needed(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_BYTE)
}

/// Pack bits into bytes
///
/// The output has [`bytes_needed(bits.len())`](bytes_needed) bytes, padding
/// positions in the last byte are zero.
pub fn bits_to_bytes(bits: &[Bit]) -> Vec<u8> {
    let mut bytes = vec![0_u8; bytes_needed(bits.len())];

    for (byte, chunk) in bytes.iter_mut().zip(bits.chunks(BITS_PER_BYTE)) {
        for (position, bit) in chunk.iter().enumerate() {
            *byte |= u8::from(*bit) << position;
        }
    }
    bytes
}

/// Unpack bytes into bits
///
/// The output always has `bytes.len() * 8` bits, callers that know the exact
/// number of meaningful bits should truncate it.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<Bit> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);

    for byte in bytes {
        for position in 0..BITS_PER_BYTE {
            bits.push(Bit::from_bool((byte >> position) & 1 == 1));
        }
    }
    bits
}
