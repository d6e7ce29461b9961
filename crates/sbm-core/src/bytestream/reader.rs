/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub(crate) mod std_readers;
use crate::bytestream::ByteReaderTrait;

/// Largest amount of bytes requested from the source in one go
/// when reading a big raw block.
///
/// A header can claim a huge payload, reading in chunks means a short
/// stream fails before we commit memory for the whole claim.
const CHUNK_SIZE: usize = 1 << 16;

pub enum ByteIoError {
    StdIoError(std::io::Error),
    // requested, read
    NotEnoughBytes(usize, usize),
    // requested, available
    NotEnoughBuffer(usize, usize),
    LineTooLong(usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ByteIoError::LineTooLong(limit) => {
                writeln!(f, "No CR LF line terminator within {limit} bytes")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A line and block oriented reader
///
/// Wraps a [`ByteReaderTrait`] source and keeps track of how many
/// bytes were consumed from it.
pub struct ByteReader<T: ByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }
    /// Number of bytes consumed so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let byte = self.inner.read_byte()?;
        self.position += 1;
        Ok(byte)
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_exact_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read exactly `size` raw bytes into a new vector
    ///
    /// # Errors
    /// - [`ByteIoError::NotEnoughBytes`] if the stream ends early, carrying
    ///   the requested size and the number of bytes actually available
    pub fn read_exact_vec(&mut self, size: usize) -> Result<Vec<u8>, ByteIoError> {
        let mut out = Vec::with_capacity(size.min(CHUNK_SIZE));

        while out.len() < size {
            let start = out.len();
            let wanted = (size - start).min(CHUNK_SIZE);

            out.resize(start + wanted, 0);
            let read = self.inner.read_bytes(&mut out[start..])?;
            out.truncate(start + read);
            self.position += read as u64;

            if read == 0 {
                return Err(ByteIoError::NotEnoughBytes(size, out.len()));
            }
        }
        Ok(out)
    }

    /// Read a line terminated by CR LF
    ///
    /// The returned line includes the terminator. A lone CR or LF does
    /// not end the line.
    ///
    /// # Arguments
    /// - `limit`: Maximum line length including the terminator.
    ///
    /// # Errors
    /// - The underlying stream error if the input ends before CR LF
    /// - [`ByteIoError::LineTooLong`] if no terminator shows up within `limit` bytes
    pub fn read_line_crlf(&mut self, limit: usize) -> Result<Vec<u8>, ByteIoError> {
        let mut line = Vec::new();

        loop {
            if line.len() >= limit {
                return Err(ByteIoError::LineTooLong(limit));
            }
            line.push(self.read_u8_err()?);

            if line.ends_with(b"\r\n") {
                return Ok(line);
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }
}
