/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, Cursor, Read};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteReaderTrait;

impl ByteReaderTrait for &[u8] {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        if buf.len() > self.len() {
            // leave the slice untouched on error
            return Err(ByteIoError::NotEnoughBytes(buf.len(), self.len()));
        }
        let (head, tail) = self.split_at(buf.len());
        buf.copy_from_slice(head);
        *self = tail;
        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let amount = buf.len().min(self.len());
        let (head, tail) = self.split_at(amount);
        buf[..amount].copy_from_slice(head);
        *self = tail;
        Ok(amount)
    }

    fn name(&self) -> &'static str {
        "&[u8]"
    }
}

impl<T> ByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: Read> ByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}
