/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options

/// Decoder options
///
/// Limits the decoder respects before it allocates memory for an image
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16777216
    max_width:       usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16777216
    max_height:      usize,
    /// Maximum length of a single header line, terminator included
    ///
    /// - Default value: 256
    max_header_size: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:       1 << 24,
            max_height:      1 << 24,
            max_header_size: 256
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Get the longest header line the decoder accepts
    pub const fn max_header_size(&self) -> usize {
        self.max_header_size
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set the longest header line, in bytes and including the
    /// line terminator, that the decoder reads before giving up
    pub fn set_max_header_size(mut self, size: usize) -> Self {
        self.max_header_size = size;
        self
    }
}
