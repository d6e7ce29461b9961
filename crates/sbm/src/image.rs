/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The in-memory SBM image
//!
//! An image is built once, either from caller supplied pixels or by the
//! decoder, and is read only afterwards.

use nanorand::{Rng, WyRand};
use sbm_core::bits::{bits_to_bytes, bytes_needed, bytes_to_bits, Bit};
use sbm_core::bytestream::{ByteReaderTrait, ByteWriterTrait};
use sbm_core::log::trace;

use crate::constants::SBM_FORMAT_VERSION_1;
use crate::decoder::SbmDecoder;
use crate::encoder::SbmEncoder;
use crate::errors::{SbmErrors, SbmField};
use crate::random::split_value;

/// Redundancy values of one size header
///
/// The top pair is written before the pixel array and the bottom
/// pair after it, each pair adds up to the header's fixed value.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct HeaderField {
    pub(crate) top_left:     usize,
    pub(crate) top_right:    usize,
    pub(crate) bottom_left:  usize,
    pub(crate) bottom_right: usize
}

impl HeaderField {
    fn random<R: Rng<8>>(fixed: usize, rng: &mut R) -> HeaderField {
        let (top_left, top_right) = split_value(fixed, rng);
        let (bottom_left, bottom_right) = split_value(fixed, rng);

        HeaderField {
            top_left,
            top_right,
            bottom_left,
            bottom_right
        }
    }
    pub const fn top_left(&self) -> usize {
        self.top_left
    }
    pub const fn top_right(&self) -> usize {
        self.top_right
    }
    pub const fn bottom_left(&self) -> usize {
        self.bottom_left
    }
    pub const fn bottom_right(&self) -> usize {
        self.bottom_right
    }
}

/// Redundancy values for the width, height and area headers
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct SbmHeader {
    pub(crate) width:  HeaderField,
    pub(crate) height: HeaderField,
    pub(crate) area:   HeaderField
}

impl SbmHeader {
    pub const fn width(&self) -> &HeaderField {
        &self.width
    }
    pub const fn height(&self) -> &HeaderField {
        &self.height
    }
    pub const fn area(&self) -> &HeaderField {
        &self.area
    }
    pub const fn field(&self, field: SbmField) -> &HeaderField {
        match field {
            SbmField::Width => &self.width,
            SbmField::Height => &self.height,
            SbmField::Area => &self.area
        }
    }
}

/// Pixels, packed and unpacked
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub(crate) struct PixelData {
    pub(crate) bytes: Vec<u8>,
    pub(crate) bits:  Vec<Bit>
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub(crate) struct PixelMetadata {
    pub(crate) width:  usize,
    pub(crate) height: usize,
    pub(crate) area:   usize,
    pub(crate) header: SbmHeader
}

#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub(crate) struct PixelArray {
    pub(crate) data:     PixelData,
    pub(crate) metadata: PixelMetadata
}

/// A two level (black and white) raster image
///
/// Pixels are stored row by row starting with the top row, a `0` bit
/// is black and a `1` bit is white.
///
/// Both the bit sequence and its packed bytes are kept, see
/// [`sbm_core::bits`] for the packing order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SbmImage {
    pub(crate) format_version: u8,
    pub(crate) pixel_array:    PixelArray
}

impl SbmImage {
    /// Create an image from a list of pixels
    ///
    /// # Arguments
    /// - `bits`: All pixels of the image, row by row
    /// - `width`: Pixels in a row
    /// - `height`: Number of rows
    ///
    /// # Errors
    /// - [`SbmErrors::InvalidDimensions`] if width or height is zero or if
    ///   `bits` doesn't hold exactly `width*height` pixels
    ///
    /// # Example
    /// ```
    /// use sbm::SbmImage;
    /// use sbm::sbm_core::bits::Bit;
    /// let image = SbmImage::from_bits(vec![Bit::One; 12], 3, 4).unwrap();
    /// assert_eq!(image.bytes(), &[0xFF, 0x0F]);
    /// ```
    pub fn from_bits(bits: Vec<Bit>, width: usize, height: usize) -> Result<SbmImage, SbmErrors> {
        Self::from_bits_with_rng(bits, width, height, &mut WyRand::new())
    }

    /// Same as [`from_bits`](Self::from_bits) but draws the header
    /// redundancy values from `rng`
    pub fn from_bits_with_rng<R: Rng<8>>(
        bits: Vec<Bit>, width: usize, height: usize, rng: &mut R
    ) -> Result<SbmImage, SbmErrors> {
        let area = checked_area(width, height)?;

        if bits.len() != area {
            return Err(SbmErrors::InvalidDimensions(
                "bit array length is not width*height"
            ));
        }
        let bytes = bits_to_bytes(&bits);

        Ok(Self::new_unchecked(bits, bytes, width, height, area, rng))
    }

    /// Create an image from packed pixels
    ///
    /// `bytes` must be exactly as long as needed to hold `width*height`
    /// bits, only the last byte may be partially used. Its unused
    /// positions are the high order ones and are cleared, so
    /// [`bytes`](Self::bytes) may differ from the input in those bits.
    ///
    /// # Errors
    /// - [`SbmErrors::InvalidDimensions`] if width or height is zero or if
    ///   `bytes` is too short or too long
    pub fn from_bytes(bytes: Vec<u8>, width: usize, height: usize) -> Result<SbmImage, SbmErrors> {
        Self::from_bytes_with_rng(bytes, width, height, &mut WyRand::new())
    }

    /// Same as [`from_bytes`](Self::from_bytes) but draws the header
    /// redundancy values from `rng`
    pub fn from_bytes_with_rng<R: Rng<8>>(
        bytes: Vec<u8>, width: usize, height: usize, rng: &mut R
    ) -> Result<SbmImage, SbmErrors> {
        let area = checked_area(width, height)?;
        let expected = bytes_needed(area);

        if bytes.len() < expected {
            return Err(SbmErrors::InvalidDimensions(
                "byte array is too small for width*height"
            ));
        }
        if bytes.len() > expected {
            return Err(SbmErrors::InvalidDimensions(
                "byte array is too large for width*height"
            ));
        }
        let mut bits = bytes_to_bits(&bytes);
        bits.truncate(area);
        let bytes = bits_to_bytes(&bits);

        Ok(Self::new_unchecked(bits, bytes, width, height, area, rng))
    }

    /// Assemble an image from already validated parts and
    /// fill the header redundancy values
    fn new_unchecked<R: Rng<8>>(
        bits: Vec<Bit>, bytes: Vec<u8>, width: usize, height: usize, area: usize, rng: &mut R
    ) -> SbmImage {
        trace!("Width: {}", width);
        trace!("Height: {}", height);

        let header = SbmHeader {
            width:  HeaderField::random(width, rng),
            height: HeaderField::random(height, rng),
            area:   HeaderField::random(area, rng)
        };

        SbmImage {
            format_version: SBM_FORMAT_VERSION_1,
            pixel_array:    PixelArray {
                data:     PixelData { bytes, bits },
                metadata: PixelMetadata {
                    width,
                    height,
                    area,
                    header
                }
            }
        }
    }

    /// Decode an image from `source`
    ///
    /// Shorthand for [`SbmDecoder::decode`] with default options
    pub fn read_from<T: ByteReaderTrait>(source: T) -> Result<SbmImage, SbmErrors> {
        SbmDecoder::new(source).decode()
    }

    /// Encode this image into `sink` returning the number of bytes written
    ///
    /// Shorthand for [`SbmEncoder::encode`]
    pub fn write_to<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, SbmErrors> {
        SbmEncoder::new(self).encode(sink)
    }

    pub const fn format_version(&self) -> u8 {
        self.format_version
    }
    /// Pixels packed eight to a byte
    pub fn bytes(&self) -> &[u8] {
        &self.pixel_array.data.bytes
    }
    /// Pixels one per entry, row by row
    pub fn bits(&self) -> &[Bit] {
        &self.pixel_array.data.bits
    }
    pub const fn width(&self) -> usize {
        self.pixel_array.metadata.width
    }
    pub const fn height(&self) -> usize {
        self.pixel_array.metadata.height
    }
    pub const fn area(&self) -> usize {
        self.pixel_array.metadata.area
    }
    /// Image dimensions as a tuple of width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
    /// Redundancy values written next to the size headers
    pub const fn header(&self) -> &SbmHeader {
        &self.pixel_array.metadata.header
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, SbmErrors> {
    if width == 0 {
        return Err(SbmErrors::InvalidDimensions("width is zero"));
    }
    if height == 0 {
        return Err(SbmErrors::InvalidDimensions("height is zero"));
    }
    width
        .checked_mul(height)
        .ok_or(SbmErrors::InvalidDimensions("width*height overflows"))
}
