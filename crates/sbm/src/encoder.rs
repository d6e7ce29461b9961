/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sbm_core::bytestream::{ByteWriter, ByteWriterTrait};
use sbm_core::log::trace;

use crate::constants::{CRLF, FORMAT_BANNER};
use crate::errors::{SbmErrors, SbmField};
use crate::headers::{format_size_header, format_version_header};
use crate::image::SbmImage;

const SIZE_FIELDS: [SbmField; 3] = [SbmField::Width, SbmField::Height, SbmField::Area];

#[derive(Copy, Clone)]
enum Side {
    Top,
    Bottom
}

/// An SBM encoder
///
/// The output is the banner, the version and the top size headers,
/// then the packed pixels followed by CR LF and finally the bottom size
/// headers.
///
/// # Example
/// ```
/// use sbm::{SbmEncoder, SbmImage};
/// use sbm::sbm_core::bits::Bit;
///
/// let image = SbmImage::from_bits(vec![Bit::One; 12], 3, 4).unwrap();
/// let mut out = vec![];
///
/// let written = SbmEncoder::new(&image).encode(&mut out).unwrap();
/// assert_eq!(written, out.len());
/// assert!(out.starts_with(b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\nWIDTH 3 ("));
/// ```
pub struct SbmEncoder<'a> {
    image: &'a SbmImage
}

impl<'a> SbmEncoder<'a> {
    /// Create a new encoder for `image`
    pub fn new(image: &'a SbmImage) -> SbmEncoder<'a> {
        SbmEncoder { image }
    }

    /// Exact number of bytes [`encode`](Self::encode) will write
    pub fn expected_buffer_size(&self) -> usize {
        let headers: usize = self
            .size_headers(Side::Top)
            .iter()
            .chain(self.size_headers(Side::Bottom).iter())
            .map(String::len)
            .sum();

        FORMAT_BANNER.len()
            + format_version_header(self.image.format_version()).len()
            + headers
            + self.image.bytes().len()
            + CRLF.len()
    }

    /// Encode the image into `out`
    ///
    /// Returns the number of bytes written, the sink is flushed
    /// before returning.
    pub fn encode<T: ByteWriterTrait>(&self, out: T) -> Result<usize, SbmErrors> {
        let mut writer = ByteWriter::new(out);
        writer.reserve(self.expected_buffer_size())?;

        writer.write_all(FORMAT_BANNER)?;
        writer.write_all(format_version_header(self.image.format_version()).as_bytes())?;

        for line in self.size_headers(Side::Top) {
            writer.write_all(line.as_bytes())?;
        }

        writer.write_all(self.image.bytes())?;
        writer.write_all(CRLF)?;

        for line in self.size_headers(Side::Bottom) {
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;

        trace!("Wrote {} bytes", writer.bytes_written());

        Ok(writer.bytes_written())
    }

    fn size_headers(&self, side: Side) -> [String; 3] {
        let header = self.image.header();
        let fixed = [self.image.width(), self.image.height(), self.image.area()];

        core::array::from_fn(|i| {
            let field = header.field(SIZE_FIELDS[i]);
            let (left, right) = match side {
                Side::Top => (field.top_left(), field.top_right()),
                Side::Bottom => (field.bottom_left(), field.bottom_right())
            };
            format_size_header(SIZE_FIELDS[i].header_name(), fixed[i], left, right)
        })
    }
}
