/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sbm_core::bits::{bits_to_bytes, bytes_needed, bytes_to_bits};
use sbm_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait};
use sbm_core::log::trace;
use sbm_core::options::DecoderOptions;

use crate::constants::{CRLF, SBM_FORMAT_VERSION_1};
use crate::errors::{SbmErrors, SbmField};
use crate::headers::{parse_format_header, parse_size_header, parse_version_header, SizeHeader};
use crate::image::{HeaderField, PixelArray, PixelData, PixelMetadata, SbmHeader, SbmImage};

/// An SBM decoder
///
/// Decoding happens in three steps, the top headers, the pixel payload
/// and the bottom headers. The first one can be run on its own with
/// [`decode_headers`](Self::decode_headers) to learn the dimensions
/// before committing to the payload.
///
/// A decoder reads its stream once. After [`decode`](Self::decode)
/// returns, or after any error, further calls fail.
///
/// # Example
/// ```
/// use sbm::SbmDecoder;
/// let data = b"SBM (SIMPLE BIT MAP)\r\nVERSION 1\r\n\
/// WIDTH 3 (1 + 2)\r\nHEIGHT 4 (4 + 0)\r\nAREA 12 (6 + 6)\r\n\
/// \xFF\x0F\r\n\
/// WIDTH 3 (0 + 3)\r\nHEIGHT 4 (2 + 2)\r\nAREA 12 (12 + 0)\r\n";
///
/// let mut decoder = SbmDecoder::new(&data[..]);
/// let image = decoder.decode().unwrap();
/// assert_eq!(image.dimensions(), (3, 4));
/// assert_eq!(image.bytes(), &[0xFF, 0x0F]);
/// ```
pub struct SbmDecoder<T: ByteReaderTrait> {
    stream:          ByteReader<T>,
    options:         DecoderOptions,
    version:         u8,
    metadata:        PixelMetadata,
    decoded_headers: bool,
    finished:        bool
}

impl<T> SbmDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new decoder with default options
    pub fn new(data: T) -> SbmDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder with the specified options
    pub fn new_with_options(data: T, options: DecoderOptions) -> SbmDecoder<T> {
        SbmDecoder {
            stream: ByteReader::new(data),
            options,
            version: 0,
            metadata: PixelMetadata::default(),
            decoded_headers: false,
            finished: false
        }
    }

    /// Decode the banner, the version and the top size headers
    ///
    /// Calling this more than once is allowed, later calls return
    /// immediately.
    ///
    /// # Errors
    /// Anything wrong in the first five lines, including dimensions
    /// beyond the limits in [`DecoderOptions`]
    pub fn decode_headers(&mut self) -> Result<(), SbmErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        self.ensure_not_finished()?;

        if let Err(e) = self.read_top_headers() {
            self.finished = true;
            return Err(e);
        }
        self.decoded_headers = true;
        Ok(())
    }

    /// Width and height from the top headers
    ///
    /// Returns `None` if the top headers haven't been decoded. Remains
    /// available when a later decoding step fails.
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.metadata.width, self.metadata.height));
        }
        None
    }

    /// Area from the top headers, see [`dimensions`](Self::dimensions)
    pub const fn area(&self) -> Option<usize> {
        if self.decoded_headers {
            return Some(self.metadata.area);
        }
        None
    }

    /// Format version from the top headers
    pub const fn version(&self) -> Option<u8> {
        if self.decoded_headers {
            return Some(self.version);
        }
        None
    }

    /// Decode a whole image
    ///
    /// Bytes after the last bottom header are not read.
    pub fn decode(&mut self) -> Result<SbmImage, SbmErrors> {
        self.decode_headers()?;
        self.ensure_not_finished()?;
        self.finished = true;

        let data = self.read_pixel_data()?;
        self.read_bottom_headers()?;

        trace!("Finished decoding at offset {}", self.stream.position());

        Ok(SbmImage {
            format_version: self.version,
            pixel_array:    PixelArray {
                data,
                metadata: self.metadata
            }
        })
    }

    fn ensure_not_finished(&self) -> Result<(), SbmErrors> {
        if self.finished {
            return Err(SbmErrors::IoErrors(ByteIoError::Generic(
                "decoder has already consumed its input"
            )));
        }
        Ok(())
    }

    fn read_header_line(&mut self) -> Result<Vec<u8>, SbmErrors> {
        Ok(self.stream.read_line_crlf(self.options.max_header_size())?)
    }

    fn read_size_header(&mut self, field: SbmField) -> Result<SizeHeader, SbmErrors> {
        let line = self.read_header_line()?;
        parse_size_header(&line, field.header_name())
    }

    fn read_top_headers(&mut self) -> Result<(), SbmErrors> {
        parse_format_header(&self.read_header_line()?)?;

        let version = parse_version_header(&self.read_header_line()?)?.version;

        if version != SBM_FORMAT_VERSION_1 {
            return Err(SbmErrors::UnsupportedVersion(version));
        }
        trace!("Version: {}", version);

        let width = self.read_size_header(SbmField::Width)?;

        if width.fixed > self.options.max_width() {
            return Err(SbmErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width.fixed
            ));
        }
        let height = self.read_size_header(SbmField::Height)?;

        if height.fixed > self.options.max_height() {
            return Err(SbmErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height.fixed
            ));
        }
        let area = self.read_size_header(SbmField::Area)?;

        if width.fixed.checked_mul(height.fixed) != Some(area.fixed) {
            return Err(SbmErrors::AreaMismatch {
                width:  width.fixed,
                height: height.fixed,
                area:   area.fixed
            });
        }
        trace!("Width: {}", width.fixed);
        trace!("Height: {}", height.fixed);
        trace!("Area: {}", area.fixed);

        self.version = version;
        self.metadata = PixelMetadata {
            width:  width.fixed,
            height: height.fixed,
            area:   area.fixed,
            header: SbmHeader {
                width:  top_field(&width),
                height: top_field(&height),
                area:   top_field(&area)
            }
        };
        Ok(())
    }

    fn read_pixel_data(&mut self) -> Result<PixelData, SbmErrors> {
        let area = self.metadata.area;
        let size = bytes_needed(area);

        trace!("Reading {} bytes of pixel data", size);

        let raw = self.stream.read_exact_vec(size)?;
        let separator = self.stream.read_fixed_bytes_or_error::<2>()?;

        if &separator != CRLF {
            return Err(SbmErrors::BadSeparator(separator));
        }
        // padding bits in the last byte are dropped and
        // the stored bytes re-packed from what remains
        let mut bits = bytes_to_bits(&raw);
        bits.truncate(area);
        let bytes = bits_to_bytes(&bits);

        Ok(PixelData { bytes, bits })
    }

    fn read_bottom_headers(&mut self) -> Result<(), SbmErrors> {
        let width = self.read_size_header(SbmField::Width)?;
        check_bottom(SbmField::Width, self.metadata.width, width.fixed)?;

        let height = self.read_size_header(SbmField::Height)?;
        check_bottom(SbmField::Height, self.metadata.height, height.fixed)?;

        let area = self.read_size_header(SbmField::Area)?;
        check_bottom(SbmField::Area, self.metadata.area, area.fixed)?;

        if width.fixed.checked_mul(height.fixed) != Some(area.fixed) {
            return Err(SbmErrors::AreaMismatch {
                width:  width.fixed,
                height: height.fixed,
                area:   area.fixed
            });
        }

        let header = &mut self.metadata.header;
        set_bottom(&mut header.width, &width);
        set_bottom(&mut header.height, &height);
        set_bottom(&mut header.area, &area);

        Ok(())
    }
}

const fn top_field(header: &SizeHeader) -> HeaderField {
    HeaderField {
        top_left:     header.left,
        top_right:    header.right,
        bottom_left:  0,
        bottom_right: 0
    }
}

fn set_bottom(field: &mut HeaderField, header: &SizeHeader) {
    field.bottom_left = header.left;
    field.bottom_right = header.right;
}

fn check_bottom(field: SbmField, top: usize, bottom: usize) -> Result<(), SbmErrors> {
    if top != bottom {
        return Err(SbmErrors::BottomHeaderMismatch { field, top, bottom });
    }
    Ok(())
}
