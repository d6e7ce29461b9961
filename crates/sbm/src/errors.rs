/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use core::num::ParseIntError;

use sbm_core::bytestream::ByteIoError;

use crate::constants::{HEADER_AREA, HEADER_HEIGHT, HEADER_WIDTH};

/// One of the three size headers
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SbmField {
    Width,
    Height,
    Area
}

impl SbmField {
    /// The header name as it appears on the wire
    pub const fn header_name(self) -> &'static str {
        match self {
            SbmField::Width => HEADER_WIDTH,
            SbmField::Height => HEADER_HEIGHT,
            SbmField::Area => HEADER_AREA
        }
    }
}

impl Display for SbmField {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.header_name())
    }
}

/// Errors possible when constructing, decoding or encoding an SBM image
pub enum SbmErrors {
    /// Width or height is zero, or the pixel array does not hold
    /// exactly `width*height` pixels
    InvalidDimensions(&'static str),
    /// The stream does not start with `SBM (SIMPLE BIT MAP)`
    WrongFormatBanner,
    /// The version header carries a version we do not understand
    UnsupportedVersion(u8),
    /// A header line is too short to even hold its terminator
    HeaderTooShort(usize),
    /// A header line does not end with CR LF
    BadHeaderEnding,
    /// Wrong token count, missing bracket or missing plus sign
    HeaderSyntax(&'static str),
    /// The header name is not the one expected at this position
    UnexpectedHeader {
        expected: &'static str,
        found:    String
    },
    /// The version numeral does not fit in a byte
    VersionOverflow(u64),
    /// The split values of a size header do not add up to its fixed value
    Integrity {
        name:  &'static str,
        fixed: usize,
        left:  usize,
        right: usize
    },
    /// The area is not `width*height`
    AreaMismatch {
        width:  usize,
        height: usize,
        area:   usize
    },
    /// A bottom header disagrees with its top counterpart
    BottomHeaderMismatch {
        field:  SbmField,
        top:    usize,
        bottom: usize
    },
    /// The two bytes after the pixel payload are not CR LF
    BadSeparator([u8; 2]),
    /// Dimensions exceed the limits in the decoder options
    ///
    /// # Arguments
    /// - dimension name
    /// - configured limit
    /// - value found
    TooLargeDimensions(&'static str, usize, usize),
    /// A numeric token contains something other than decimal digits
    InvalidNumber(String),
    /// The decoder could not convert string to int
    ParseError(ParseIntError),
    IoErrors(ByteIoError)
}

impl Debug for SbmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SbmErrors::InvalidDimensions(reason) => {
                writeln!(f, "Array dimension error: {reason}")
            }
            SbmErrors::WrongFormatBanner => {
                writeln!(f, "Format is unrecognized, expected `SBM (SIMPLE BIT MAP)`")
            }
            SbmErrors::UnsupportedVersion(version) => {
                writeln!(f, "Unsupported format version {version}")
            }
            SbmErrors::HeaderTooShort(size) => {
                writeln!(f, "Header of {size} bytes is too short")
            }
            SbmErrors::BadHeaderEnding => {
                writeln!(f, "Header does not end with CR LF")
            }
            SbmErrors::HeaderSyntax(reason) => {
                writeln!(f, "Header syntax error: {reason}")
            }
            SbmErrors::UnexpectedHeader { expected, found } => {
                writeln!(f, "Unexpected header '{found}', expected '{expected}'")
            }
            SbmErrors::VersionOverflow(value) => {
                writeln!(f, "Version {value} overflows a byte")
            }
            SbmErrors::Integrity {
                name,
                fixed,
                left,
                right
            } => {
                writeln!(
                    f,
                    "Integrity failure in {name} header, {left} + {right} is not {fixed}"
                )
            }
            SbmErrors::AreaMismatch {
                width,
                height,
                area
            } => {
                writeln!(f, "Area mismatch, {width} x {height} is not {area}")
            }
            SbmErrors::BottomHeaderMismatch { field, top, bottom } => {
                writeln!(
                    f,
                    "Bottom {field} header mismatch, top has {top} but bottom has {bottom}"
                )
            }
            SbmErrors::BadSeparator(found) => {
                writeln!(f, "Bad separator after pixel array, expected CR LF but found {found:?}")
            }
            SbmErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            SbmErrors::InvalidNumber(token) => {
                writeln!(f, "'{token}' is not an unsigned decimal number")
            }
            SbmErrors::ParseError(err) => {
                writeln!(f, "Could not parse integer {:?}", err)
            }
            SbmErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for SbmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for SbmErrors {}

impl From<ParseIntError> for SbmErrors {
    fn from(value: ParseIntError) -> Self {
        SbmErrors::ParseError(value)
    }
}

impl From<ByteIoError> for SbmErrors {
    fn from(value: ByteIoError) -> Self {
        SbmErrors::IoErrors(value)
    }
}
