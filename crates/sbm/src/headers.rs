/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Textual header lines
//!
//! Two shapes exist, both terminated by CR LF
//!
//! ```text
//! VERSION <n>
//! <NAME> <fixed> (<left> + <right>)
//! ```
//! Tokens are separated by exactly one space.

use alloc::borrow::Cow;
use core::str::FromStr;

use crate::constants::{
    CRLF, FORMAT_BANNER, HEADER_BRACKET_LEFT, HEADER_BRACKET_RIGHT, HEADER_PLUS,
    HEADER_SEPARATOR, HEADER_VERSION
};
use crate::errors::SbmErrors;

const VERSION_HEADER_PARTS: usize = 2;
const SIZE_HEADER_PARTS: usize = 5;

/// Contents of a `VERSION` line
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct VersionHeader {
    pub version: u8
}

/// Contents of a size line, `left + right` is always `fixed`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SizeHeader {
    pub fixed: usize,
    pub left:  usize,
    pub right: usize
}

/// Strip the trailing CR LF from a raw header line
pub fn remove_crlf(raw_header: &[u8]) -> Result<&[u8], SbmErrors> {
    if raw_header.len() < CRLF.len() {
        return Err(SbmErrors::HeaderTooShort(raw_header.len()));
    }
    raw_header
        .strip_suffix(CRLF)
        .ok_or(SbmErrors::BadHeaderEnding)
}

/// Check the format banner, it must match byte for byte
pub fn parse_format_header(raw_header: &[u8]) -> Result<(), SbmErrors> {
    if raw_header != FORMAT_BANNER {
        return Err(SbmErrors::WrongFormatBanner);
    }
    Ok(())
}

/// Parse a `VERSION <n>` line
///
/// This only checks syntax, whether the version is supported is
/// up to the caller.
pub fn parse_version_header(raw_header: &[u8]) -> Result<VersionHeader, SbmErrors> {
    let text = header_text(raw_header)?;
    let parts: Vec<&str> = text.split(HEADER_SEPARATOR).collect();

    if parts.len() != VERSION_HEADER_PARTS {
        return Err(SbmErrors::HeaderSyntax("version header needs 2 parts"));
    }
    check_name(parts[0], HEADER_VERSION)?;

    let version = parse_unsigned::<u64>(parts[1])?;
    let version = u8::try_from(version).map_err(|_| SbmErrors::VersionOverflow(version))?;

    Ok(VersionHeader { version })
}

/// Parse a `<NAME> <fixed> (<left> + <right>)` line
///
/// # Arguments
/// - `raw_header`: The line, terminator included
/// - `name`: Header name expected in the first token
///
/// # Errors
/// Besides syntax errors, fails with [`SbmErrors::Integrity`] when
/// `left + right` is not `fixed`
///
/// # Example
/// ```
/// use sbm::headers::parse_size_header;
/// let header = parse_size_header(b"SIZE 123 (100 + 23)\r\n", "SIZE").unwrap();
/// assert_eq!((header.fixed, header.left, header.right), (123, 100, 23));
/// ```
pub fn parse_size_header(raw_header: &[u8], name: &'static str) -> Result<SizeHeader, SbmErrors> {
    let text = header_text(raw_header)?;
    let parts: Vec<&str> = text.split(HEADER_SEPARATOR).collect();

    if parts.len() != SIZE_HEADER_PARTS {
        return Err(SbmErrors::HeaderSyntax("size header needs 5 parts"));
    }
    check_name(parts[0], name)?;

    let fixed = parse_unsigned::<usize>(parts[1])?;

    let left = parts[2]
        .strip_prefix(HEADER_BRACKET_LEFT)
        .ok_or(SbmErrors::HeaderSyntax("missing left bracket"))?;
    let left = parse_unsigned::<usize>(left)?;

    if parts[3] != HEADER_PLUS {
        return Err(SbmErrors::HeaderSyntax("missing plus sign"));
    }

    let right = parts[4]
        .strip_suffix(HEADER_BRACKET_RIGHT)
        .ok_or(SbmErrors::HeaderSyntax("missing right bracket"))?;
    let right = parse_unsigned::<usize>(right)?;

    if left.checked_add(right) != Some(fixed) {
        return Err(SbmErrors::Integrity {
            name,
            fixed,
            left,
            right
        });
    }

    Ok(SizeHeader { fixed, left, right })
}

/// Format a `VERSION <n>` line
pub fn format_version_header(version: u8) -> String {
    format!("{HEADER_VERSION} {version}\r\n")
}

/// Format a `<NAME> <fixed> (<left> + <right>)` line
///
/// The caller is responsible for `left + right == fixed`
pub fn format_size_header(name: &str, fixed: usize, left: usize, right: usize) -> String {
    format!("{name} {fixed} ({left} + {right})\r\n")
}

fn header_text(raw_header: &[u8]) -> Result<Cow<'_, str>, SbmErrors> {
    let trimmed = remove_crlf(raw_header)?;
    // invalid utf-8 can never form a valid token, so a lossy view
    // makes such lines fail on the name or a number
    Ok(String::from_utf8_lossy(trimmed))
}

fn check_name(found: &str, expected: &'static str) -> Result<(), SbmErrors> {
    if found != expected {
        return Err(SbmErrors::UnexpectedHeader {
            expected,
            found: found.to_string()
        });
    }
    Ok(())
}

/// Parse an unsigned decimal, only digits are allowed
fn parse_unsigned<T>(token: &str) -> Result<T, SbmErrors>
where
    T: FromStr<Err = core::num::ParseIntError>
{
    // `str::parse` would accept a leading `+`
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SbmErrors::InvalidNumber(token.to_string()));
    }
    Ok(token.parse::<T>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_header() {
        let header = parse_size_header(b"SIZE 123 (100 + 23)\r\n", "SIZE").unwrap();
        assert_eq!(
            header,
            SizeHeader {
                fixed: 123,
                left:  100,
                right: 23
            }
        );
    }

    #[test]
    fn size_header_integrity() {
        let err = parse_size_header(b"SIZE 123 (100 + 24)\r\n", "SIZE").unwrap_err();
        assert!(matches!(
            err,
            SbmErrors::Integrity {
                name: "SIZE",
                fixed: 123,
                left: 100,
                right: 24
            }
        ));
    }

    #[test]
    fn size_header_overflowing_sum_is_an_integrity_failure() {
        let line = format!("AREA 1 ({} + 2)\r\n", usize::MAX);
        let err = parse_size_header(line.as_bytes(), "AREA").unwrap_err();
        assert!(matches!(err, SbmErrors::Integrity { .. }));
    }

    #[test]
    fn size_header_zero_split() {
        let header = parse_size_header(b"WIDTH 3 (0 + 3)\r\n", "WIDTH").unwrap();
        assert_eq!((header.left, header.right), (0, 3));
    }

    #[test]
    fn size_header_syntax() {
        let cases: [&[u8]; 7] = [
            b"SIZE 123 (100 + 23) X\r\n",
            b"SIZE 123 (100 +23)\r\n",
            b"SIZE  123 (100 + 23)\r\n",
            b"SIZE 123 100 + 23)\r\n",
            b"SIZE 123 (100 - 23)\r\n",
            b"SIZE 123 (100 + 23\r\n",
            b"\r\n"
        ];
        for case in cases {
            let err = parse_size_header(case, "SIZE").unwrap_err();
            assert!(
                matches!(err, SbmErrors::HeaderSyntax(_)),
                "{:?} gave {:?}",
                String::from_utf8_lossy(case),
                err
            );
        }
    }

    #[test]
    fn size_header_name() {
        let err = parse_size_header(b"WIDTH 3 (1 + 2)\r\n", "HEIGHT").unwrap_err();
        match err {
            SbmErrors::UnexpectedHeader { expected, found } => {
                assert_eq!(expected, "HEIGHT");
                assert_eq!(found, "WIDTH");
            }
            _ => panic!("expected an unexpected header error")
        }
    }

    #[test]
    fn size_header_numbers() {
        assert!(matches!(
            parse_size_header(b"SIZE 12a (1 + 2)\r\n", "SIZE"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_size_header(b"SIZE +3 (1 + 2)\r\n", "SIZE"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_size_header(b"SIZE 3 (-1 + 4)\r\n", "SIZE"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_size_header(b"SIZE 3 ( + 3)\r\n", "SIZE"),
            Err(SbmErrors::ParseError(_))
        ));
        assert!(matches!(
            parse_size_header(b"SIZE 3 (() + 3)\r\n", "SIZE"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_size_header(b"SIZE 3 (3 + ))\r\n", "SIZE"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        let huge = b"SIZE 99999999999999999999999 (1 + 2)\r\n";
        assert!(matches!(
            parse_size_header(huge, "SIZE"),
            Err(SbmErrors::ParseError(_))
        ));
    }

    #[test]
    fn header_endings() {
        assert!(matches!(
            remove_crlf(b"\n"),
            Err(SbmErrors::HeaderTooShort(1))
        ));
        assert!(matches!(
            remove_crlf(b""),
            Err(SbmErrors::HeaderTooShort(0))
        ));
        assert!(matches!(
            remove_crlf(b"VERSION 1\n\r"),
            Err(SbmErrors::BadHeaderEnding)
        ));
        assert!(matches!(
            remove_crlf(b"VERSION 1\n"),
            Err(SbmErrors::BadHeaderEnding)
        ));
        assert_eq!(remove_crlf(b"\r\n").unwrap(), b"");
        assert_eq!(remove_crlf(b"AB\r\n").unwrap(), b"AB");
    }

    #[test]
    fn version_header() {
        assert_eq!(
            parse_version_header(b"VERSION 1\r\n").unwrap(),
            VersionHeader { version: 1 }
        );
        assert_eq!(parse_version_header(b"VERSION 255\r\n").unwrap().version, 255);
        assert!(matches!(
            parse_version_header(b"VERSION 256\r\n"),
            Err(SbmErrors::VersionOverflow(256))
        ));
        assert!(matches!(
            parse_version_header(b"VERSION 1 2\r\n"),
            Err(SbmErrors::HeaderSyntax(_))
        ));
        assert!(matches!(
            parse_version_header(b"VERSIONS 1\r\n"),
            Err(SbmErrors::UnexpectedHeader { .. })
        ));
        assert!(matches!(
            parse_version_header(b"VERSION x\r\n"),
            Err(SbmErrors::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_version_header(b"VERSION 1"),
            Err(SbmErrors::BadHeaderEnding)
        ));
    }

    #[test]
    fn format_header() {
        assert!(parse_format_header(b"SBM (SIMPLE BIT MAP)\r\n").is_ok());
        assert!(matches!(
            parse_format_header(b"SBM (SIMPLE BIT MAP)\n"),
            Err(SbmErrors::WrongFormatBanner)
        ));
        assert!(matches!(
            parse_format_header(b"sbm (simple bit map)\r\n"),
            Err(SbmErrors::WrongFormatBanner)
        ));
    }

    #[test]
    fn formatted_lines_parse_back() {
        let line = format_size_header("HEIGHT", 456, 450, 6);
        assert_eq!(line, "HEIGHT 456 (450 + 6)\r\n");
        assert_eq!(
            parse_size_header(line.as_bytes(), "HEIGHT").unwrap(),
            SizeHeader {
                fixed: 456,
                left:  450,
                right: 6
            }
        );
        assert_eq!(format_version_header(1), "VERSION 1\r\n");
    }
}
