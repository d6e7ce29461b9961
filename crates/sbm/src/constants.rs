/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The line terminator, header lines and the payload separator all use it
pub const CRLF: &[u8; 2] = b"\r\n";

/// First line of every SBM stream, terminator included
pub const FORMAT_BANNER: &[u8] = b"SBM (SIMPLE BIT MAP)\r\n";

/// The only format revision in existence
pub const SBM_FORMAT_VERSION_1: u8 = 1;

/// Unofficial MIME type, not registered with IANA
pub const SBM_MIME_TYPE: &str = "image/x-portable-bitmap";

pub const HEADER_VERSION: &str = "VERSION";
pub const HEADER_WIDTH: &str = "WIDTH";
pub const HEADER_HEIGHT: &str = "HEIGHT";
pub const HEADER_AREA: &str = "AREA";

pub(crate) const HEADER_SEPARATOR: char = ' ';
pub(crate) const HEADER_BRACKET_LEFT: char = '(';
pub(crate) const HEADER_BRACKET_RIGHT: char = ')';
pub(crate) const HEADER_PLUS: &str = "+";
