/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the SBM decoder and encoder
//!
//! It currently contains
//!
//! - A bytestream reader that understands CR LF terminated lines and
//!   fixed-size raw reads, and a byte counting writer
//! - Conversions between packed bytes and single bits
//! - Decoder options
//! - Logging macros that forward to the `log` crate when enabled
//!
//! # Features
//!  - `log`: Routes the [`log`] module macros to the `log` crate. Without it
//!     every log statement compiles to nothing.
#![forbid(unsafe_code)]
#![macro_use]

pub mod bits;
pub mod bytestream;
pub mod log;
pub mod options;
