/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple bit map (SBM) decoder and encoder
//!
//! SBM stores a black and white raster as a short textual header, the
//! pixels packed eight to a byte and a copy of the size headers at the end.
//!
//! ```text
//! SBM (SIMPLE BIT MAP)
//! VERSION 1
//! WIDTH 3 (1 + 2)
//! HEIGHT 4 (4 + 0)
//! AREA 12 (6 + 6)
//! <2 bytes of pixels>
//! WIDTH 3 (0 + 3)
//! HEIGHT 4 (2 + 2)
//! AREA 12 (12 + 0)
//! ```
//! Every line ends with CR LF. The two numbers in brackets add up to the
//! value in front of them and are chosen at random when encoding.
//!
//! # Example
//! ```
//! use sbm::sbm_core::bits::Bit;
//! use sbm::SbmImage;
//!
//! let image = SbmImage::from_bits(vec![Bit::One, Bit::Zero, Bit::Zero, Bit::One], 2, 2).unwrap();
//!
//! let mut out = vec![];
//! image.write_to(&mut out).unwrap();
//!
//! let decoded = SbmImage::read_from(out.as_slice()).unwrap();
//! assert_eq!(decoded.bits(), image.bits());
//! assert_eq!(decoded.dimensions(), (2, 2));
//! ```
//!
//! # Features
//! - `log`: Trace decoding and encoding through the `log` crate
//! - `serde`: Serialize image metadata
#![forbid(unsafe_code)]

extern crate alloc;

pub use sbm_core;

pub use crate::decoder::SbmDecoder;
pub use crate::encoder::SbmEncoder;
pub use crate::errors::{SbmErrors, SbmField};
pub use crate::image::{HeaderField, SbmHeader, SbmImage};
pub use crate::random::split_value;

pub mod constants;
mod decoder;
mod encoder;
mod errors;
pub mod headers;
mod image;
mod random;
mod serde;
