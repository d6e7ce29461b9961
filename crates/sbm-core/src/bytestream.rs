/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader reads either whole CR LF terminated lines or an exact
//! number of raw bytes, which is all a mixed text and binary format needs.
//! The writer counts the bytes it has pushed to its sink.
pub use reader::*;
pub use traits::*;
pub use writer::*;

mod reader;
mod traits;
mod writer;
