/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::constants::SBM_MIME_TYPE;
use crate::image::SbmImage;

impl Serialize for SbmImage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 5;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;

        state.serialize_field("version", &self.format_version())?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("area", &self.area())?;
        state.serialize_field("mime_type", SBM_MIME_TYPE)?;

        state.end()
    }
}
