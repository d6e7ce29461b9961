/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Redundancy pairs for the size headers
//!
//! Every size header carries its value twice: once as is and once split into
//! two addends. The split is random and proves nothing beyond the header text
//! being self consistent, a corrupt file can still carry a valid looking split.
//! We emit it because the format requires it.

use nanorand::Rng;

/// Split `sum` into `(left, right)` with `left` uniform in `[0, sum]`
/// and `right = sum - left`
pub fn split_value<R: Rng<8>>(sum: usize, rng: &mut R) -> (usize, usize) {
    if sum == 0 {
        return (0, 0);
    }
    let left = rng.generate_range(0..=sum);
    (left, sum - left)
}
