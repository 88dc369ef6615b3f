// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

/// "kasa" read as a little-endian u32
pub(crate) const MAGIC: u32 = 0x6173_616b;
pub(crate) const VERSION: u32 = 1;
