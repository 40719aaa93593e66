// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: page data files, the project feed, thumbnails and mail delivery.

pub mod email;
pub mod feed;
pub mod media;
pub mod serialization;
