// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the portfolio page.

pub mod contact;
pub mod content;
pub mod project;
