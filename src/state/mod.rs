// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stateful page behavior, independent of rendering.

pub mod contact;
pub mod feed;
pub mod nav;
pub mod scheduler;
pub mod theme;
pub mod typing;
