// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Outbound link construction.

/// A `mailto:` link with a pre-filled subject and body.
pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// A bare `mailto:` link.
pub fn mailto_plain(address: &str) -> String {
    format!("mailto:{}", address)
}
