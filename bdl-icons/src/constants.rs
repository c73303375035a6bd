/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Gallery configuration.
//!
//! Read at compile time, rebuild after changing `GALLERY_SIZES`,
//! `GALLERY_LOG_LEVEL` or `GALLERY_SHOW_TOKENS`.

use std::str::FromStr;

use once_cell::sync::Lazy;

pub const DEFAULT_SIZES: &[u32] = &[16, 24, 32];

pub static GALLERY_SIZES: Lazy<Vec<u32>> =
    Lazy::new(|| parse_sizes(std::option_env!("GALLERY_SIZES")));
pub static GALLERY_LOG_LEVEL: Lazy<log::Level> =
    Lazy::new(|| parse_level(std::option_env!("GALLERY_LOG_LEVEL")));
pub static GALLERY_SHOW_TOKENS: Lazy<bool> = Lazy::new(|| {
    std::option_env!("GALLERY_SHOW_TOKENS").map_or(true, |value| truthy(Some(value)))
});

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true", "1"].contains(&s.trim().to_lowercase().as_str())
    } else {
        false
    }
}

/// Comma separated pixel sizes. Entries that are not positive integers are
/// skipped; an empty result falls back to [`DEFAULT_SIZES`].
pub fn parse_sizes(s: Option<&str>) -> Vec<u32> {
    let Some(s) = s else {
        return DEFAULT_SIZES.to_vec();
    };
    let sizes: Vec<u32> = s
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<u32>() {
            Ok(size) if size > 0 => Some(size),
            _ => {
                log::warn!("ignoring gallery size {entry:?}");
                None
            }
        })
        .collect();
    if sizes.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        sizes
    }
}

pub fn parse_level(s: Option<&str>) -> log::Level {
    match s.map(log::Level::from_str) {
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            log::warn!("invalid GALLERY_LOG_LEVEL: {e}");
            log::Level::Info
        }
        None => log::Level::Info,
    }
}
