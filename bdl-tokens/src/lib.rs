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

//! Design tokens shared by every bdl icon.
//!
//! Values are plain `&'static str` CSS colors so they can be dropped straight
//! into an attribute. They are read-only for the lifetime of the process.

pub const WHITE: &str = "#fff";
pub const BLACK: &str = "#000";

pub const BDL_GRAY: &str = "#222";
pub const BDL_GRAY_80: &str = "#4e4e4e";
pub const BDL_GRAY_65: &str = "#6f6f6f";
pub const BDL_GRAY_62: &str = "#767676";
/// Neutral gray used as the fill of the file-type glyphs.
pub const BDL_GRAY_50: &str = "#909090";
pub const BDL_GRAY_40: &str = "#a7a7a7";
pub const BDL_GRAY_30: &str = "#bcbcbc";
pub const BDL_GRAY_20: &str = "#d3d3d3";
pub const BDL_GRAY_10: &str = "#e8e8e8";
pub const BDL_GRAY_05: &str = "#f4f4f4";
pub const BDL_GRAY_02: &str = "#fbfbfb";

/// The gray ramp keyed by design-system name, darkest first.
pub const GRAYS: &[(&str, &str)] = &[
    ("bdlGray", BDL_GRAY),
    ("bdlGray80", BDL_GRAY_80),
    ("bdlGray65", BDL_GRAY_65),
    ("bdlGray62", BDL_GRAY_62),
    ("bdlGray50", BDL_GRAY_50),
    ("bdlGray40", BDL_GRAY_40),
    ("bdlGray30", BDL_GRAY_30),
    ("bdlGray20", BDL_GRAY_20),
    ("bdlGray10", BDL_GRAY_10),
    ("bdlGray05", BDL_GRAY_05),
    ("bdlGray02", BDL_GRAY_02),
];

const NAMED: &[(&str, &str)] = &[("white", WHITE), ("black", BLACK)];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown design token `{0}`")]
    Unknown(String),
}

/// Resolve a token by its design-system name, e.g. `"bdlGray50"`.
pub fn lookup(name: &str) -> Result<&'static str, TokenError> {
    GRAYS
        .iter()
        .chain(NAMED.iter())
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            log::debug!("design token lookup missed: {name}");
            TokenError::Unknown(name.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_glyph_gray_is_stable() {
        assert_eq!(BDL_GRAY_50, "#909090");
    }

    #[test]
    fn lookup_resolves_design_names() {
        assert_eq!(lookup("bdlGray50"), Ok(BDL_GRAY_50));
        assert_eq!(lookup("bdlGray"), Ok(BDL_GRAY));
        assert_eq!(lookup("white"), Ok(WHITE));
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = lookup("bdlGray51").unwrap_err();
        assert_eq!(err, TokenError::Unknown("bdlGray51".to_string()));
        assert_eq!(err.to_string(), "unknown design token `bdlGray51`");
    }

    #[test]
    fn gray_ramp_runs_dark_to_light() {
        let names: Vec<&str> = GRAYS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.first(), Some(&"bdlGray"));
        assert_eq!(names.last(), Some(&"bdlGray02"));
        assert_eq!(names.len(), 11);
    }
}
