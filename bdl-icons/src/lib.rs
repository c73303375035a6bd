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

//! bdl-icons library root.
//!
//! Accessible SVG icons for Yew. Every icon is a function component over
//! [`SvgProps`] that merges its own fixed defaults under whatever the caller
//! passes and renders through [`AccessibleSvg`].
//!
//! The gallery binary lives in `main.rs`; integration tests under `tests/`
//! mount these components in a browser.

pub mod components;
pub mod constants;
pub mod icon;

pub use components::{AccessibleSvg, SvgAttrs, SvgProps};
pub use icon::fill::FileVector16;
