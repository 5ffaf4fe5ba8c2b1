// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - Image carousel with thumbnails and favourite hearts
//! - [`info_panel`] - Breed details listed next to the carousel
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod info_panel;
pub mod theming;
