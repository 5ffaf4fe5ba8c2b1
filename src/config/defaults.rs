// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the cat API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Number of images requested per breed.
pub const DEFAULT_IMAGE_LIMIT: u32 = 5;

/// Smallest accepted image page size.
pub const MIN_IMAGE_LIMIT: u32 = 1;

/// Largest accepted image page size.
pub const MAX_IMAGE_LIMIT: u32 = 25;

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "CAT_GALLERY_API_KEY";
