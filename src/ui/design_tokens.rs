// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the gallery views.
//!
//! ```
//! use cat_gallery::ui::design_tokens::{sizing, spacing};
//!
//! assert!(sizing::THUMBNAIL < sizing::CAROUSEL_HEIGHT);
//! assert_eq!(spacing::MD, spacing::XS * 2.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the focused picture in the carousel.
    pub const CAROUSEL_HEIGHT: f32 = 360.0;

    /// Edge of a thumbnail in the carousel strip.
    pub const THUMBNAIL: f32 = 72.0;

    pub const PICK_LIST_WIDTH: f32 = 260.0;
    pub const PROGRESS_WIDTH: f32 = 200.0;
    pub const PROGRESS_HEIGHT: f32 = 8.0;

    pub const SIDEBAR_WIDTH: f32 = 290.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window-level headings and carousel arrows.
    pub const TITLE: f32 = 20.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::XXS * 2.0, spacing::XS);
        assert_eq!(spacing::XS * 2.0, spacing::MD);
        assert_eq!(spacing::XS * 3.0, spacing::LG);
    }

    #[test]
    fn typography_is_ordered() {
        assert!(typography::TITLE > typography::TITLE_SM);
        assert!(typography::TITLE_SM > typography::BODY);
        assert!(typography::BODY > typography::CAPTION);
    }
}
