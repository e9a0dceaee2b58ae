// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio page.
//!
//! - **Palette**: base colors (blue primary, purple accent)
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component widths
//! - **Typography**: font size scale
//! - **Radius**: border radii
//!
//! Tokens are designed to be consistent; keep the ratios intact (e.g.
//! MD = XS * 2) when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.98);

    // Brand colors
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.56, 0.96); // Light blue
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.2, 0.918); // Purple
    pub const ACCENT_100: Color = Color::from_rgb(0.93, 0.91, 0.99); // Pale purple

    // Surfaces
    pub const SURFACE: Color = Color::from_rgb(0.976, 0.98, 0.988);
    pub const SURFACE_CARD: Color = Color::from_rgb(1.0, 1.0, 1.0);
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Maximum width of the readable content column.
    pub const CONTENT_MAX_WIDTH: f32 = 860.0;

    /// Width of a skill/experience card in the section grids.
    pub const CARD_WIDTH: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero name.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - project titles, hero role
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - card and subsection headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - tags, footer, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_600.r >= 0.0 && palette::PRIMARY_600.r <= 1.0);
};
