// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to be consistent: keep the ratios intact (e.g.
//! `spacing::MD = spacing::XS * 2`) when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.15;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Component widths
    pub const CARD_WIDTH: f32 = 440.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    // Strength meter bar thickness
    pub const METER_HEIGHT: f32 = 5.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - screen headings
    pub const TITLE_LG: f32 = 26.0;

    /// Small title - section headers, toast headers
    pub const TITLE_SM: f32 = 16.0;

    /// Standard body - most UI text, labels, inputs
    pub const BODY: f32 = 14.0;

    /// Caption - strength meter label, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - input fields, alert accents
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
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

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        let colors = [
            palette::DANGER_500,
            palette::WARNING_500,
            palette::SUCCESS_500,
            palette::INFO_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
