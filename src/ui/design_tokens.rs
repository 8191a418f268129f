// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens of the gallery, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (warm cream surfaces, terracotta brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use keepsake::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Backdrop behind the enable-music prompt
let backdrop = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.16, 0.13, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.33, 0.29, 0.27);
    pub const GRAY_400: Color = Color::from_rgb(0.52, 0.48, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.74, 0.71);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.87, 0.84);

    // Page background gradient (cream to sand)
    pub const CREAM_50: Color = Color::from_rgb(0.996, 0.976, 0.961); // #fef9f5
    pub const CREAM_100: Color = Color::from_rgb(0.961, 0.922, 0.878); // #f5ebe0
    pub const SAND_200: Color = Color::from_rgb(0.91, 0.835, 0.769); // #e8d5c4

    // Night variant of the page background
    pub const NIGHT_900: Color = Color::from_rgb(0.11, 0.09, 0.08);
    pub const NIGHT_800: Color = Color::from_rgb(0.16, 0.13, 0.11);

    // Brand colors (terracotta scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.95, 0.8, 0.72);
    pub const PRIMARY_400: Color = Color::from_rgb(0.86, 0.55, 0.42);
    pub const PRIMARY_500: Color = Color::from_rgb(0.78, 0.45, 0.32);
    pub const PRIMARY_600: Color = Color::from_rgb(0.66, 0.36, 0.25);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Frosted cards (music control, caption card)
    pub const GLASS: f32 = 0.7;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;

    /// Secondary text on the page (subtitle, footer)
    pub const TEXT_MUTED: f32 = 0.6;
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
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const PLAY_BUTTON: f32 = 48.0;

    // Music control
    pub const VOLUME_SLIDER_WIDTH: f32 = 96.0;

    // Gallery
    pub const STAGE_MAX_WIDTH: f32 = 960.0;
    pub const STAGE_HEIGHT: f32 = 520.0;
    pub const DOT: f32 = 8.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 24.0;
    pub const PROGRESS_HEIGHT: f32 = 4.0;
    pub const PROGRESS_WIDTH: f32 = 160.0;

    // Component widths
    pub const PANEL_WIDTH: f32 = 360.0;
    pub const PROMPT_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the page heading
    //! - Titles: card and panel headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Page heading
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Caption of the current photo
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Prompt heading, panel heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Subtitle
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Counter, footer, small info
    pub const CAPTION: f32 = 12.0;

    /// Emoji above the heading
    pub const EMOJI: f32 = 56.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 40.0,
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
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < opacity::SURFACE);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
