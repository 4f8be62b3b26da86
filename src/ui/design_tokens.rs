// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the pager chrome and the slider surface.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_pager::ui::design_tokens::{palette, spacing};

let padding = spacing::MD; // 16px
let background = palette::SURFACE_BACKGROUND_RGBA;
assert_eq!(background, [0xf0, 0xf0, 0xf0, 0xff]);
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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Fill behind pages smaller than the surface (`#f0f0f0`).
    pub const SURFACE_BACKGROUND_RGBA: [u8; 4] = [0xf0, 0xf0, 0xf0, 0xff];

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
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
    pub const ICON_XL: f32 = 48.0;

    /// Bar height of the skeleton placeholder
    pub const SKELETON_BAR: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - error headings
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Caption under the slider
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(palette::SURFACE_BACKGROUND_RGBA[3] == 0xff);
};
