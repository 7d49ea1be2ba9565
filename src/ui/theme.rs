use cursive::theme::{BorderStyle, Color, Palette, PaletteColor, Theme};

use crate::modules::widget::models::ThemeMode;

// The widget's two fixed palettes. Values mirror the product styling:
// a white card with dark text, or the inverse, plus the green accent the
// toggle switches use in both modes.
const LIGHT_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
const LIGHT_TEXT: Color = Color::Rgb(0x33, 0x33, 0x33);
const LIGHT_INFO_BACKGROUND: Color = Color::Rgb(0xf4, 0xf4, 0xf4);
const LIGHT_INFO_BORDER: Color = Color::Rgb(0xcc, 0xcc, 0xcc);

const DARK_BACKGROUND: Color = Color::Rgb(0x33, 0x33, 0x33);
const DARK_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
const DARK_INFO_BACKGROUND: Color = Color::Rgb(0x44, 0x44, 0x44);
const DARK_INFO_BORDER: Color = Color::Rgb(0x66, 0x66, 0x66);

const ACCENT: Color = Color::Rgb(0x4c, 0xd9, 0x64);

/// Build the full Cursive theme for a display mode.
///
/// Both modes map the same roles; only the colors swap, so toggling the
/// mode re-skins every themed element at once without touching any state.
pub fn theme_for(mode: ThemeMode) -> Theme {
    let (background, text, info_background, info_border) = if mode.is_dark() {
        (DARK_BACKGROUND, DARK_TEXT, DARK_INFO_BACKGROUND, DARK_INFO_BORDER)
    } else {
        (
            LIGHT_BACKGROUND,
            LIGHT_TEXT,
            LIGHT_INFO_BACKGROUND,
            LIGHT_INFO_BORDER,
        )
    };

    let mut palette = Palette::default();
    palette[PaletteColor::Background] = background;
    palette[PaletteColor::Shadow] = info_border;
    palette[PaletteColor::View] = background;
    palette[PaletteColor::Primary] = text;
    palette[PaletteColor::Secondary] = info_border;
    palette[PaletteColor::Tertiary] = text;
    palette[PaletteColor::TitlePrimary] = text;
    palette[PaletteColor::TitleSecondary] = text;
    palette[PaletteColor::Highlight] = ACCENT;
    palette[PaletteColor::HighlightInactive] = info_background;
    palette[PaletteColor::HighlightText] = background;

    let mut theme = Theme::default();
    theme.shadow = false;
    theme.borders = BorderStyle::Simple;
    theme.palette = palette;
    theme
}
