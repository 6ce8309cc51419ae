use ratatui::style::Color;
use std::env;

use crate::catalog::{find_color, find_image, Rgb};
use crate::constants::DEFAULT_BACKGROUND_IMAGE;
use crate::models::{BackgroundKind, Settings, ThemeMode};

/// Resolved terminal colors for the current settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,
    pub background: Rgb,
    pub card: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub fn for_settings(settings: &Settings) -> Self {
        let dark = is_dark(settings.theme);
        let base = if dark { Rgb(16, 17, 22) } else { Rgb(244, 241, 234) };
        let surface = if dark { Rgb(34, 36, 46) } else { Rgb(255, 255, 255) };

        let background = background_rgb(settings, base);
        let card = surface.blend_over(background, settings.card_opacity);

        let light_card = card.luminance() > 140.0;
        let text = if light_card { Rgb(28, 28, 32) } else { Rgb(236, 236, 240) };
        let muted = if light_card { Rgb(100, 100, 110) } else { Rgb(150, 150, 160) };

        Self {
            dark,
            background,
            card,
            text,
            muted,
            accent: Rgb(214, 172, 74),
            border: muted,
        }
    }
}

/// The color the backdrop is painted with. Images are drawn as their accent
/// color faded over the theme base by the background opacity; identifiers
/// missing from the catalogs fall back to the default image.
pub fn background_rgb(settings: &Settings, base: Rgb) -> Rgb {
    let background = &settings.background;
    let solid = match background.kind() {
        BackgroundKind::Color => background.color_id().and_then(find_color).map(|c| c.rgb()),
        BackgroundKind::Image => None,
    };
    if let Some(rgb) = solid {
        return rgb;
    }

    let image = background
        .image_id()
        .and_then(find_image)
        .or_else(|| find_image(DEFAULT_BACKGROUND_IMAGE));
    match image {
        Some(image) => image.accent_rgb().blend_over(base, background.opacity()),
        None => base,
    }
}

/// `System` follows the terminal: COLORFGBG ends in the background color
/// index, where 7 and 15 are the light ones.
pub fn is_dark(theme: ThemeMode) -> bool {
    match theme {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => match env::var("COLORFGBG") {
            Ok(value) => !matches!(value.rsplit(';').next(), Some("7") | Some("15")),
            Err(_) => true,
        },
    }
}

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
