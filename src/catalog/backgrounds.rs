use lazy_static::lazy_static;
use regex::Regex;

/// A plain 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let caps = HEX_COLOR.captures(hex.trim())?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        Some(Rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Linear mix of `self` over `under`; `alpha` is clamped to [0, 1].
    pub fn blend_over(&self, under: Rgb, alpha: f64) -> Rgb {
        let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f64 * a + bottom as f64 * (1.0 - a)).round() as u8
        };
        Rgb(mix(self.0, under.0), mix(self.1, under.1), mix(self.2, under.2))
    }

    /// Perceived brightness in [0, 255].
    pub fn luminance(&self) -> f64 {
        0.299 * self.0 as f64 + 0.587 * self.1 as f64 + 0.114 * self.2 as f64
    }
}

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// A bundled backdrop image. The terminal cannot draw the picture itself, so
/// each entry carries the accent color it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub id: &'static str,
    pub name: &'static str,
    pub asset: &'static str,
    pub accent: &'static str,
}

impl BackgroundImage {
    pub fn accent_rgb(&self) -> Rgb {
        Rgb::from_hex(self.accent).unwrap_or(Rgb(0, 0, 0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolidColor {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

impl SolidColor {
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.hex).unwrap_or(Rgb(0, 0, 0))
    }
}

lazy_static! {
    pub static ref BACKGROUND_IMAGES: Vec<BackgroundImage> = vec![
        BackgroundImage { id: "geometric_gold", name: "Geometric Gold", asset: "assets/backgrounds/geometric_gold.jpg", accent: "#8a6d2f" },
        BackgroundImage { id: "mosque_dusk", name: "Mosque at Dusk", asset: "assets/backgrounds/mosque_dusk.jpg", accent: "#4a3b5c" },
        BackgroundImage { id: "desert_dunes", name: "Desert Dunes", asset: "assets/backgrounds/desert_dunes.jpg", accent: "#a8743d" },
        BackgroundImage { id: "night_sky", name: "Night Sky", asset: "assets/backgrounds/night_sky.jpg", accent: "#141c33" },
        BackgroundImage { id: "green_arabesque", name: "Green Arabesque", asset: "assets/backgrounds/green_arabesque.jpg", accent: "#1f4d3a" },
        BackgroundImage { id: "marble_white", name: "White Marble", asset: "assets/backgrounds/marble_white.jpg", accent: "#cfcac2" },
        BackgroundImage { id: "ocean_calm", name: "Calm Ocean", asset: "assets/backgrounds/ocean_calm.jpg", accent: "#23506b" },
        BackgroundImage { id: "mountain_dawn", name: "Mountain Dawn", asset: "assets/backgrounds/mountain_dawn.jpg", accent: "#7a5468" },
    ];

    pub static ref SOLID_COLORS: Vec<SolidColor> = vec![
        SolidColor { id: "navy", name: "Navy", hex: "#1b2a4a" },
        SolidColor { id: "midnight", name: "Midnight", hex: "#0f1020" },
        SolidColor { id: "emerald", name: "Emerald", hex: "#0f5c45" },
        SolidColor { id: "forest", name: "Forest", hex: "#23402b" },
        SolidColor { id: "teal", name: "Teal", hex: "#16606a" },
        SolidColor { id: "burgundy", name: "Burgundy", hex: "#5c1a2b" },
        SolidColor { id: "plum", name: "Plum", hex: "#4b2a52" },
        SolidColor { id: "charcoal", name: "Charcoal", hex: "#2b2b2e" },
        SolidColor { id: "slate", name: "Slate", hex: "#44505c" },
        SolidColor { id: "sand", name: "Sand", hex: "#c2a878" },
    ];
}

pub fn find_image(id: &str) -> Option<&'static BackgroundImage> {
    BACKGROUND_IMAGES.iter().find(|image| image.id == id)
}

pub fn find_color(id: &str) -> Option<&'static SolidColor> {
    SOLID_COLORS.iter().find(|color| color.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#1b2a4a"), Some(Rgb(0x1b, 0x2a, 0x4a)));
        assert_eq!(Rgb::from_hex("FFFFFF"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_blend_over() {
        let white = Rgb(255, 255, 255);
        let black = Rgb(0, 0, 0);
        assert_eq!(white.blend_over(black, 1.0), white);
        assert_eq!(white.blend_over(black, 0.0), black);
        assert_eq!(white.blend_over(black, 0.5), Rgb(128, 128, 128));
        // out-of-range alpha saturates instead of overflowing
        assert_eq!(white.blend_over(black, 3.0), white);
        assert_eq!(white.blend_over(black, -1.0), black);
    }

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for image in BACKGROUND_IMAGES.iter() {
            assert!(Rgb::from_hex(image.accent).is_some(), "bad accent for {}", image.id);
        }
        for color in SOLID_COLORS.iter() {
            assert!(Rgb::from_hex(color.hex).is_some(), "bad hex for {}", color.id);
        }
        assert!(find_image("geometric_gold").is_some());
        assert!(find_color("navy").is_some());
        assert!(find_color("geometric_gold").is_none());
    }
}
