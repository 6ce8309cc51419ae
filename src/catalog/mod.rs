//! Static reference tables. Built once on first access and never mutated.

pub mod backgrounds;
pub mod methods;
pub mod prayers;

pub use backgrounds::{find_color, find_image, BackgroundImage, Rgb, SolidColor, BACKGROUND_IMAGES, SOLID_COLORS};
pub use methods::{
    find_method, find_translation, method_label, translation_label, CalculationMethod, Translation,
    CALCULATION_METHODS, TRANSLATIONS,
};
pub use prayers::{language_label, prayer_icon, prayer_label, LANGUAGES};
