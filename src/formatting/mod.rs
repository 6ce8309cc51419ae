pub mod prayer;
pub mod theme;
pub mod utils;

pub use prayer::{describe_background, print_backgrounds, print_methods, print_prayer_card, print_settings, print_translations};
pub use utils::{center, format_location, format_opacity, format_toggle, truncate};
