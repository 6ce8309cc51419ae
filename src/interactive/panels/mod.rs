pub mod header;
pub mod prayer_card;
pub mod settings;
