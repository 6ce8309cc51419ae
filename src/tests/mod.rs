mod display_tests;
mod error_tests;
mod persistence_tests;
mod store_tests;
mod theme_tests;
