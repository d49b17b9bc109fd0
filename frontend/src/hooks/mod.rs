pub mod use_theme_class;

pub use use_theme_class::*;
