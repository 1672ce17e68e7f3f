pub mod app_theme;
mod extractor_view;

pub use extractor_view::{ExtractorView, ExtractorViewMessage};
