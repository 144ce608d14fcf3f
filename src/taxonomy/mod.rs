pub mod languages;

pub use languages::detect_language;
