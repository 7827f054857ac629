pub mod ratings_extractor;

pub use ratings_extractor::extract_ratings;
