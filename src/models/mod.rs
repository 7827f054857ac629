mod ratings;
mod request;

pub use ratings::RatingSnapshot;
pub use request::{AppId, Country, Request};
