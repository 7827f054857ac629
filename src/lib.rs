//! Scrapes the rating histogram off a public App Store product page.
//!
//! The pipeline is validate → fetch → extract → write; see [`run`].

use std::io::Write;
use tracing::info;

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod output;
pub mod services;

pub use cli::Args;
pub use error::{Error, Result};
pub use extractors::extract_ratings;
pub use models::RatingSnapshot;
pub use output::JsonWriter;
pub use services::{PageSource, ProductPageService};

/// Runs one extraction and writes the JSON document to `out`.
///
/// Arguments are validated before `source` is touched. Nothing is written
/// unless extraction succeeds.
pub async fn run<S, W>(args: &Args, source: &S, out: &mut W) -> Result<RatingSnapshot>
where
    S: PageSource + ?Sized,
    W: Write,
{
    let request = args.validate()?;

    let html = source.fetch_page(&request.app_id, &request.country).await?;
    let snapshot = extract_ratings(&html)?;

    info!(
        app_id = %request.app_id,
        country = %request.country,
        total_number_of_ratings = snapshot.total_number_of_ratings,
        "Extraction complete"
    );

    JsonWriter::new(out, request.pretty).write_snapshot(&snapshot)?;

    Ok(snapshot)
}
