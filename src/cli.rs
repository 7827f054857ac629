use clap::Parser;

use crate::error::{Error, Result};
use crate::models::Request;

pub const DEFAULT_COUNTRY: &str = "ua";

/// Extract the App Store rating histogram (5★ to 1★) from the public product page.
#[derive(Parser, Debug, Clone)]
#[command(name = "extract_rating_histogram_from_html", version, long_about = None)]
pub struct Args {
    /// Numeric App Store app identifier, e.g. 1234567890
    pub app_id: String,

    /// Two-letter storefront code (e.g. us, ua, gb)
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Parses the process arguments.
    ///
    /// `--help` and `--version` print their text and exit 0. Usage mistakes come
    /// back as [`Error::InvalidArgument`] carrying clap's message on one line.
    pub fn from_env() -> Result<Self> {
        Self::try_parse().map_err(|err| {
            if !err.use_stderr() {
                err.exit();
            }
            usage_error(&err)
        })
    }

    pub fn validate(&self) -> Result<Request> {
        Ok(Request {
            app_id: self.app_id.parse()?,
            country: self.country.parse()?,
            pretty: self.pretty,
        })
    }
}

/// Squeezes clap's first message paragraph onto one line, dropping tips and usage.
pub fn usage_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let message = rendered.split("\n\n").next().unwrap_or_default();
    let message = message.trim().trim_start_matches("error:");
    Error::InvalidArgument(message.split_whitespace().collect::<Vec<_>>().join(" "))
}
