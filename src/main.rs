use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use appstore_ratings::config::Settings;
use appstore_ratings::{run, Args, ProductPageService, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match Args::from_env() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    match execute(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn execute(args: &Args) -> Result<()> {
    // Reject bad input before building a client.
    args.validate()?;

    let settings = Settings::new()?;
    let service = ProductPageService::new(&settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args, &service, &mut out).await?;

    Ok(())
}
