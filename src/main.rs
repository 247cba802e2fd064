use clap::Parser;
use intelli::{names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Grading endpoint receiving the rubric and submission.
    #[arg(short, long, env, default_value = names::DEFAULT_GRADING_URL)]
    grading_url: String,

    /// Largest accepted request body, in megabytes.
    #[arg(long, env, default_value_t = 25)]
    max_upload_mb: usize,

    /// Open rubric forms kept in memory before the idlest is dropped.
    #[arg(long, env, default_value_t = intelli::rubric::MAX_FORMS)]
    max_forms: usize,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,intelli=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();
    tracing::info!("grading endpoint: {}", args.grading_url);

    let state = AppState::new(args.grading_url, args.max_forms);
    let app = intelli::router(state, args.max_upload_mb * 1024 * 1024);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
