use pagelens::network::PageFetcher;
use pagelens::profiler::{PageProfiler, WebsiteProfile};

#[tokio::main]
async fn main() {
    // Initialize Telemetry
    tracing_subscriber::fmt()
        .with_env_filter("pagelens=debug,info")
        .with_target(false)
        .json()
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: pagelens <url>");
        std::process::exit(2);
    };

    let fetcher = match PageFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let profiler = PageProfiler::new();

    // * Fetch failure still yields the full, neutral profile shape
    let profile = match fetcher.fetch(&url).await {
        Ok(page) => profiler.profile(&page.final_url, &page.html),
        Err(err) => {
            tracing::warn!(%url, error = %err, "fetch failed, emitting unreachable profile");
            WebsiteProfile::unreachable(&url)
        }
    };

    println!("{}", profile.to_json_pretty());
}
