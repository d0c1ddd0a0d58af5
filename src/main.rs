use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use newswire::config::Settings;
use newswire::constants::SORT_METHODS;
use newswire::fetch::NewsClient;
use newswire::query::SearchQuery;
use newswire::types::SearchField;

/// Search the news API from the command line and print the raw JSON result.
#[derive(Debug, Parser)]
#[command(name = "newswire", version)]
struct Args {
    /// Full-text query term
    query: String,

    /// Result ordering: publishedAt, relevancy or popularity
    #[arg(long)]
    sort_by: Option<String>,

    /// Comma-separated fields to search: title,description,content
    #[arg(long)]
    search_in: Option<String>,

    /// Upstream result page
    #[arg(long)]
    page: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&settings.logging.level),
        )
        .init();

    if settings.api.key.is_empty() {
        tracing::warn!("no api key configured; the remote end will reject the request");
    }

    let client = NewsClient::new(&settings)?;

    let mut query = SearchQuery::new(&args.query);

    if let Some(fields) = &args.search_in {
        let fields = fields
            .split(',')
            .map(str::trim)
            .map(|slug| {
                SearchField::from_slug(slug)
                    .ok_or_else(|| anyhow::anyhow!("unknown search field: {slug}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        query = query.search_in(fields);
    }

    if let Some(sort) = &args.sort_by {
        let method = SORT_METHODS
            .iter()
            .find(|m| m.value == sort.as_str())
            .ok_or_else(|| anyhow::anyhow!("unknown sort method: {sort}"))?;
        query = query.sort_by(*method);
    }

    if let Some(page) = args.page {
        query = query.page(page);
    }

    let url = query.build_url_from(&settings.api.base_url)?;
    tracing::info!(%url, "fetching articles");

    let value = client.get_json(url.as_str(), None).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
