use anyhow::{Context, Result};
use clap::Parser;
use cross_sell::{Config, RecommendationRequest, Ranker, ScoreRanker};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print cross-sell recommendations for one request as JSON.
#[derive(Debug, Parser)]
#[command(name = "cross-sell", version)]
struct Args {
    /// Product id to leave out (usually the calling app)
    #[arg(long)]
    exclude: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// Requested tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Result limit [default: CROSS_SELL__MAX_ITEMS or 3]
    #[arg(long)]
    max_items: Option<usize>,

    /// JSON catalog file, overrides CROSS_SELL__CATALOG_PATH
    #[arg(long)]
    catalog: Option<String>,

    /// Include each product's score in the output
    #[arg(long)]
    scores: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation<'a> {
    #[serde(flatten)]
    product: &'a cross_sell::Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
}

fn main() -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},cross_sell=debug", config.log_level).into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    config = config.with_max_items(args.max_items);
    config.validate().context("Configuration validation failed")?;

    let catalog = config.load_catalog().context("Failed to load product catalog")?;
    info!(products = catalog.len(), "Catalog ready");

    let mut request = RecommendationRequest::new()
        .tags(args.tags)
        .max_items(config.max_items);
    if let Some(exclude) = args.exclude {
        request = request.exclude(exclude);
    }
    if let Some(category) = args.category {
        request = request.category(category);
    }

    let ranked = ScoreRanker::new().rank_scored(catalog.products(), &request);
    let output: Vec<Recommendation<'_>> = ranked
        .iter()
        .map(|candidate| Recommendation {
            product: candidate.product,
            score: args.scores.then_some(candidate.score),
        })
        .collect();

    let json = serde_json::to_string_pretty(&output).context("Failed to encode recommendations")?;
    println!("{}", json);

    Ok(())
}
