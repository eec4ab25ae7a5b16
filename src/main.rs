use anyhow::Result;
use reqwest::Client;
use tapscraper::{
    export,
    fetch::HttpFetcher,
    input, pipeline,
    resolve::EwgResolver,
    vocabulary::Vocabulary,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

static ZIP_CODES_FILE: &str = "zip_codes.csv";
static OUTPUT_FILE: &str = "utilities_contaminants.xlsx";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) read the location list ───────────────────────────────────
    let zip_codes = input::read_zip_codes(ZIP_CODES_FILE)?;
    if zip_codes.is_empty() {
        eprintln!("No ZIP codes found in {}.", ZIP_CODES_FILE);
        return Ok(());
    }
    info!("{} ZIP codes to process", zip_codes.len());

    // ─── 3) run the pipeline sequentially ────────────────────────────
    let client = Client::new();
    let resolver = EwgResolver::new(client.clone());
    let fetcher = HttpFetcher::new(client);
    let vocab = Vocabulary::default_contaminants();

    let dataset = pipeline::run(&zip_codes, &resolver, &fetcher, &vocab).await;
    info!(
        utilities = dataset.utility_rows.len(),
        details = dataset.detail_rows.len(),
        "pipeline complete"
    );

    // ─── 4) write the workbook ───────────────────────────────────────
    export::write_workbook(&dataset, &vocab, OUTPUT_FILE)?;
    println!("Data successfully saved to {}", OUTPUT_FILE);
    Ok(())
}
