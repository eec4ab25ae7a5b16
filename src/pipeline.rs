// src/pipeline.rs

use tracing::{error, info};

use crate::aggregate::Dataset;
use crate::extract::extract_contaminants;
use crate::fetch::PageFetcher;
use crate::resolve::Resolver;
use crate::vocabulary::Vocabulary;

/// Run the full extraction pipeline over `zip_codes`, strictly in order.
/// Every failure is scoped to its location: resolution, fetch, and
/// extraction errors are logged and the ZIP code is skipped; the run
/// itself never aborts. Locations with no match or no extracted
/// occurrences contribute no rows of either kind.
pub async fn run<R, F>(
    zip_codes: &[String],
    resolver: &R,
    fetcher: &F,
    vocab: &Vocabulary,
) -> Dataset
where
    R: Resolver,
    F: PageFetcher,
{
    let mut dataset = Dataset::new();

    for zip_code in zip_codes {
        let utility = match resolver.resolve(zip_code).await {
            Ok(Some(utility)) => utility,
            Ok(None) => {
                info!(zip = %zip_code, "no matched utility");
                continue;
            }
            Err(e) => {
                error!(zip = %zip_code, error = %e, "resolution failed");
                continue;
            }
        };

        let body = match fetcher.fetch(&utility.detail_url).await {
            Ok(body) => body,
            Err(e) => {
                error!(zip = %zip_code, error = %e, "detail page fetch failed");
                continue;
            }
        };

        // a page that fails to parse counts as zero occurrences
        let occurrences = match extract_contaminants(&body) {
            Ok(occurrences) => occurrences,
            Err(e) => {
                error!(zip = %zip_code, utility = %utility.name, error = %e, "extraction failed");
                Vec::new()
            }
        };
        if occurrences.is_empty() {
            info!(zip = %zip_code, utility = %utility.name, "no contaminants extracted");
            continue;
        }

        info!(
            zip = %zip_code,
            utility = %utility.name,
            occurrences = occurrences.len(),
            "aggregating location"
        );
        dataset.add_location(zip_code, &utility.name, &occurrences, vocab);
    }

    dataset
}
