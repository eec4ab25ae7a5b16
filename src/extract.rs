// src/extract.rs

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Sentinel for sub-fields the source page does not carry for an item.
pub const NOT_AVAILABLE: &str = "N/A";

/// One contaminant's reported values for one utility, as printed on the
/// detail page. Values are carried as display strings; no numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContaminantOccurrence {
    pub name: String,
    pub potential_effect: String,
    pub detect_times_greater_than: String,
    pub utility_value: String,
    pub ewg_guideline_value: String,
    pub legal_limit_value: String,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("contaminant item is missing its `{0}` element")]
    MissingElement(&'static str),
    #[error("value block has {0} spans, expected 5 or 6")]
    UnexpectedValueLayout(usize),
}

/// Span positions inside a `detect-levels-overview` block, keyed on the
/// number of spans the block carries. The page interleaves label and value
/// spans; an extra annotation span (e.g. an MCL note) shifts the legal limit
/// from position 4 to position 5, so the lookup is on total span count.
struct ValueLayout {
    utility_value: usize,
    ewg_guideline: usize,
    legal_limit: usize,
}

impl ValueLayout {
    fn for_span_count(count: usize) -> Result<Self, ExtractionError> {
        match count {
            5 => Ok(Self {
                utility_value: 1,
                ewg_guideline: 3,
                legal_limit: 4,
            }),
            6 => Ok(Self {
                utility_value: 1,
                ewg_guideline: 3,
                legal_limit: 5,
            }),
            n => Err(ExtractionError::UnexpectedValueLayout(n)),
        }
    }
}

/// Compiled selectors for one utility detail page. All anchors are fixed
/// class/id names from the EWG page markup, including the site's own
/// `potentital-effect` typo.
struct PageSelectors {
    above_region: Selector,
    above_grid: Selector,
    other_region: Selector,
    grid_item: Selector,
    data_section: Selector,
    name: Selector,
    potential_effect: Selector,
    detect_times: Selector,
    detect_levels: Selector,
    span: Selector,
}

impl PageSelectors {
    fn new() -> Self {
        let parse = |css: &str| {
            Selector::parse(css).expect("CSS selector for contaminant page should be valid")
        };
        Self {
            above_region: parse("div#contams_above_hbl"),
            above_grid: parse("div.contaminants-grid"),
            other_region: parse("ul.contaminants-list#contams_other"),
            grid_item: parse("div.contaminant-grid-item"),
            data_section: parse("section.contaminant-data"),
            name: parse("h3"),
            potential_effect: parse("span.potentital-effect"),
            detect_times: parse("span.detect-times-greater-than"),
            detect_levels: parse("div.detect-levels-overview"),
            span: parse("span"),
        }
    }
}

/// Parse one utility detail page into its contaminant occurrences, in
/// document order. Two regions contribute: the above-guideline grid (items
/// carry effect and detect-times fields) and the other-detected list (items
/// carry only the value block). A page missing either region simply
/// contributes zero occurrences from it.
pub fn extract_contaminants(html: &str) -> Result<Vec<ContaminantOccurrence>, ExtractionError> {
    let sel = PageSelectors::new();
    let doc = Html::parse_document(html);
    let mut occurrences = Vec::new();

    if let Some(region) = doc.select(&sel.above_region).next() {
        if let Some(grid) = region.select(&sel.above_grid).next() {
            for item in grid.select(&sel.grid_item) {
                occurrences.push(parse_above_guideline_item(item, &sel)?);
            }
        }
    }

    if let Some(list) = doc.select(&sel.other_region).next() {
        for item in list.select(&sel.grid_item) {
            occurrences.push(parse_other_detected_item(item, &sel)?);
        }
    }

    debug!(count = occurrences.len(), "extracted contaminant occurrences");
    Ok(occurrences)
}

fn parse_above_guideline_item(
    item: ElementRef,
    sel: &PageSelectors,
) -> Result<ContaminantOccurrence, ExtractionError> {
    let data = item
        .select(&sel.data_section)
        .next()
        .ok_or(ExtractionError::MissingElement("section.contaminant-data"))?;

    let potential_effect = data
        .select(&sel.potential_effect)
        .next()
        .map(element_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let detect_times_greater_than = item
        .select(&sel.detect_times)
        .next()
        .map(element_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let (name, values) = parse_shared_fields(data, sel)?;
    Ok(ContaminantOccurrence {
        name,
        potential_effect,
        detect_times_greater_than,
        utility_value: values.0,
        ewg_guideline_value: values.1,
        legal_limit_value: values.2,
    })
}

fn parse_other_detected_item(
    item: ElementRef,
    sel: &PageSelectors,
) -> Result<ContaminantOccurrence, ExtractionError> {
    let data = item
        .select(&sel.data_section)
        .next()
        .ok_or(ExtractionError::MissingElement("section.contaminant-data"))?;

    let (name, values) = parse_shared_fields(data, sel)?;
    Ok(ContaminantOccurrence {
        name,
        potential_effect: NOT_AVAILABLE.to_string(),
        detect_times_greater_than: NOT_AVAILABLE.to_string(),
        utility_value: values.0,
        ewg_guideline_value: values.1,
        legal_limit_value: values.2,
    })
}

/// Name plus the (utility, guideline, legal limit) triple every item carries.
fn parse_shared_fields(
    data: ElementRef,
    sel: &PageSelectors,
) -> Result<(String, (String, String, String)), ExtractionError> {
    let name = data
        .select(&sel.name)
        .next()
        .map(element_text)
        .ok_or(ExtractionError::MissingElement("h3"))?;

    let levels = data
        .select(&sel.detect_levels)
        .next()
        .ok_or(ExtractionError::MissingElement("div.detect-levels-overview"))?;
    let spans: Vec<String> = levels.select(&sel.span).map(element_text).collect();
    let layout = ValueLayout::for_span_count(spans.len())?;

    Ok((
        name,
        (
            spans[layout.utility_value].clone(),
            spans[layout.ewg_guideline].clone(),
            spans[layout.legal_limit].clone(),
        ),
    ))
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
