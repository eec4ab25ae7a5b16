// src/aggregate.rs

use serde::Serialize;

use crate::extract::ContaminantOccurrence;
use crate::vocabulary::Vocabulary;

/// One row of the presence matrix. `presence` runs parallel to the
/// vocabulary's column order.
#[derive(Debug, Clone, Serialize)]
pub struct UtilityRow {
    pub zip_code: String,
    pub utility_name: String,
    pub presence: Vec<bool>,
}

/// One row of the long-form detail table, 1:1 with a vocabulary-matched
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub zip_code: String,
    pub contaminant_name: String,
    pub potential_effect: String,
    pub detect_times_greater_than: String,
    pub utility_value: String,
    pub ewg_guideline_value: String,
    pub legal_limit_value: String,
}

/// Append-only accumulator for the two output tables. Rows land in
/// processing order; detail rows keep document order within a location.
#[derive(Debug, Default)]
pub struct Dataset {
    pub utility_rows: Vec<UtilityRow>,
    pub detail_rows: Vec<DetailRow>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one location's occurrences into both tables. Occurrences whose
    /// name is outside the vocabulary contribute to neither: no presence
    /// flag, no detail row. Callers only invoke this for locations that
    /// yielded at least one occurrence; a location with none gets no row
    /// of either kind.
    pub fn add_location(
        &mut self,
        zip_code: &str,
        utility_name: &str,
        occurrences: &[ContaminantOccurrence],
        vocab: &Vocabulary,
    ) {
        let mut presence = vec![false; vocab.len()];
        for occurrence in occurrences {
            let Some(column) = vocab.position(&occurrence.name) else {
                continue;
            };
            presence[column] = true;
            self.detail_rows.push(DetailRow {
                zip_code: zip_code.to_string(),
                contaminant_name: occurrence.name.trim().to_string(),
                potential_effect: occurrence.potential_effect.clone(),
                detect_times_greater_than: occurrence.detect_times_greater_than.clone(),
                utility_value: occurrence.utility_value.clone(),
                ewg_guideline_value: occurrence.ewg_guideline_value.clone(),
                legal_limit_value: occurrence.legal_limit_value.clone(),
            });
        }
        self.utility_rows.push(UtilityRow {
            zip_code: zip_code.to_string(),
            utility_name: utility_name.to_string(),
            presence,
        });
    }
}
