// src/export.rs

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

use crate::aggregate::Dataset;
use crate::vocabulary::Vocabulary;

static DETAIL_HEADERS: &[&str] = &[
    "ID",
    "Contaminant Name",
    "Potential Effect",
    "Detection Times Greater Than",
    "Utility Value",
    "EWG Health Guideline",
    "Legal Limit",
];

/// Persist both tables into one workbook: sheet "Utility Data" is the
/// presence matrix (vocabulary columns rendered Yes/No), sheet
/// "Contaminant Details" the long-form table.
pub fn write_workbook(dataset: &Dataset, vocab: &Vocabulary, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Utility Data")?;
        sheet.write_string(0, 0, "ID")?;
        sheet.write_string(0, 1, "Utility Name")?;
        for (col, name) in vocab.iter().enumerate() {
            sheet.write_string(0, (col + 2) as u16, name)?;
        }
        for (idx, row) in dataset.utility_rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            sheet.write_string(r, 0, row.zip_code.as_str())?;
            sheet.write_string(r, 1, row.utility_name.as_str())?;
            for (col, present) in row.presence.iter().enumerate() {
                let cell = if *present { "Yes" } else { "No" };
                sheet.write_string(r, (col + 2) as u16, cell)?;
            }
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Contaminant Details")?;
        for (col, header) in DETAIL_HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }
        for (idx, row) in dataset.detail_rows.iter().enumerate() {
            let r = (idx + 1) as u32;
            sheet.write_string(r, 0, row.zip_code.as_str())?;
            sheet.write_string(r, 1, row.contaminant_name.as_str())?;
            sheet.write_string(r, 2, row.potential_effect.as_str())?;
            sheet.write_string(r, 3, row.detect_times_greater_than.as_str())?;
            sheet.write_string(r, 4, row.utility_value.as_str())?;
            sheet.write_string(r, 5, row.ewg_guideline_value.as_str())?;
            sheet.write_string(r, 6, row.legal_limit_value.as_str())?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("saving workbook {:?}", path))?;
    info!(
        path = %path.display(),
        utilities = dataset.utility_rows.len(),
        details = dataset.detail_rows.len(),
        "workbook written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ContaminantOccurrence, NOT_AVAILABLE};
    use tempfile::tempdir;

    #[test]
    fn writes_both_sheets() -> Result<()> {
        let vocab = Vocabulary::new(["Arsenic", "Fluoride"]);
        let mut dataset = Dataset::new();
        dataset.add_location(
            "62701",
            "Springfield Water",
            &[ContaminantOccurrence {
                name: "Arsenic".into(),
                potential_effect: NOT_AVAILABLE.into(),
                detect_times_greater_than: NOT_AVAILABLE.into(),
                utility_value: "12".into(),
                ewg_guideline_value: "0.06".into(),
                legal_limit_value: "10".into(),
            }],
            &vocab,
        );

        let dir = tempdir()?;
        let path = dir.path().join("out.xlsx");
        write_workbook(&dataset, &vocab, &path)?;

        let metadata = std::fs::metadata(&path)?;
        assert!(metadata.len() > 0);
        Ok(())
    }

    #[test]
    fn empty_dataset_still_writes_headers() -> Result<()> {
        let vocab = Vocabulary::default_contaminants();
        let dir = tempdir()?;
        let path = dir.path().join("empty.xlsx");
        write_workbook(&Dataset::new(), &vocab, &path)?;
        assert!(path.exists());
        Ok(())
    }
}
