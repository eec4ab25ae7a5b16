// src/input.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// Read the `Zip` column of a headered CSV into an ordered list. Blank
/// cells are skipped; duplicates are kept as-is. An empty list is a valid
/// result and is the caller's "nothing to do" case.
pub fn read_zip_codes(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening ZIP code list {:?}", path))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("reading header row of {:?}", path))?
        .clone();
    let zip_column = headers
        .iter()
        .position(|h| h.trim() == "Zip")
        .with_context(|| format!("{:?} has no `Zip` column", path))?;

    let mut zip_codes = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record =
            record.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        if let Some(zip) = record.get(zip_column) {
            let zip = zip.trim();
            if !zip.is_empty() {
                zip_codes.push(zip.to_string());
            }
        }
    }
    Ok(zip_codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_zip_column_in_order() {
        let f = csv_file("City,Zip\nSpringfield,62701\nShelbyville,62565\n");
        let zips = read_zip_codes(f.path()).unwrap();
        assert_eq!(zips, vec!["62701", "62565"]);
    }

    #[test]
    fn keeps_duplicates_and_skips_blanks() {
        let f = csv_file("Zip\n62701\n\n62701\n");
        let zips = read_zip_codes(f.path()).unwrap();
        assert_eq!(zips, vec!["62701", "62701"]);
    }

    #[test]
    fn missing_zip_column_is_an_error() {
        let f = csv_file("City,PostalCode\nSpringfield,62701\n");
        assert!(read_zip_codes(f.path()).is_err());
    }

    #[test]
    fn header_only_file_is_empty_not_an_error() {
        let f = csv_file("Zip\n");
        assert_eq!(read_zip_codes(f.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_zip_codes("definitely/not/here.csv").is_err());
    }
}
