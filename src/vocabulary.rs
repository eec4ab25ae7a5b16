// src/vocabulary.rs

/// The ordered set of contaminant names recognized as presence-matrix
/// columns. Order is significant: it is the column order of the
/// "Utility Data" sheet. Built once in the driver and passed down, so
/// tests and callers can swap in their own list.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    names: Vec<String>,
}

/// The EWG contaminants tracked by default.
static DEFAULT_CONTAMINANTS: &[&str] = &[
    "Arsenic",
    "Bromochloroacetic acid",
    "Bromodichloromethane",
    "Chlorite",
    "Chromium (hexavalent)",
    "Dibromoacetic acid",
    "Dibromochloromethane",
    "Dichloroacetic acid",
    "Haloacetic acids (HAA5)†",
    "Haloacetic acids (HAA9)†",
    "Radium, combined (-226 & -228)",
    "Total trihalomethanes (TTHMs)†",
    "Uranium",
    "Aluminum",
    "Atrazine",
    "Barium",
    "Bromoform",
    "Chlorate",
    "Chloroform",
    "Chromium (total)",
    "Cyanide",
    "Cyanide (free)",
    "Fluoride",
    "Manganese",
    "Molybdenum",
    "Monobromoacetic acid",
    "Monochloroacetic acid",
    "Nitrate",
    "Nitrate and nitrite",
    "Nitrite",
    "Selenium",
    "Simazine",
    "Strontium",
    "Trichloroacetic acid",
    "Vanadium",
];

impl Vocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed EWG contaminant list, in sheet column order.
    pub fn default_contaminants() -> Self {
        Self::new(DEFAULT_CONTAMINANTS.iter().copied())
    }

    /// Column position of `name` (after trimming), if it is a known contaminant.
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.names.iter().position(|n| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate names in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_expected_shape() {
        let vocab = Vocabulary::default_contaminants();
        assert_eq!(vocab.len(), 35);
        // first and last columns anchor the sheet order
        assert_eq!(vocab.position("Arsenic"), Some(0));
        assert_eq!(vocab.position("Vanadium"), Some(34));
        // the dagger-suffixed names are matched verbatim
        assert!(vocab.contains("Haloacetic acids (HAA5)†"));
        assert!(!vocab.contains("Haloacetic acids (HAA5)"));
    }

    #[test]
    fn membership_trims_whitespace() {
        let vocab = Vocabulary::new(["Arsenic", "Fluoride"]);
        assert!(vocab.contains("  Arsenic "));
        assert!(!vocab.contains("Lead"));
    }
}
