//! PPP reference data: countries and their purchasing-power coefficients.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// The reference country: coefficient exactly 1.0, all other coefficients
/// are relative to it.
pub const BASELINE_COUNTRY: &str = "États-Unis";

/// One country's pricing reference data
#[derive(Debug, Clone, Serialize)]
pub struct CountryEntry {
    /// Display name, unique across the table, acts as the lookup key
    pub name: String,
    /// ISO 3166-1 alpha-2 code (informational)
    pub code: String,
    /// Flag emoji (informational)
    pub flag: String,
    /// Purchasing-power multiplier relative to the baseline
    #[serde(with = "rust_decimal::serde::str")]
    pub coefficient: Decimal,
}

/// Immutable PPP reference table.
///
/// Built once at startup, shared read-only for the life of the process.
/// Invariants: names are unique, coefficients are strictly positive, and
/// exactly one entry (the baseline) has coefficient 1.0.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Vec<CountryEntry>,
}

fn entry(name: &str, code: &str, flag: &str, coefficient: Decimal) -> CountryEntry {
    CountryEntry {
        name: name.to_string(),
        code: code.to_string(),
        flag: flag.to_string(),
        coefficient,
    }
}

impl ReferenceTable {
    /// Build the standard reference table.
    ///
    /// Coefficients are simplified PPP estimates with the United States as
    /// the baseline.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                entry("États-Unis", "US", "🇺🇸", dec!(1.0)),
                entry("Suisse", "CH", "🇨🇭", dec!(1.25)),
                entry("Royaume-Uni", "GB", "🇬🇧", dec!(0.90)),
                entry("Allemagne", "DE", "🇩🇪", dec!(0.90)),
                entry("France", "FR", "🇫🇷", dec!(0.85)),
                entry("Belgique", "BE", "🇧🇪", dec!(0.90)),
                entry("Canada", "CA", "🇨🇦", dec!(0.95)),
                entry("Australie", "AU", "🇦🇺", dec!(1.05)),
                entry("Japon", "JP", "🇯🇵", dec!(0.85)),
                entry("Corée du Sud", "KR", "🇰🇷", dec!(0.80)),
                entry("Italie", "IT", "🇮🇹", dec!(0.80)),
                entry("Espagne", "ES", "🇪🇸", dec!(0.75)),
                entry("Chine", "CN", "🇨🇳", dec!(0.60)),
                entry("Brésil", "BR", "🇧🇷", dec!(0.45)),
                entry("Mexique", "MX", "🇲🇽", dec!(0.45)),
                entry("Russie", "RU", "🇷🇺", dec!(0.40)),
                entry("Turquie", "TR", "🇹🇷", dec!(0.35)),
                entry("Inde", "IN", "🇮🇳", dec!(0.30)),
                entry("Indonésie", "ID", "🇮🇩", dec!(0.35)),
                entry("Nigeria", "NG", "🇳🇬", dec!(0.35)),
            ],
        }
    }

    /// All entries, in table order
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    /// Look up an entry by its display name (exact match)
    pub fn get(&self, name: &str) -> Option<&CountryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All country names in ascending alphabetical order.
    ///
    /// Ordering is locale-aware for the dataset: accented characters sort
    /// with their base letter, so "États-Unis" lands with the E's.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.name.clone()).collect();
        names.sort_by_cached_key(|n| collation_key(n));
        names
    }

    /// The baseline entry (coefficient exactly 1.0), if present
    pub fn baseline(&self) -> Option<&CountryEntry> {
        self.entries.iter().find(|e| e.coefficient == Decimal::ONE)
    }

    /// Resolve the default selection for the country picker.
    ///
    /// Returns `preferred` when it exists in the table, otherwise the first
    /// name in sorted order. Keeps the UI usable even if the preferred
    /// entry were ever removed from the dataset.
    pub fn default_country(&self, preferred: &str) -> String {
        if self.get(preferred).is_some() {
            preferred.to_string()
        } else {
            self.sorted_names().into_iter().next().unwrap_or_default()
        }
    }
}

/// Collation key for sorting display names.
///
/// Lowercases and folds the accented characters used by the dataset onto
/// their base letters. A plain byte sort would push "États-Unis" past every
/// ASCII name.
fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_coefficients_strictly_positive() {
        let table = ReferenceTable::standard();
        for entry in table.entries() {
            assert!(
                entry.coefficient > Decimal::ZERO,
                "{} has non-positive coefficient {}",
                entry.name,
                entry.coefficient
            );
        }
    }

    #[test]
    fn test_exactly_one_baseline_entry() {
        let table = ReferenceTable::standard();
        let baselines: Vec<_> = table
            .entries()
            .iter()
            .filter(|e| e.coefficient == Decimal::ONE)
            .collect();
        assert_eq!(baselines.len(), 1);
        assert_eq!(baselines[0].name, BASELINE_COUNTRY);
    }

    #[test]
    fn test_names_unique() {
        let table = ReferenceTable::standard();
        let names: HashSet<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), table.entries().len());
    }

    #[test]
    fn test_sorted_names_strictly_ascending() {
        let table = ReferenceTable::standard();
        let names = table.sorted_names();
        assert_eq!(names.len(), table.entries().len());
        for pair in names.windows(2) {
            assert!(
                collation_key(&pair[0]) < collation_key(&pair[1]),
                "{:?} not strictly before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        let table = ReferenceTable::standard();
        let names = table.sorted_names();
        let pos = |name: &str| names.iter().position(|n| n == name).unwrap();

        // Brésil between Belgique and Canada
        assert!(pos("Belgique") < pos("Brésil"));
        assert!(pos("Brésil") < pos("Canada"));
        // États-Unis with the E's, not after Turquie
        assert!(pos("Espagne") < pos("États-Unis"));
        assert!(pos("États-Unis") < pos("France"));
        // Corée du Sud after Chine
        assert!(pos("Chine") < pos("Corée du Sud"));
        // Allemagne first overall
        assert_eq!(names[0], "Allemagne");
    }

    #[test]
    fn test_default_country_prefers_baseline() {
        let table = ReferenceTable::standard();
        assert_eq!(table.default_country(BASELINE_COUNTRY), BASELINE_COUNTRY);
    }

    #[test]
    fn test_default_country_falls_back_to_first_sorted() {
        let table = ReferenceTable::standard();
        assert_eq!(table.default_country("Atlantide"), "Allemagne");
    }

    #[test]
    fn test_get_is_exact_match() {
        let table = ReferenceTable::standard();
        assert!(table.get("France").is_some());
        assert!(table.get("france").is_none());
        assert!(table.get("FR").is_none());
    }

    #[test]
    fn test_baseline_lookup() {
        let table = ReferenceTable::standard();
        let baseline = table.baseline().unwrap();
        assert_eq!(baseline.name, "États-Unis");
        assert_eq!(baseline.code, "US");
    }
}
