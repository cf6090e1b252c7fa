use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DocumentKind;
use crate::validation::correction::clean_extracted_text;

/// Aadhaar: three groups of four digits, optionally separated by spaces or
/// hyphens.
static AADHAAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d{4}[\s-]?){2}\d{4}").unwrap());

/// Driving Licence: two-letter state code, two digits, then eleven digits,
/// with an optional separator after the fourth character.
static DL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{2}\d{2}[-\s]?\d{11}").unwrap());

/// Finds candidate identifiers of the given kind in raw extracted text.
///
/// Candidates are deduplicated by normalized form, first occurrence wins.
/// DL matching runs on misread-corrected text because OCR output rarely
/// keeps the digit block intact; Aadhaar matching runs on the raw text since
/// its pattern is digits-only.
pub fn find_candidates(kind: DocumentKind, text: &str) -> Vec<String> {
    match kind {
        DocumentKind::Aadhaar => find_aadhaar_numbers(text),
        DocumentKind::DrivingLicence => find_dl_numbers(text),
    }
}

/// Normalizes an identifier for comparison. Idempotent.
pub fn normalize(kind: DocumentKind, raw: &str) -> String {
    match kind {
        DocumentKind::Aadhaar => normalize_aadhaar(raw),
        DocumentKind::DrivingLicence => normalize_dl(raw),
    }
}

fn find_aadhaar_numbers(text: &str) -> Vec<String> {
    let mut clean: Vec<String> = Vec::new();
    for m in AADHAAR_RE.find_iter(text) {
        let digits = normalize_aadhaar(m.as_str());
        if digits.len() == 12 && !clean.contains(&digits) {
            clean.push(digits);
        }
    }
    clean
}

fn find_dl_numbers(text: &str) -> Vec<String> {
    let cleaned = clean_extracted_text(text);
    let mut matches: Vec<String> = Vec::new();
    for m in DL_RE.find_iter(&cleaned) {
        let candidate = m.as_str().trim().to_string();
        let normalized = normalize_dl(&candidate);
        if !matches.iter().any(|seen| normalize_dl(seen) == normalized) {
            matches.push(candidate);
        }
    }
    matches
}

fn normalize_aadhaar(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn normalize_dl(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_aadhaar_with_spaces_hyphens_or_neither() {
        let text = "ID 5704 5397 1532 and 8094-7196-4847 and 541309514471 end";
        let found = find_candidates(DocumentKind::Aadhaar, text);
        assert_eq!(
            found,
            vec!["570453971532", "809471964847", "541309514471"]
        );
    }

    #[test]
    fn aadhaar_duplicates_are_dropped() {
        let text = "5704 5397 1532 ... 5704-5397-1532 ... 570453971532";
        let found = find_candidates(DocumentKind::Aadhaar, text);
        assert_eq!(found, vec!["570453971532"]);
    }

    #[test]
    fn aadhaar_requires_exactly_twelve_digits() {
        // Eleven digits never match the pattern at all.
        assert!(find_candidates(DocumentKind::Aadhaar, "5704 5397 153").is_empty());
    }

    #[test]
    fn finds_dl_with_and_without_separator() {
        let text = "DL No CG10 20220007048, also GJ1520230009655";
        let found = find_candidates(DocumentKind::DrivingLicence, text);
        assert_eq!(found, vec!["CG10 20220007048", "GJ1520230009655"]);
    }

    #[test]
    fn finds_dl_despite_misread_digits() {
        // O and S misread inside the digit blocks.
        let text = "Licence CG1O 2022OOO7O48 issued";
        let found = find_candidates(DocumentKind::DrivingLicence, text);
        assert_eq!(found, vec!["CG10 20220007048"]);
    }

    #[test]
    fn dl_duplicates_collapse_across_formatting() {
        let text = "CG10 20220007048 ... CG10-20220007048 ... CG1020220007048";
        let found = find_candidates(DocumentKind::DrivingLicence, text);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn normalization_is_idempotent() {
        let aadhaar = normalize(DocumentKind::Aadhaar, "5704 5397 1532");
        assert_eq!(aadhaar, "570453971532");
        assert_eq!(normalize(DocumentKind::Aadhaar, &aadhaar), aadhaar);

        let dl = normalize(DocumentKind::DrivingLicence, "cg10 20220007048");
        assert_eq!(dl, "CG1020220007048");
        assert_eq!(normalize(DocumentKind::DrivingLicence, &dl), dl);
    }

    #[test]
    fn normalization_strips_separators_and_folds_case() {
        assert_eq!(
            normalize(DocumentKind::DrivingLicence, "gj15-2023 0009655"),
            "GJ1520230009655"
        );
        assert_eq!(normalize(DocumentKind::Aadhaar, "5704-5397-1532"), "570453971532");
    }
}
