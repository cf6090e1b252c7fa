use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kinds of identity documents the pipeline can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Aadhaar,
    DrivingLicence,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Aadhaar => "Aadhaar card",
            DocumentKind::DrivingLicence => "Driving Licence",
        }
    }
}

/// How the raw text was obtained from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// The PDF's embedded text layer was read directly.
    Native,
    /// Pages were rasterized and run through OCR.
    Ocr,
}

/// Raw text pulled out of a document plus the method that produced it.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub method: ExtractionMethod,
}

/// One candidate identifier found in the text, with its lookup result.
/// The identifier is stored in normalized form.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifierCheck {
    pub identifier: String,
    pub in_reference_store: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// At least one candidate identifier is present in the reference store.
    Valid,
    /// Candidates were found but none is in the reference store.
    NotInStore,
    /// Text was extracted but no identifier matched the pattern.
    NoMatch,
    /// Nothing could be extracted from the document.
    NoText,
}

/// Outcome of running the full pipeline over one document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub kind: DocumentKind,
    pub method: ExtractionMethod,
    pub outcome: ValidationOutcome,
    pub checks: Vec<IdentifierCheck>,
    pub checked_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Human-readable summary, one line per checked identifier.
    pub fn message(&self) -> String {
        match self.outcome {
            ValidationOutcome::NoText => {
                "Could not extract any text from the document. The file might be empty or unreadable."
                    .to_string()
            }
            ValidationOutcome::NoMatch => format!(
                "No valid {} number could be found in the provided PDF.",
                self.kind.label()
            ),
            ValidationOutcome::Valid | ValidationOutcome::NotInStore => self
                .checks
                .iter()
                .map(|check| {
                    if check.in_reference_store {
                        format!(
                            "{} with number {} is valid and found in the database.",
                            self.kind.label(),
                            check.identifier
                        )
                    } else {
                        format!(
                            "{} with number {} is not found in the database.",
                            self.kind.label(),
                            check.identifier
                        )
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: ValidationOutcome, checks: Vec<IdentifierCheck>) -> ValidationReport {
        ValidationReport {
            kind: DocumentKind::Aadhaar,
            method: ExtractionMethod::Native,
            outcome,
            checks,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn message_for_valid_identifier() {
        let report = report(
            ValidationOutcome::Valid,
            vec![IdentifierCheck {
                identifier: "570453971532".to_string(),
                in_reference_store: true,
            }],
        );
        assert_eq!(
            report.message(),
            "Aadhaar card with number 570453971532 is valid and found in the database."
        );
    }

    #[test]
    fn message_for_unknown_identifier() {
        let report = report(
            ValidationOutcome::NotInStore,
            vec![IdentifierCheck {
                identifier: "111122223333".to_string(),
                in_reference_store: false,
            }],
        );
        assert_eq!(
            report.message(),
            "Aadhaar card with number 111122223333 is not found in the database."
        );
    }

    #[test]
    fn message_lists_every_check() {
        let report = report(
            ValidationOutcome::Valid,
            vec![
                IdentifierCheck {
                    identifier: "570453971532".to_string(),
                    in_reference_store: true,
                },
                IdentifierCheck {
                    identifier: "111122223333".to_string(),
                    in_reference_store: false,
                },
            ],
        );
        let message = report.message();
        assert_eq!(message.lines().count(), 2);
        assert!(message.contains("is valid and found"));
        assert!(message.contains("is not found"));
    }

    #[test]
    fn message_for_no_match() {
        let report = report(ValidationOutcome::NoMatch, Vec::new());
        assert_eq!(
            report.message(),
            "No valid Aadhaar card number could be found in the provided PDF."
        );
    }

    #[test]
    fn report_serializes_with_snake_case_tags() {
        let report = report(ValidationOutcome::NoText, Vec::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "aadhaar");
        assert_eq!(json["method"], "native");
        assert_eq!(json["outcome"], "no_text");
    }
}
