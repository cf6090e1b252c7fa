use std::path::Path;

use chrono::Utc;
use log::info;

use crate::models::{
    DocumentKind, ExtractionMethod, IdentifierCheck, ValidationOutcome, ValidationReport,
};
use crate::processing::{ExtractionConfig, TextExtractor};
use crate::utils::DocError;
use crate::validation::{patterns, ReferenceStore};

/// Orchestrates the full pipeline: hybrid text extraction, identifier
/// matching and the reference-store lookup.
pub struct DocumentValidator {
    extractor: TextExtractor,
}

impl DocumentValidator {
    pub fn new(config: ExtractionConfig) -> Self {
        DocumentValidator {
            extractor: TextExtractor::new(config),
        }
    }

    pub fn validate(
        &self,
        pdf_path: &Path,
        kind: DocumentKind,
        store: &ReferenceStore,
    ) -> Result<ValidationReport, DocError> {
        let extracted = self.extractor.extract(pdf_path)?;
        self.evaluate_text(kind, &extracted.text, extracted.method, store)
    }

    /// Runs matching and reference lookup over already-extracted text.
    pub fn evaluate_text(
        &self,
        kind: DocumentKind,
        text: &str,
        method: ExtractionMethod,
        store: &ReferenceStore,
    ) -> Result<ValidationReport, DocError> {
        if text.trim().is_empty() {
            return Ok(self.report(kind, method, ValidationOutcome::NoText, Vec::new()));
        }

        let candidates = patterns::find_candidates(kind, text);
        if candidates.is_empty() {
            info!("no {} pattern matched in the extracted text", kind.label());
            return Ok(self.report(kind, method, ValidationOutcome::NoMatch, Vec::new()));
        }

        let mut checks = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let identifier = patterns::normalize(kind, candidate);
            let in_reference_store = store.contains(kind, &identifier)?;
            info!(
                "{} {} the reference store",
                identifier,
                if in_reference_store {
                    "found in"
                } else {
                    "missing from"
                }
            );
            checks.push(IdentifierCheck {
                identifier,
                in_reference_store,
            });
        }

        let outcome = if checks.iter().any(|c| c.in_reference_store) {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::NotInStore
        };

        Ok(self.report(kind, method, outcome, checks))
    }

    fn report(
        &self,
        kind: DocumentKind,
        method: ExtractionMethod,
        outcome: ValidationOutcome,
        checks: Vec<IdentifierCheck>,
    ) -> ValidationReport {
        ValidationReport {
            kind,
            method,
            outcome,
            checks,
            checked_at: Utc::now(),
        }
    }
}
