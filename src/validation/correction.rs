/// Replaces characters commonly misread during text extraction.
///
/// OCR output for identifier fields routinely confuses letters for the
/// digits they resemble. The substitution set covers the confusions that
/// actually show up in scanned Indian identity documents; the input is
/// uppercased first so lowercase misreads are caught by the same table.
pub fn clean_extracted_text(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| match c {
            'O' => '0',
            'I' | '|' => '1',
            'S' => '5',
            'B' => '8',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_common_misreads() {
        assert_eq!(clean_extracted_text("CG1O 2O22OOO7O48"), "CG10 20220007048");
        assert_eq!(clean_extracted_text("GJ|5 2023OOO9655"), "GJ15 20230009655");
    }

    #[test]
    fn uppercases_before_substitution() {
        assert_eq!(clean_extracted_text("cg1o"), "CG10");
        assert_eq!(clean_extracted_text("is"), "15");
    }

    #[test]
    fn cleanup_is_idempotent() {
        let once = clean_extracted_text("Licence No: MH1O-2O11OOI2333");
        let twice = clean_extracted_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_digits_and_other_letters_alone() {
        assert_eq!(clean_extracted_text("KA01 20190001111"), "KA01 20190001111");
    }
}
