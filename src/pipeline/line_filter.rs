use super::PipelineConfig;

/// Drop OCR lines that are UI chrome, never real names
///
/// A line is dropped only when its trimmed content exactly equals a
/// denylist entry; comparing trimmed text subsumes the blank, single-space,
/// and form-feed variants OCR emits for empty regions. Containment is NOT
/// checked here: a line with extra characters around a denylisted word is
/// left for the row parser's word and length filtering to handle. Order is
/// preserved and nothing else is dropped at this stage.
pub fn filter_lines<'a>(ocr_text: &'a str, config: &PipelineConfig) -> Vec<&'a str> {
    ocr_text
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !config
                .chrome_lines
                .iter()
                .any(|chrome| trimmed == chrome.as_str())
        })
        .collect()
}
