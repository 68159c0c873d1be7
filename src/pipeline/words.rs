use super::PipelineConfig;

/// Normalize the raw name portion of one OCR line
///
/// Splits on whitespace and decides token by token what survives:
/// - email-like tokens (containing both `@` and `.`) are kept verbatim
/// - other tokens are stripped to alphanumerics, `-` and `_`
/// - cleaned tokens longer than 2 chars are dropped when they contain a
///   noise-word substring, otherwise capitalized and kept
/// - exactly-2-char tokens are kept unmodified only when they are not all
///   lowercase AND the original name had at most 2 words; this keeps real
///   initials pairs like "JW" while suppressing the 2-letter fragments a
///   thumbnail initials badge leaves inside longer OCR'd names
/// - 1-char tokens and failing 2-char tokens are dropped
///
/// The word count used by the initials rule is taken from the original
/// split, before any token is discarded.
pub fn normalize_name(raw: &str, config: &PipelineConfig) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let num_words = tokens.len();

    let mut kept: Vec<String> = Vec::new();
    for token in tokens {
        if token.contains('@') && token.contains('.') {
            // Email address, punctuation is load-bearing
            kept.push(token.to_string());
            continue;
        }

        let cleaned: String = token
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        let len = cleaned.chars().count();

        if len > 2 {
            if config.noise_words.iter().any(|noise| cleaned.contains(noise.as_str())) {
                continue;
            }
            kept.push(capitalize(&cleaned));
        } else if len == 2 && !is_all_lowercase(&cleaned) && num_words <= 2 {
            kept.push(cleaned);
        }
        // 1-char tokens and rejected 2-char tokens are OCR artifacts
    }

    kept.join(" ")
}

/// First character uppercased, the rest lowercased
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_all_lowercase(word: &str) -> bool {
    word.chars().all(|c| c.is_lowercase())
}
