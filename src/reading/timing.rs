use crate::config::TimingConfig;

/// Splits trailing sentence/comma punctuation off a word.
fn trailing_punctuation(word: &str) -> (&str, Vec<char>) {
    let stem = word.trim_end_matches(|c: char| is_sentence_terminator(c) || is_comma(c));
    let punctuation = word[stem.len()..].chars().collect();
    (stem, punctuation)
}

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

fn is_comma(c: char) -> bool {
    c == ','
}

fn is_abbreviation(word: &str) -> bool {
    const ABBREVIATIONS: &[&str] = &[
        "Dr.", "Mr.", "Mrs.", "Ms.", "St.", "Jr.", "e.g.", "i.e.", "vs.", "etc.",
    ];
    ABBREVIATIONS.contains(&word)
}

fn is_decimal_number(word: &str) -> bool {
    let parts: Vec<&str> = word.split('.').collect();
    if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        let has_digit_before = parts[0].chars().all(|c| c.is_ascii_digit());
        let has_digit_after = parts[1].chars().all(|c| c.is_ascii_digit());
        has_digit_before && has_digit_after
    } else {
        false
    }
}

fn punctuation_multiplier(punctuation: char, config: &TimingConfig) -> f64 {
    match punctuation {
        '.' => config.period_multiplier,
        ',' => config.comma_multiplier,
        '?' => config.question_multiplier,
        '!' => config.exclamation_multiplier,
        _ => 1.0,
    }
}

fn max_punctuation_multiplier(punctuation_list: &[char], config: &TimingConfig) -> f64 {
    punctuation_list
        .iter()
        .map(|&p| punctuation_multiplier(p, config))
        .fold(1.0, f64::max)
}

pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

fn word_length_penalty(word: &str, config: &TimingConfig) -> f64 {
    if word.chars().count() > config.long_word_threshold {
        config.long_word_penalty
    } else {
        1.0
    }
}

/// How long a speaker at `wpm` spends on `word`, punctuation pauses included.
///
/// Stacked punctuation uses the largest multiplier, not the product.
pub fn word_duration_ms(word: &str, wpm: u32, config: &TimingConfig) -> u64 {
    let (stem, punctuation) = trailing_punctuation(word);
    let base_delay = wpm_to_milliseconds(wpm) as f64;
    let delay_ms = base_delay
        * max_punctuation_multiplier(&punctuation, config)
        * word_length_penalty(stem, config);
    delay_ms.round() as u64
}

/// Whether the word after `word` starts a new sentence.
///
/// Abbreviations (Dr., e.g.) and decimals (3.14) do not end sentences.
pub fn ends_sentence(word: &str) -> bool {
    let (_, punctuation) = trailing_punctuation(word);
    if !punctuation.iter().any(|&p| is_sentence_terminator(p)) {
        return false;
    }
    !is_abbreviation(word) && !is_decimal_number(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_precision_350() {
        // 60,000 / 350 = 171.428... → rounds to 171
        assert_eq!(wpm_to_milliseconds(350), 171);
    }

    #[test]
    fn test_wpm_to_milliseconds_precision_165() {
        // 60,000 / 165 = 363.636... → rounds to 364, truncation would give 363
        assert_eq!(wpm_to_milliseconds(165), 364);
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_does_not_divide_by_zero() {
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_trailing_punctuation_split() {
        assert_eq!(trailing_punctuation("world?!"), ("world", vec!['?', '!']));
        assert_eq!(trailing_punctuation("plain"), ("plain", vec![]));
        assert_eq!(trailing_punctuation("..."), ("", vec!['.', '.', '.']));
    }

    #[test]
    fn test_word_duration_basic() {
        let config = TimingConfig::default();
        assert_eq!(word_duration_ms("hello", 300, &config), 200);
    }

    #[test]
    fn test_word_duration_period() {
        let config = TimingConfig::default();
        // 200ms * 3.0 period multiplier
        assert_eq!(word_duration_ms("hello.", 300, &config), 600);
    }

    #[test]
    fn test_word_duration_stacking_uses_max() {
        let config = TimingConfig::default();
        assert_eq!(word_duration_ms("what,?", 300, &config), 600);
    }

    #[test]
    fn test_word_duration_long_word() {
        let config = TimingConfig::default();
        // 200ms * 1.15 long word penalty = 230
        assert_eq!(word_duration_ms("extraordinarily", 300, &config), 230);
    }

    #[test]
    fn test_word_length_penalty_ignores_punctuation() {
        let config = TimingConfig::default();
        // "tenletters" is exactly at the threshold once the comma is stripped
        assert_eq!(word_duration_ms("tenletters,", 300, &config), 300);
    }

    #[test]
    fn test_ends_sentence() {
        assert!(ends_sentence("end."));
        assert!(ends_sentence("really?!"));
        assert!(!ends_sentence("comma,"));
        assert!(!ends_sentence("word"));
    }

    #[test]
    fn test_ends_sentence_exceptions() {
        assert!(!ends_sentence("Dr."));
        assert!(!ends_sentence("e.g."));
        assert!(!ends_sentence("3.14"));
    }
}
