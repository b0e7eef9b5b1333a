//! Word counter and readability estimate.

use serde::Serialize;

const READING_WPM: usize = 200;
const SPEAKING_WPM: usize = 130;

/// Syllables per word assumed by the readability estimate.
const AVG_SYLLABLES_PER_WORD: f64 = 1.5;

/// Flesch reading ease score and its band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    /// 0-100, higher is easier.
    pub score: u32,
    pub level: &'static str,
}

/// Counts derived from a block of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// One decimal.
    pub average_words_per_sentence: f64,
    /// Minutes, rounded up.
    pub reading_time: usize,
    /// Minutes, rounded up.
    pub speaking_time: usize,
    pub readability: Readability,
}

/// Analyze `text`.
pub fn analyze(text: &str) -> TextStats {
    let blank = text.trim().is_empty();

    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let words = text.split_whitespace().count();
    let sentences = if blank { 0 } else { count_sentences(text) };
    let paragraphs = if blank { 0 } else { count_paragraphs(text) };

    let average_words_per_sentence = if sentences > 0 {
        (words as f64 / sentences as f64 * 10.0).round() / 10.0
    } else {
        0.0
    };

    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        average_words_per_sentence,
        reading_time: words.div_ceil(READING_WPM),
        speaking_time: words.div_ceil(SPEAKING_WPM),
        readability: readability(words, sentences),
    }
}

/// Non-blank runs between sentence terminators.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Groups of non-blank lines separated by blank lines.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }
    count
}

fn readability(words: usize, sentences: usize) -> Readability {
    if words == 0 || sentences == 0 {
        return Readability {
            score: 0,
            level: "N/A",
        };
    }

    let words_per_sentence = words as f64 / sentences as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * AVG_SYLLABLES_PER_WORD;

    let level = match score {
        s if s >= 90.0 => "Very Easy",
        s if s >= 80.0 => "Easy",
        s if s >= 70.0 => "Fairly Easy",
        s if s >= 60.0 => "Standard",
        s if s >= 50.0 => "Fairly Difficult",
        s if s >= 30.0 => "Difficult",
        _ => "Very Difficult",
    };

    Readability {
        score: score.round().clamp(0.0, 100.0) as u32,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = analyze("   \n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.reading_time, 0);
        assert_eq!(stats.readability.level, "N/A");
    }

    #[test]
    fn test_basic_counts() {
        let stats = analyze("Hello world. How are you?\n\nFine!");
        assert_eq!(stats.characters, 32);
        assert_eq!(stats.characters_no_spaces, 26);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.average_words_per_sentence, 2.0);
        assert_eq!(stats.reading_time, 1);
        assert_eq!(stats.speaking_time, 1);
    }

    #[test]
    fn test_repeated_terminators_count_once() {
        assert_eq!(analyze("Wait... what?!").sentences, 2);
    }

    #[test]
    fn test_whitespace_only_line_separates_paragraphs() {
        assert_eq!(analyze("one\n  \t\ntwo\nstill two").paragraphs, 2);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        let stats = analyze(&text);
        assert_eq!(stats.reading_time, 2);
        assert_eq!(stats.speaking_time, 2);
    }

    #[test]
    fn test_readability() {
        // 2 words per sentence: 206.835 - 2.03 - 126.9 = 77.905
        let stats = analyze("Go now. Come back.");
        assert_eq!(stats.readability.score, 78);
        assert_eq!(stats.readability.level, "Fairly Easy");

        let long = format!("{}.", "word ".repeat(100));
        let stats = analyze(&long);
        assert_eq!(stats.readability.score, 0);
        assert_eq!(stats.readability.level, "Very Difficult");
    }
}
