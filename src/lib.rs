use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

pub mod corpus;
pub mod estimator;
pub mod report;
pub mod stats;

pub use corpus::Corpus;
pub use estimator::{estimate, BigramStep, Smoothing};
pub use stats::BigramStats;

pub type Token = String;
pub type Sentence = Vec<Token>;
/// `(current, next)` pair of adjacent tokens.
pub type Bigram = (Token, Token);

/// Sentence markers first, then runs of letters, numbers and `_`.
///
/// The word class leaves out combining marks, so a decomposed accent splits
/// a word (`cafe\u{301}s` gives `cafe`, `s`).
pub const TOKEN_PATTERN: &str = r"</*s>|[\p{L}\p{N}_]+";

/// The sentence scored by the exercise.
pub const TEST_SENTENCE: &str = "<s> I read a different book by Danielle </s>";

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(TOKEN_PATTERN).unwrap();
}

/// Splits a line into tokens, dropping punctuation and whitespace.
pub fn tokenize(line: &str) -> Sentence {
    TOKEN_REGEX
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Adjacent token pairs of `tokens`, in order.
pub fn bigrams(tokens: &[Token]) -> Vec<Bigram> {
    tokens
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

pub struct BigramProbabilityModel {
    stats: BigramStats,
}

impl BigramProbabilityModel {
    pub fn from_corpus(corpus: &Corpus) -> BigramProbabilityModel {
        BigramProbabilityModel {
            stats: BigramStats::from_corpus(corpus),
        }
    }

    /// Loads the training sections of `filename` and counts them.
    pub async fn from_file<P>(filename: P) -> Result<BigramProbabilityModel>
    where
        P: AsRef<Path>,
    {
        let start_time = std::time::Instant::now();
        let corpus = Corpus::from_file(filename).await?;
        let model = BigramProbabilityModel::from_corpus(&corpus);
        tracing::info!("Built model in {:?}", start_time.elapsed());
        Ok(model)
    }

    pub fn stats(&self) -> &BigramStats {
        &self.stats
    }

    pub fn compute_sentence(&self, sentence: &str, smoothing: Smoothing) -> f64 {
        self.compute_bigrams(&bigrams(&tokenize(sentence)), smoothing, |_| {})
    }

    pub fn compute_bigrams<F>(&self, bigrams: &[Bigram], smoothing: Smoothing, trace: F) -> f64
    where
        F: FnMut(&BigramStep<'_>),
    {
        estimate(bigrams, &self.stats, smoothing, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tokenizes_markers_and_words() {
        assert_eq!(
            tokenize("<s> I read a book, by Danielle. </s>"),
            vec!["<s>", "I", "read", "a", "book", "by", "Danielle", "</s>"]
        );
    }

    #[test]
    fn markers_take_priority_and_punctuation_separates() {
        assert_eq!(tokenize("<s>don't</s>"), vec!["<s>", "don", "t", "</s>"]);
        assert_eq!(tokenize("<//s> <x> snake_case 42"), vec!["<//s>", "x", "snake_case", "42"]);
        assert!(tokenize("  ,.;!  ").is_empty());
    }

    #[test]
    fn word_class_is_letters_numbers_underscore() {
        assert_eq!(tokenize("cafe\u{301}s"), vec!["cafe", "s"]);
        assert_eq!(tokenize("café x² Ⅷ 五"), vec!["café", "x²", "Ⅷ", "五"]);
    }

    #[test]
    fn bigrams_of_short_inputs() {
        assert!(bigrams(&[]).is_empty());
        assert!(bigrams(&tokenize("<s>")).is_empty());
        assert_eq!(
            bigrams(&tokenize("<s> hi </s>")),
            vec![
                ("<s>".to_string(), "hi".to_string()),
                ("hi".to_string(), "</s>".to_string())
            ]
        );
    }

    #[test]
    fn test_sentence_has_eight_bigrams() {
        assert_eq!(bigrams(&tokenize(TEST_SENTENCE)).len(), 8);
    }

    #[test]
    fn vocabulary_ignores_the_test_sentence() {
        let corpus = Corpus::from_lines(["Training Corpus", "<s> I read a book by Danielle </s>"]);
        let model = BigramProbabilityModel::from_corpus(&corpus);
        model.compute_sentence(TEST_SENTENCE, Smoothing::Laplace);
        assert_eq!(model.stats().vocab_size(), 8);
        assert_eq!(model.stats().unigram_count("different"), 0);
    }

    proptest! {
        #[test]
        fn retokenizing_joined_tokens_is_stable(
            tokens in prop::collection::vec(prop_oneof![
                Just("<s>".to_string()),
                Just("</s>".to_string()),
                "[A-Za-z0-9_]{1,8}",
            ], 0..12)
        ) {
            let once = tokenize(&tokens.join(" "));
            prop_assert_eq!(&once, &tokens);
            prop_assert_eq!(tokenize(&once.join(" ")), once);
        }
    }
}
