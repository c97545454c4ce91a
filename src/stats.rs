use std::collections::HashMap;

use crate::corpus::Corpus;

/// Bigram and unigram frequency counts over a training corpus.
///
/// Built once by [`BigramStats::from_corpus`] and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct BigramStats {
    /// Keyed by `"current next"`; tokens never contain whitespace.
    bigrams: HashMap<String, u64>,
    unigrams: HashMap<String, u64>,
    vocab_size: usize,
}

fn bigram_key(current: &str, next: &str) -> String {
    format!("{} {}", current, next)
}

impl BigramStats {
    pub fn from_corpus(corpus: &Corpus) -> BigramStats {
        let mut bigrams = HashMap::new();
        let mut unigrams = HashMap::new();

        for sentence in corpus.sentences() {
            for pair in sentence.windows(2) {
                *bigrams.entry(bigram_key(&pair[0], &pair[1])).or_insert(0) += 1;
            }
            for word in sentence {
                *unigrams.entry(word.clone()).or_insert(0) += 1;
            }
        }

        let vocab_size = unigrams.len();
        tracing::info!(
            "Counted {} distinct bigrams, vocabulary size {}",
            bigrams.len(),
            vocab_size
        );
        BigramStats {
            bigrams,
            unigrams,
            vocab_size,
        }
    }

    /// Occurrences of `current` immediately followed by `next`; 0 if unseen.
    pub fn bigram_count(&self, current: &str, next: &str) -> u64 {
        self.bigrams
            .get(&bigram_key(current, next))
            .copied()
            .unwrap_or(0)
    }

    pub fn unigram_count(&self, word: &str) -> u64 {
        self.unigrams.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct training tokens.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn total_unigrams(&self) -> u64 {
        self.unigrams.values().sum()
    }

    pub fn total_bigrams(&self) -> u64 {
        self.bigrams.values().sum()
    }
}
