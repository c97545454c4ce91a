use std::fmt;

use crate::stats::BigramStats;
use crate::Bigram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    /// Maximum-likelihood estimate, `count(w1 w2) / count(w1)`.
    Unsmoothed,
    /// Add-one: `(count(w1 w2) + 1) / (count(w1) + V)`.
    Laplace,
}

impl Smoothing {
    pub fn name(&self) -> &'static str {
        match self {
            Smoothing::Unsmoothed => "unsmoothed",
            Smoothing::Laplace => "smoothed",
        }
    }
}

/// One factor of a sentence probability, reported to the trace callback.
#[derive(Debug, Clone, PartialEq)]
pub struct BigramStep<'a> {
    /// 1-based position in the bigram sequence.
    pub index: usize,
    pub current: &'a str,
    pub next: &'a str,
    pub bigram_count: u64,
    pub current_count: u64,
    pub numerator: u64,
    pub denominator: u64,
    pub probability: f64,
    pub cumulative: f64,
    pub vocab_size: usize,
    pub smoothing: Smoothing,
}

impl fmt::Display for BigramStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let smoothed = self.smoothing == Smoothing::Laplace;
        let count_note = if smoothed && self.bigram_count == 0 { " + 1" } else { "" };
        let vocab_note = if smoothed {
            format!(" + {}", self.vocab_size)
        } else {
            String::new()
        };

        writeln!(f, "Bigram {}: {} → {}", self.index, self.current, self.next)?;
        writeln!(
            f,
            "  Count({}, {}) = {}{}",
            self.current, self.next, self.bigram_count, count_note
        )?;
        writeln!(f, "  Count({}) = {}{}", self.current, self.current_count, vocab_note)?;
        writeln!(
            f,
            "  P({}|{}) = {}/{} = {:.4}",
            self.next, self.current, self.numerator, self.denominator, self.probability
        )?;
        write!(f, "  Cumulative Probability = {:.6}", self.cumulative)
    }
}

/// Returns `(numerator, denominator)` of `P(next | current)`.
///
/// An unseen conditioning word gets denominator 1 when unsmoothed, so the
/// step is `0/1` rather than undefined. Smoothed, the denominator is only 0
/// when the training corpus is empty; that step is then `1/0`, which
/// [`estimate`] turns into an infinite probability.
pub fn step_fraction(
    bigram_count: u64,
    current_count: u64,
    vocab_size: usize,
    smoothing: Smoothing,
) -> (u64, u64) {
    match smoothing {
        Smoothing::Unsmoothed => (bigram_count, current_count.max(1)),
        Smoothing::Laplace => (bigram_count + 1, current_count + vocab_size as u64),
    }
}

/// Product of `P(next | current)` over `bigrams`, in order.
///
/// `trace` sees every step with its running product. An empty sequence
/// yields 1.0 and no steps.
pub fn estimate<F>(bigrams: &[Bigram], stats: &BigramStats, smoothing: Smoothing, mut trace: F) -> f64
where
    F: FnMut(&BigramStep<'_>),
{
    let vocab_size = stats.vocab_size();
    let mut cumulative = 1.0;

    for (i, (current, next)) in bigrams.iter().enumerate() {
        let bigram_count = stats.bigram_count(current, next);
        let current_count = stats.unigram_count(current);
        let (numerator, denominator) = step_fraction(bigram_count, current_count, vocab_size, smoothing);
        let probability = numerator as f64 / denominator as f64;
        cumulative *= probability;

        let step = BigramStep {
            index: i + 1,
            current,
            next,
            bigram_count,
            current_count,
            numerator,
            denominator,
            probability,
            cumulative,
            vocab_size,
            smoothing,
        };
        tracing::debug!(?step, "{} bigram step", smoothing.name());
        trace(&step);
    }

    cumulative
}
