use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File as AsyncFile;
use tokio::io::AsyncBufReadExt;

use crate::{tokenize, Sentence};

const TRAINING_MARKER: &str = "Training Corpus";
const TEST_MARKER: &str = "Calculate sentence probability";
const COMMENT_PREFIX: char = '~';

/// Tokenized training sentences, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Reads the training sections of an exercise file.
    ///
    /// Everything between a `Training Corpus` line and the next
    /// `Calculate sentence probability` line is a sentence, one per line,
    /// except blank lines and `~` comments.
    pub async fn from_file<P>(filename: P) -> Result<Corpus>
    where
        P: AsRef<Path>,
    {
        let path = filename.as_ref();
        let file = AsyncFile::open(path)
            .await
            .with_context(|| format!("cannot open training data {}", path.display()))?;
        let reader = tokio::io::BufReader::new(file);
        let mut lines = reader.lines();

        let mut raw = Vec::new();
        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| format!("cannot read training data {}", path.display()))?
        {
            raw.push(line);
        }

        let corpus = Corpus::from_lines(raw);
        tracing::info!(
            "Read {} training sentences ({} tokens) from {}",
            corpus.len(),
            corpus.token_count(),
            path.display()
        );
        Ok(corpus)
    }

    pub fn from_lines<I, S>(lines: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sentences = Vec::new();
        let mut in_training = false;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with(TRAINING_MARKER) {
                in_training = true;
                continue;
            }
            // The test marker closes the section before the line itself is considered.
            if line.starts_with(TEST_MARKER) {
                in_training = false;
            }
            if !in_training || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let tokens = tokenize(line);
            if tokens.is_empty() {
                tracing::debug!("Skipping line with no tokens: {:?}", line);
                continue;
            }
            sentences.push(tokens);
        }

        Corpus { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}
