//! Formatting for the exercise report printed by the binary.

use std::io::{self, Write};

use crate::{bigrams, tokenize, Bigram, BigramProbabilityModel, Smoothing};

/// Renders bigrams as `[('<s>', 'I'), ('I', 'read')]`.
pub fn bigram_list(bigrams: &[Bigram]) -> String {
    let items: Vec<String> = bigrams
        .iter()
        .map(|(current, next)| format!("('{}', '{}')", current, next))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Rewrites a Rust exponent (`e-7`, `e16`) as a signed two-digit one
/// (`e-07`, `e+16`). Values without an exponent pass through.
fn pad_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Scientific notation with `precision` fractional digits and a signed,
/// two-digit exponent (`1.234568e-07`).
pub fn scientific(value: f64, precision: usize) -> String {
    pad_exponent(format!("{:.*e}", precision, value))
}

/// Shortest round-trip form, switching to an exponent below 1e-4 and from
/// 1e16 up (`0.5`, `1.6726012650301511e-06`).
pub fn raw(value: f64) -> String {
    pad_exponent(format!("{:?}", value))
}

pub fn unsmoothed_summary(probability: f64) -> String {
    format!(
        "Unsmoothed Bigram Probability: {:.6} (≈ {})",
        probability,
        raw(probability)
    )
}

pub fn smoothed_summary(probability: f64) -> String {
    format!(
        "Smoothed (Laplace) Bigram Probability: {} (≈ {})",
        scientific(probability, 6),
        raw(probability)
    )
}

fn write_section<W: Write>(
    out: &mut W,
    model: &BigramProbabilityModel,
    test_bigrams: &[Bigram],
    smoothing: Smoothing,
) -> io::Result<f64> {
    writeln!(out, "\nCalculating {} probabilities:", smoothing.name())?;
    let mut written = Ok(());
    let probability = model.compute_bigrams(test_bigrams, smoothing, |step| {
        if written.is_ok() {
            written = writeln!(out, "{}\n", step);
        }
    });
    written.map(|_| probability)
}

/// Writes the full report for `sentence`: its bigrams, both traces and the
/// two summary lines. Returns `(unsmoothed, smoothed)`.
pub fn write_report<W: Write>(
    out: &mut W,
    model: &BigramProbabilityModel,
    sentence: &str,
) -> io::Result<(f64, f64)> {
    let test_bigrams = bigrams(&tokenize(sentence));
    writeln!(out, "Test sentence: {}", sentence)?;
    writeln!(out, "Identified bigrams: {}", bigram_list(&test_bigrams))?;

    let unsmoothed = write_section(out, model, &test_bigrams, Smoothing::Unsmoothed)?;
    let smoothed = write_section(out, model, &test_bigrams, Smoothing::Laplace)?;

    writeln!(out, "{}", unsmoothed_summary(unsmoothed))?;
    writeln!(out, "{}", smoothed_summary(smoothed))?;
    Ok((unsmoothed, smoothed))
}
