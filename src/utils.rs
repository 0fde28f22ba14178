use std::ops::Neg;

/// Shannon entropy, in bits per symbol, of the distribution `distr` whose counts sum up to
/// `total_freq`. Zero counts are skipped.
pub fn entropy(distr: &[usize], total_freq: f64) -> f64 {
    let mut entropy = 0.0;

    for freq in distr.iter().filter(|freq| **freq > 0) {
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// Average code length, in bits per symbol, of a code whose lengths are `lengths` for a
/// distribution `distr` summing up to `total_freq`.
pub fn average_code_length(distr: &[usize], lengths: &[usize], total_freq: f64) -> f64 {
    assert_eq!(distr.len(), lengths.len(), "Distr must have same length!");

    distr
        .iter()
        .zip(lengths)
        .map(|(freq, len)| (*freq * *len) as f64)
        .sum::<f64>()
        / total_freq
}

/// Makes whitespace symbols visible, quoting them the way they would be written in a literal.
pub fn display_symbol(symbol: &str) -> String {
    if symbol.chars().all(|c| !c.is_whitespace()) {
        return symbol.to_string();
    }
    format!("'{}'", symbol.escape_default())
}
