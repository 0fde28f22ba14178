//! Human-readable report of a compression: the symbol table followed by summary figures.

use std::io::{self, Write};

use crate::huffman::CompressionStats;
use crate::utils::{average_code_length, display_symbol, entropy};

const RULE_WIDTH: usize = 60;

/// Writes the report of `stats` to `out`.
pub fn write_report<W: Write>(stats: &CompressionStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "Huffman Encoding Report ({})", stats.mode.level_name())?;
    writeln!(out, "Original Text Length: {} tokens", stats.token_count)?;
    writeln!(out, "Symbol Table:")?;
    writeln!(out, "Symbol | Frequency | Huffman Code | Bits Used")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for entry in &stats.entries {
        writeln!(
            out,
            "{:<10} | {:<10} | {:<10} | {}",
            display_symbol(&entry.symbol),
            entry.frequency,
            entry.code,
            entry.bits_used
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Original size (bits): {}", stats.original_bits)?;
    writeln!(out, "Compressed size (bits): {}", stats.compressed_bits)?;
    writeln!(out, "Compression ratio: {:.2}%", stats.compression_ratio())?;
    writeln!(out, "Unique symbols: {}", stats.unique_symbols)?;

    if stats.token_count > 0 {
        let distr = stats.entries.iter().map(|e| e.frequency).collect::<Vec<_>>();
        let lengths = stats.entries.iter().map(|e| e.code.len()).collect::<Vec<_>>();
        let total = stats.token_count as f64;
        writeln!(
            out,
            "Average code length: {:.3} bits/symbol (entropy {:.3})",
            average_code_length(&distr, &lengths, total),
            entropy(&distr, total)
        )?;
    }

    if let Some((symbol, freq)) = &stats.most_frequent {
        writeln!(out, "Most frequent symbol: '{}' ({} times)", display_symbol(symbol), freq)?;
    }
    if let Some((symbol, freq)) = &stats.least_frequent {
        writeln!(out, "Least frequent symbol: '{}' ({} times)", display_symbol(symbol), freq)?;
    }

    Ok(())
}

/// Renders the report of `stats` into a string.
pub fn render_report(stats: &CompressionStats) -> String {
    let mut out = Vec::new();
    // writing to a Vec never fails
    let _ = write_report(stats, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}
