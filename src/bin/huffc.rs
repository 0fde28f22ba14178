use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dsi_progress_logger::*;
use huffman_text::huffman::frequency::TokenMode;
use huffman_text::store::{compress_file, decompress_file, CompressOptions};
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Compresses text files with static Huffman coding", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increases the logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compresses each file into a .huff blob and its frequency table.
    Compress {
        #[clap(flatten)]
        files: FileArgs,

        /// Do not write the <name>_codes.txt report.
        #[arg(long)]
        no_report: bool,

        /// Do not write the <name>_tree.dot diagram.
        #[arg(long)]
        no_tree: bool,
    },
    /// Decompresses each .huff blob, reading its frequency table from <blob>.freq.json.
    Decompress {
        #[clap(flatten)]
        files: FileArgs,
    },
}

#[derive(clap::Args, Debug)]
struct FileArgs {
    /// The files to process.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// The granularity of the symbols.
    #[arg(short, long, value_enum, default_value_t = Mode::Char)]
    mode: Mode,

    /// Where the output files are written.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Char,
    Word,
}

impl From<Mode> for TokenMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Char => TokenMode::Char,
            Mode::Word => TokenMode::Word,
        }
    }
}

impl FileArgs {
    fn check(&self) -> Result<()> {
        for path in &self.paths {
            if !path.is_file() {
                bail!("File '{}' not found", path.display());
            }
        }
        if !self.output_dir.is_dir() {
            bail!("Output directory '{}' not found", self.output_dir.display());
        }
        Ok(())
    }
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut pl = ProgressLogger::default();

    match args.command {
        Command::Compress {
            files,
            no_report,
            no_tree,
        } => {
            files.check()?;
            let options = CompressOptions {
                mode: files.mode.into(),
                report: !no_report,
                tree: !no_tree,
            };

            pl.start("Compressing files...");
            for path in &files.paths {
                let written = compress_file(path, &files.output_dir, options)?;
                info!(
                    "{}: {} -> {} bits ({:.2}% saved)",
                    path.display(),
                    written.stats.original_bits,
                    written.stats.compressed_bits,
                    written.stats.compression_ratio()
                );
                pl.update();
            }
            pl.done();
        }
        Command::Decompress { files } => {
            files.check()?;

            pl.start("Decompressing files...");
            for path in &files.paths {
                decompress_file(path, &files.output_dir, files.mode.into())?;
                pl.update();
            }
            pl.done();
        }
    }

    Ok(())
}
