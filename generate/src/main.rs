// To regenerate the tables, run the following in the repo root:
//
// $ cargo run --manifest-path generate/Cargo.toml -- \
//       --header ../include/LaTeXInput.h --data ../win32/LaTeXInputData.h
//
// Pass `--rows` with a tab separated dump of the Unicode Input table to
// refresh latex_map.json and emoji_map.json first.

use anyhow::{Context, Result};
use clap::Parser;
use latex_input::{
    build_dataset, header_block, load_map, read_file, region, save_map, source_comments,
    table_regions, update_file, Charset, DatasetConfig, InputMap, Layout, SourceMaps, EMOJI,
    LATEX,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `Layout::LookupOnly` drops the first byte and separator of each stored
/// sequence.
const LAYOUT: Layout = Layout::Full;

#[derive(Parser)]
#[command(about = "Generate the LaTeX and emoji input sequence tables")]
struct Args {
    /// Tab separated table rows: code, character, sequences, name.
    #[arg(long)]
    rows: Option<PathBuf>,

    #[arg(long, default_value = "latex_map.json")]
    latex_map: PathBuf,

    #[arg(long, default_value = "emoji_map.json")]
    emoji_map: PathBuf,

    #[arg(long, default_value = "../include/LaTeXInput.h")]
    header: PathBuf,

    #[arg(long, default_value = "../win32/LaTeXInputData.h")]
    data: PathBuf,

    /// Version of the documentation the rows were taken from.
    #[arg(long)]
    source_version: Option<String>,

    /// Where the documentation lives.
    #[arg(long)]
    source_link: Option<String>,

    /// Only regenerate the header.
    #[arg(long)]
    skip_data: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("latex_input=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let (latex_map, emoji_map) = match &args.rows {
        Some(rows) => {
            let text = fs::read_to_string(rows)
                .with_context(|| format!("failed to read {}", rows.display()))?;
            let maps = SourceMaps::parse_rows(&text)?;
            save_map(&args.latex_map, &maps.latex)?;
            save_map(&args.emoji_map, &maps.emoji)?;
            (maps.latex, maps.emoji)
        }
        None => (load_map(&args.latex_map)?, load_map(&args.emoji_map)?),
    };
    info!(
        latex = latex_map.len(),
        emoji = emoji_map.len(),
        "Loaded input sequences"
    );

    // keep the comments of the last scrape unless new ones are given
    let previous = read_file(&args.header)?;
    let (version, link) = source_comments(&region(&previous, "//")?);
    let version = args.source_version.as_deref().or(version);
    let link = args.source_link.as_deref().or(link);

    let charset = Charset::build(latex_map.keys(), emoji_map.keys())?;
    let header = header_block(version, link, &latex_map, &emoji_map, &charset)?;
    update_file(&args.header, "//", header.as_str())?;

    if !args.skip_data {
        update_data(&args.data, &LATEX, &latex_map)?;
        update_data(&args.data, &EMOJI, &emoji_map)?;
    }
    Ok(())
}

fn update_data(path: &Path, config: &DatasetConfig, map: &InputMap) -> Result<()> {
    let table = build_dataset(config, map, LAYOUT)
        .with_context(|| format!("failed to build the {} table", config.name))?;
    let regions = table_regions(&table)?;
    update_file(path, &format!("//{} hash", config.name), regions.hash.as_str())?;
    update_file(path, &format!("//{} sequences", config.name), regions.sequences.as_str())?;
    Ok(())
}
