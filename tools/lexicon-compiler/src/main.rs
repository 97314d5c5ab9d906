use anyhow::Context;
use clap::Parser;
use decoder_lexicon::LexiconStore;
use decoder_protocol::LexiconSource;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to an rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("📖 Reading JSON from {:?}...", cli.input);

    // 1. Load and validate
    let store = LexiconStore::from_json_file(&cli.input)
        .with_context(|| format!("invalid lexicon {}", cli.input.display()))?;
    let source: LexiconSource = store.to_source();

    println!(
        "⚙️  Compiling lexicon version {} with {} entries...",
        source.version,
        source.entries.len()
    );

    // 2. Serialize to RKYV
    let mut serializer = AllocSerializer::<1024>::default();
    serializer
        .serialize_value(&source)
        .map_err(|e| anyhow::anyhow!("failed to rkyv serialize: {:?}", e))?;
    let bytes = serializer.into_serializer().into_inner();

    // 3. The archive must load back
    LexiconStore::from_archive_bytes(&bytes).context("compiled archive does not load")?;

    // 4. Write Binary
    fs::write(&cli.output, &bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}
