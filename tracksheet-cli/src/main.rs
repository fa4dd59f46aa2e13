use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tracksheet::{HeaderBuilder, LayoutConstants, SummaryFont, TrackListBuilder};

/// Render a one-image summary of a music library.
#[derive(Parser, Debug)]
#[command(name = "tracksheet", version)]
struct Cli {
    /// Username shown in the header as "@username".
    username: String,

    /// Path to the avatar image pasted next to the username.
    icon_path: PathBuf,

    /// Directory scanned (non-recursively) for .m4a files; also receives
    /// the summary.png output.
    music_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let constants = LayoutConstants::default();
    constants.validate()?;
    let font = SummaryFont::locate(&constants)?;

    let header = HeaderBuilder::new(&constants, &font).build(&cli.username, &cli.icon_path)?;
    let track_list = TrackListBuilder::new(&constants, &font).build(&cli.music_dir)?;
    let summary = tracksheet::assemble(header, track_list, constants.background);
    let out_path = tracksheet::write_summary(&summary, &cli.music_dir, &constants.output_file_name)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
