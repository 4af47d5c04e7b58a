use anyhow::Result;
use clap::Parser;
use rekordbox_exporter::{ExportConfig, ExportPipeline};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rekordbox-exporter")]
#[command(about = "Convert playlists in a Rekordbox library XML to .m3u8 playlists", long_about = None)]
struct Args {
    /// Path to the library XML file
    xml: String,

    /// Path to create the playlist files at
    #[arg(short = 'o', long = "output_folder", default_value = ".")]
    output_folder: String,

    /// List of playlists to convert (CSV)
    #[arg(short = 'p', long = "playlists", value_delimiter = ',')]
    playlists: Vec<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // The output folder must already exist; checked before any parsing
    let output_folder = PathBuf::from(shellexpand::tilde(&args.output_folder).as_ref());
    if !output_folder.is_dir() {
        println!("Error: The path {} is not a folder", output_folder.display());
        std::process::exit(1);
    }

    // Expand ~ in the library path
    let xml_path = shellexpand::tilde(&args.xml);

    log::info!("Loading Rekordbox library...");
    let library = rekordbox_exporter::rekordbox::parse_library(Path::new(xml_path.as_ref()))?;

    log::info!(
        "Library loaded: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    let mut config = ExportConfig::new(output_folder);

    // Apply playlist filter if specified
    if !args.playlists.is_empty() {
        log::info!(
            "Filtering to {} playlist(s): {:?}",
            args.playlists.len(),
            args.playlists
        );
        config = config.with_playlists(args.playlists);
    }

    let pipeline = ExportPipeline::new(config);
    let written = pipeline.export(&library)?;

    log::info!("Conversion completed: {} playlist file(s)", written.len());

    Ok(())
}
