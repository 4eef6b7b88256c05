use almanac::{AppConfig, CalendarBuilder, CalendarError, FontSource, Variant};
use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;

/// Generates a twelve-page printable calendar as a PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Calendar year [default: current year]
    #[arg(long)]
    year: Option<i32>,

    /// Annotation file with one `YYYY.MM.DD,Label` record per line [default: dates.csv]
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Output PDF path [default: calendar.pdf]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Body font: `builtin`, a Standard-14 name, or a TrueType file
    #[arg(long)]
    font: Option<FontSource>,

    /// Month title font: `builtin`, a Standard-14 name, or a TrueType file
    #[arg(long)]
    display_font: Option<FontSource>,

    /// Page layout [default: advanced]
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `almanac_layout=trace`
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn merge_into(self, mut config: AppConfig) -> AppConfig {
        if self.year.is_some() {
            config.year = self.year;
        }
        if self.annotations.is_some() {
            config.annotations_path = self.annotations;
        }
        if self.output.is_some() {
            config.output_path = self.output;
        }
        if let Some(font) = self.font {
            config.font = font;
        }
        if let Some(font) = self.display_font {
            config.display_font = font;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        config
    }
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("almanac=info"));
    if let Some(level) = level {
        // A bare level applies to every almanac crate.
        let filter = if level.contains('=') {
            level.to_string()
        } else {
            format!("almanac={level}")
        };
        builder.parse_filters(&filter);
    }
    builder.init();
}

fn main() -> Result<(), CalendarError> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let file_config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let config = args.merge_into(file_config);

    let year = config.year.unwrap_or_else(|| chrono::Local::now().year());
    let output = config.output_path();
    log::info!("Generating {:?} calendar for {}", config.variant, year);

    let calendar = CalendarBuilder::from_config(&config, year)?.build()?;
    calendar.write_to_file(&output)?;

    println!("Generated {}", output.display());
    Ok(())
}
