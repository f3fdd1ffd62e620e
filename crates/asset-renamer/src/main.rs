use camino::Utf8Path;
use clap::builder::{styling::AnsiColor, Styles};
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};
use utils::config::{load_or_create_config, resolve_and_persist_basename};

mod commands;
mod utils;

use commands::*;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum VerbosityLevel {
    /// Show errors and above
    Error,
    /// Show warnings and above
    Warning,
    /// Show info messages and above
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace
    Trace,
}

impl From<VerbosityLevel> for Level {
    fn from(level: VerbosityLevel) -> Self {
        match level {
            VerbosityLevel::Error => Level::ERROR,
            VerbosityLevel::Warning => Level::WARN,
            VerbosityLevel::Info => Level::INFO,
            VerbosityLevel::Debug => Level::DEBUG,
            VerbosityLevel::Trace => Level::TRACE,
        }
    }
}

impl VerbosityLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        LevelFilter::from_level((*self).into())
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = cli_styles())]
struct Args {
    /// Set the verbosity level
    #[arg(short = 'L', long, value_enum, default_value_t = VerbosityLevel::Info)]
    verbosity: VerbosityLevel,

    /// Optional path to a config file (TOML). Defaults to `asset-renamer.toml` next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Basename folded into asset names, e.g. the rig name (overrides config and is saved to it)
    #[arg(short, long, global = true)]
    basename: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of one or more asset names
    #[command(visible_alias = "f")]
    Format {
        /// Asset type, e.g. 'Animation', 'Texture2D' or 'skeletal_mesh'
        #[arg(short = 't', long)]
        asset_type: Option<String>,

        /// Current asset names
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
    /// Build a rename plan for an asset listing
    ///
    /// Reads CSV rows with `asset_type,name` columns from the input file or
    /// stdin and prints the canonical name of each asset.
    #[command(visible_alias = "b")]
    Batch {
        /// Path to the CSV asset listing (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Only rename assets whose current name matches this regex
        #[arg(
            short = 'x',
            long,
            value_name = "REGEX",
            help = "Only rename assets whose current name matches this regex (case-insensitive by default; use (?-i) to disable)"
        )]
        pattern: Option<String>,

        /// Leave out assets that already have their canonical name
        #[arg(long)]
        changed_only: bool,

        /// Output format
        #[arg(short = 'F', long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Derive a basename from a skeleton object path or a source file
    #[command(visible_alias = "bn", group(ArgGroup::new("source").required(true)))]
    Basename {
        /// Skeleton object path, e.g. /Game/Characters/Zombie/Sk_Zombie
        #[arg(long, group = "source")]
        skeleton: Option<String>,

        /// Mesh source file, e.g. C:/mocap/Zombie.fbx
        #[arg(long, group = "source")]
        file: Option<String>,
    },
    /// List the rename rules and texture channels
    #[command(visible_alias = "r")]
    Rules,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion | ErrorKind::MissingSubcommand
            ) {
                e.print()?;
                return Ok(());
            } else {
                e.exit();
            }
        }
    };

    initialize_tracing(args.verbosity)?;

    let (mut config, resolved_path) =
        load_or_create_config(args.config.as_deref().map(Utf8Path::new))?;
    tracing::debug!("using config {}", resolved_path);

    match args.command {
        Commands::Format { asset_type, names } => {
            let basename =
                resolve_and_persist_basename(&mut config, resolved_path.as_path(), args.basename)?;
            format(FormatArgs {
                names,
                asset_type: asset_type.or_else(|| config.asset_type.clone()),
                basename,
            })
        }
        Commands::Batch {
            input,
            pattern,
            changed_only,
            format,
        } => {
            let basename =
                resolve_and_persist_basename(&mut config, resolved_path.as_path(), args.basename)?;
            batch(BatchArgs {
                input,
                basename,
                pattern,
                changed_only,
                format: config.resolve_output_format(format),
            })
        }
        Commands::Basename { skeleton, file } => {
            let source = match (skeleton, file) {
                (Some(path), _) => BasenameSource::Skeleton(path),
                (None, Some(path)) => BasenameSource::File(path),
                (None, None) => return Err(eyre::eyre!("either --skeleton or --file is required")),
            };
            basename(source)
        }
        Commands::Rules => {
            print_rules();
            Ok(())
        }
    }
}

fn initialize_tracing(verbosity: VerbosityLevel) -> eyre::Result<()> {
    let common_format = fmt::format()
        .with_ansi(true)
        .with_level(true)
        .with_source_location(false)
        .with_line_number(false)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::time());

    // Names go to stdout, so every log line is written to stderr.
    // info/debug/trace: shown when verbosity allows
    let info_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(common_format.clone())
        .with_filter(filter::filter_fn(move |metadata| {
            let level = *metadata.level();
            match verbosity {
                VerbosityLevel::Error | VerbosityLevel::Warning => false,
                VerbosityLevel::Info => level == Level::INFO,
                VerbosityLevel::Debug => level == Level::INFO || level == Level::DEBUG,
                VerbosityLevel::Trace => level != Level::WARN && level != Level::ERROR,
            }
        }));

    // warn/error: shown for every verbosity but Error, which keeps only errors
    let diagnostics_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(common_format)
        .with_filter(filter::filter_fn(move |metadata| {
            let level = *metadata.level();
            match verbosity {
                VerbosityLevel::Error => level == Level::ERROR,
                _ => level == Level::WARN || level == Level::ERROR,
            }
        }));

    tracing_subscriber::registry()
        .with(info_layer)
        .with(diagnostics_layer)
        .with(verbosity.to_level_filter())
        .try_init()?;
    Ok(())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Magenta.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_format_command() {
        let args = Args::try_parse_from([
            "asset-renamer",
            "format",
            "-t",
            "Animation",
            "-b",
            "Zombie",
            "AnimZombieAttack00",
            "Zombie Walk.fbx",
        ])
        .unwrap();

        assert_eq!(args.basename.as_deref(), Some("Zombie"));
        match args.command {
            Commands::Format { asset_type, names } => {
                assert_eq!(asset_type.as_deref(), Some("Animation"));
                assert_eq!(names, vec!["AnimZombieAttack00", "Zombie Walk.fbx"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_basename_requires_a_source() {
        assert!(Args::try_parse_from(["asset-renamer", "basename"]).is_err());
        assert!(Args::try_parse_from([
            "asset-renamer",
            "basename",
            "--skeleton",
            "/Game/Sk_Zombie",
            "--file",
            "Zombie.fbx",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_batch_format() {
        let args =
            Args::try_parse_from(["asset-renamer", "b", "-F", "json", "--changed-only"]).unwrap();
        match args.command {
            Commands::Batch {
                format,
                changed_only,
                input,
                ..
            } => {
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(changed_only);
                assert!(input.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
