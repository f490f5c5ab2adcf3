mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use typex_core::{NameRegistry, TypeCodec};

#[derive(Parser)]
#[command(
    name = "typex",
    version,
    about = "Parse, normalize and check generic type expressions",
    long_about = "typex reads and writes Java-style generic type expressions such as \
                  `Map<String, List<? extends Number>>`, resolving short aliases through a \
                  name registry."
)]
pub struct Cli {
    /// JSON registry configuration (defaults to the built-in Java registry)
    #[arg(long, global = true, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Also log to stderr at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an expression and print its canonical form
    Parse {
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Print the structural JSON form instead
        #[arg(long)]
        json: bool,
    },
    /// Read a structural JSON value and print its canonical form
    Generate {
        /// JSON file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,
    },
    /// Validate a file with one expression per line
    #[command(long_about = "Parses every line of FILE. Blank lines and lines starting with `#` \
                            are skipped. Failures are reported as `line: error` and make the \
                            command exit with a non-zero status.")]
    Check {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Print the JSON schema of the structural form
    Schema,
    /// Translate a JVM field or method descriptor into canonical form
    Descriptor {
        /// e.g. `[Ljava/lang/String;` or `(IJ)Ljava/util/List;`
        #[arg(value_name = "DESCRIPTOR", allow_hyphen_values = true)]
        descriptor: String,
    },
    /// Print the JVM descriptor of an expression's erasure
    Erase {
        #[arg(value_name = "EXPR")]
        expr: String,
    },
}

fn build_codec(registry: Option<&PathBuf>) -> Result<TypeCodec, Box<dyn std::error::Error>> {
    let registry = match registry {
        Some(path) => NameRegistry::load(path)?,
        None => NameRegistry::java_defaults(),
    };
    Ok(TypeCodec::new(Arc::new(registry)))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = typex_core::logging::init_logging("typex", cli.verbose);

    match cli.command {
        Commands::Parse { expr, json } => {
            let codec = build_codec(cli.registry.as_ref())?;
            commands::parse::run(&codec, &expr, json)
        }
        Commands::Generate { input } => {
            let codec = build_codec(cli.registry.as_ref())?;
            commands::generate::run(&codec, &input)
        }
        Commands::Check { path } => {
            let codec = build_codec(cli.registry.as_ref())?;
            commands::check::run(&codec, &path)
        }
        Commands::Schema => commands::schema::run(),
        Commands::Descriptor { descriptor } => {
            let codec = build_codec(cli.registry.as_ref())?;
            commands::descriptor::run(&codec, &descriptor)
        }
        Commands::Erase { expr } => {
            let codec = build_codec(cli.registry.as_ref())?;
            commands::descriptor::run_erase(&codec, &expr)
        }
    }
}
