//! proconvert CLI - convert files through a ProConverter server
//!
//! ```bash
//! proconvert tools                                   # List conversion tools
//! proconvert tools --json                            # Same, as JSON
//! proconvert convert --tool merge a.pdf b.pdf        # Merge two PDFs
//! proconvert convert -t pdf-to-word doc.pdf -o out/  # Save into out/
//! ```
//!
//! The server URL comes from `--server`, then `PROCONVERTER_URL` (a `.env`
//! file is honoured), then `http://localhost:5000`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use proconvert::{
    convert_files, parse_server_url, tool_catalogue, CliResult, ConvertOptions, DEFAULT_SERVER_URL,
};
use proconverter::{Tool, ToolCategory};

#[derive(Parser)]
#[command(name = "proconvert")]
#[command(about = "Convert files with a ProConverter server", long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available conversion tools
    Tools {
        /// Print the catalogue as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload files, convert them, and save the result
    Convert {
        /// Tool identifier (see `proconvert tools`)
        #[arg(short, long)]
        tool: Tool,

        /// Input files, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Conversion server base URL
        #[arg(short, long, env = "PROCONVERTER_URL", default_value = DEFAULT_SERVER_URL)]
        server: String,

        /// Directory for the converted file
        #[arg(short, long, env = "PROCONVERTER_OUTPUT", default_value = ".")]
        output: PathBuf,

        /// Only print the download location
        #[arg(long)]
        no_download: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // the upload controller is single-threaded; its progress timer is a local task
    let local = tokio::task::LocalSet::new();
    let result = local.run_until(run(cli.command)).await;

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Tools { json } => cmd_tools(json),

        Commands::Convert {
            tool,
            files,
            server,
            output,
            no_download,
            quiet,
        } => {
            let options = ConvertOptions {
                output_dir: output,
                download: !no_download,
                quiet,
                ..ConvertOptions::new(parse_server_url(&server)?)
            };
            cmd_convert(tool, files, &options).await
        }
    }
}

fn cmd_tools(json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&tool_catalogue())?);
        return Ok(());
    }

    for category in [ToolCategory::Pdf, ToolCategory::Office, ToolCategory::Image] {
        println!("{}", category.title());
        for tool in Tool::ALL.iter().filter(|t| t.category() == category) {
            let multi = if tool.takes_multiple_files() { " (multiple files)" } else { "" };
            println!(
                "  {:<20} {:<20} {}{}",
                tool.id(),
                tool.label(),
                tool.accept_attr(),
                multi
            );
        }
        println!();
    }
    Ok(())
}

async fn cmd_convert(tool: Tool, files: Vec<PathBuf>, options: &ConvertOptions) -> CliResult<()> {
    eprintln!("📄 {} → {} ({} file(s))", tool.label(), options.server, files.len());

    let report = convert_files(tool, files, options).await?;

    match report.saved_to {
        Some(path) => eprintln!("💾 Saved to: {}", path.display()),
        None => println!("{}", report.download.url),
    }
    Ok(())
}
