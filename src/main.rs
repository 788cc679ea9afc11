use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process;

use konstudio::config::{Config, DEFAULT_CONFIG_PATH};
use konstudio::designs::{featured, gallery, news};
use konstudio::{Page, Source};

#[derive(Parser)]
#[command(name = "konstudio")]
#[command(about = "Render Konstudio news and gallery content", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ListingArgs {
    /// URL or path of the JSON document (defaults to the configured source)
    #[arg(long)]
    source: Option<String>,

    #[arg(long, default_value = "all")]
    filter: String,

    /// Write the markup here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full news listing with filter tabs
    News(ListingArgs),

    /// Official and fan art grids sharing one filter
    Gallery(ListingArgs),

    /// Condensed card for the latest news entry
    Featured {
        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the filter values a source offers
    Categories {
        #[arg(value_parser = ["news", "gallery"])]
        kind: String,

        #[arg(long)]
        source: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<(), String> {
    match command {
        Commands::News(args) => {
            let source = Source::parse(args.source.as_deref().unwrap_or(&config.news_source));
            let page = news::load(&source, config);
            emit_page(page, &args)
        }
        Commands::Gallery(args) => {
            let source = Source::parse(args.source.as_deref().unwrap_or(&config.gallery_source));
            let page = gallery::load(&source, config);
            emit_page(page, &args)
        }
        Commands::Featured { source, output } => {
            let source = Source::parse(source.as_deref().unwrap_or(&config.news_source));
            let mut container = featured::container();
            featured::load(&source, config, &mut container);
            write_output(&container.to_html(), output.as_ref())
        }
        Commands::Categories { kind, source } => {
            let page = match kind.as_str() {
                "gallery" => gallery::load(
                    &Source::parse(source.as_deref().unwrap_or(&config.gallery_source)),
                    config,
                ),
                _ => news::load(
                    &Source::parse(source.as_deref().unwrap_or(&config.news_source)),
                    config,
                ),
            };
            if page.is_failed() {
                return Err(format!("could not load {} data", kind));
            }
            for value in page.controls().values() {
                println!("{}", value);
            }
            Ok(())
        }
    }
}

/// Load failures already mounted the fallback message; that still prints.
fn emit_page(mut page: Page, args: &ListingArgs) -> Result<(), String> {
    if !page.is_failed() {
        page.set_filter(&args.filter)?;
    }
    write_output(&page.to_html(), args.output.as_ref())
}

fn write_output(html: &str, output: Option<&PathBuf>) -> Result<(), String> {
    match output {
        Some(path) => {
            std::fs::write(path, html).map_err(|e| format!("{}: {}", path.display(), e))?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{}", html);
            Ok(())
        }
    }
}
