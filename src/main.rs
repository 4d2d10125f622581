use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mdsite::site::{self, SiteConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Site root; relative config paths are resolved against it
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
    /// Config file (defaults to <root>/mdsite.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy static assets and generate every page
    Build {
        /// Markdown content directory
        #[arg(long)]
        content: Option<PathBuf>,
        /// Static asset directory
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,
        /// Output directory (recreated on every build)
        #[arg(long)]
        public: Option<PathBuf>,
        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print the HTML body of one markdown file
    Render { file: PathBuf },
    /// Print the title of one markdown file
    Title { file: PathBuf },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn read_markdown(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Build {
            content,
            static_dir,
            public,
            template,
        } => {
            let mut config = SiteConfig::load_for_root(&args.root, args.config.as_deref())
                .context("Failed to load site config")?;
            if let Some(dir) = content {
                config.content_dir = dir;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            if let Some(dir) = public {
                config.public_dir = dir;
            }
            if let Some(file) = template {
                config.template = file;
            }
            log::debug!("Using {config:?}");

            let report = site::build_site(&config).context("Site build failed")?;
            for page in &report.pages {
                println!("{}", page.display());
            }
        }
        Command::Render { file } => {
            let markdown = read_markdown(&file)?;
            let html = mdsite::markdown_to_html(&markdown)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
        }
        Command::Title { file } => {
            let markdown = read_markdown(&file)?;
            let title = mdsite::extract_title(&markdown)
                .with_context(|| format!("No \"# \" title line in {}", file.display()))?;
            println!("{title}");
        }
    }
    Ok(())
}
