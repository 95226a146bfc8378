use clap::{Parser, Subcommand};
use inkpress::{config, listing, manifest, output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(about = "Static-site content pipeline for developer blogs")]
#[command(long_about = "\
Static-site content pipeline for developer blogs

Your filesystem is the content database. Each category's .mdx files live
under the content root, with TOML front matter between +++ fences. The
file path is the canonical identity: extension stripped, separators
normalized to forward slashes.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── post/                        # Posts category
  │   ├── welcome.mdx              # → /post/welcome
  │   └── guides/
  │       └── setup.mdx            # → /post/guides/setup
  └── snippets/                    # Snippets category
      └── use-debounce.mdx         # → /snippets/use-debounce

Metadata contracts (presence is the test, not truthiness):
  posts:    title, summary, publishedAt, readTime
  snippets: title, snippetCount, subtitle, image

Items missing required fields are skipped with a warning, never fatal.
A missing content directory means 'no content yet', not an error.

Run 'inkpress gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (listing manifest)
    #[arg(long, default_value = ".inkpress-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directories into a listing manifest
    Scan,
    /// Write sitemap, robots and route manifests from the listing
    Emit,
    /// Run the full pipeline: scan → emit
    Build,
    /// Validate content without writing anything
    Check,
    /// Print one page of a category listing
    List {
        /// Category name (e.g. posts, snippets)
        category: String,
        /// 1-based page number; malformed values fall back to 1
        #[arg(long)]
        page: Option<String>,
        /// Page size; malformed values fall back to the category default
        #[arg(long)]
        limit: Option<String>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();
    let today = chrono::Utc::now().date_naive();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_listing(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest, today);
        }
        Command::Emit => {
            let manifest = read_listing(&cli.temp_dir)?;
            let entries = manifest::sitemap_entries(&manifest, today);
            manifest::emit(&manifest, &cli.output, today)?;
            output::print_emit_output(&manifest, &entries);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_listing(&cli.temp_dir, &manifest)?;
            output::print_scan_output(&manifest, today);

            println!("==> Stage 2: Emitting manifests → {}", cli.output.display());
            let entries = manifest::sitemap_entries(&manifest, today);
            manifest::emit(&manifest, &cli.output, today)?;
            output::print_emit_output(&manifest, &entries);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, today);
            let diagnostics = output::format_diagnostics(&manifest);
            for line in &diagnostics {
                println!("{line}");
            }
            if diagnostics.is_empty() {
                println!("==> Content is valid");
            } else {
                println!("==> {} warnings", diagnostics.len());
            }
        }
        Command::List {
            category,
            page,
            limit,
        } => {
            let manifest = scan::scan(&cli.source)?;
            let listing = manifest.listing(&category).ok_or_else(|| {
                let known: Vec<String> = manifest
                    .listings
                    .iter()
                    .map(|l| l.category.clone())
                    .collect();
                format!("unknown category '{category}', known: {}", known.join(", "))
            })?;
            let default_limit = manifest
                .config
                .category(&category)
                .map(|c| c.page_size)
                .unwrap_or(10);
            let query =
                listing::PageQuery::from_params(page.as_deref(), limit.as_deref(), default_limit);
            let paged = listing::paginate(&listing.items, &query);
            output::print_list_output(listing, &paged, &query, today);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr via tracing so stdout stays a clean inventory.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_listing(
    temp_dir: &std::path::Path,
    manifest: &scan::Manifest,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let listing_path = temp_dir.join("listing.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&listing_path, json)?;
    Ok(())
}

fn read_listing(temp_dir: &std::path::Path) -> Result<scan::Manifest, Box<dyn std::error::Error>> {
    let listing_path = temp_dir.join("listing.json");
    let content = std::fs::read_to_string(&listing_path)?;
    Ok(serde_json::from_str(&content)?)
}
