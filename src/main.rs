use clap::{Parser, Subcommand};
use newel_site::motion::MotionRuntime;
use newel_site::{config, generate, output, render, site};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once; runs a single time at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "newel-site")]
#[command(about = "Static site generator for the Newel Technologies website")]
#[command(long_about = "\
Static site generator for the Newel Technologies website

All page text lives in one site.toml. Images and other files under assets/
are copied to the output unchanged.

Content structure:

  content/
  ├── site.toml                    # Company details, navbar, every section and list
  ├── config.toml                  # Site config (optional): colors, motion, contact endpoint
  └── assets/                      # Logos, photos → copied to dist/assets/
      ├── Logo.png
      ├── clients/
      ├── services/
      └── team/

Pages:
  /  /about/  /services/  /industries/  /our-team/  /life-at-newel/
  /careers/  /contact/  /app-development/  and one page per [[verticals]] entry

Run 'newel-site gen-config' to generate a documented config.toml.
Run 'newel-site plan careers' to see the animations staged on a page.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".newel-site-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load site.toml and assets into a manifest
    Scan,
    /// Produce the HTML site from a scanned manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the content directory without building
    Check,
    /// Show the motion plan staged for one route
    Plan {
        /// Route slug (`careers`, `oil-gas`); empty or `/` for the landing page
        #[arg(default_value = "")]
        route: String,
        /// Print the plan as the JSON embedded in the page
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = site::load(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            println!("==> Stage 1: Loading {}", cli.source.display());
            let manifest = site::load(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.processing);
            let runtime = MotionRuntime::init(&manifest.config.motion);
            let report = generate::generate_site(&manifest, &runtime, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = site::load(&cli.source)?;
            output::print_load_output(&manifest);
            println!("==> Content is valid");
        }
        Command::Plan { route, json } => {
            let manifest = site::load(&cli.source)?;
            let slug = route.trim_matches('/');
            let Some(route) = manifest.route(slug) else {
                return Err(format!("Unknown route '{slug}'").into());
            };
            let runtime = MotionRuntime::init(&manifest.config.motion);
            let plan = render::plan_for(&manifest, route, &runtime)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan_output(&plan);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(manifest: &site::Manifest, temp_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)
}

/// Size the global rayon pool used for page rendering.
///
/// `max_processes` can lower the worker count below the core count, never raise it.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
