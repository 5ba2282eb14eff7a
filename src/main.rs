use blog_seed::article::{ArticleRequest, Assembler};
use blog_seed::{batch, config, output, stats, writer};
use chrono::Utc;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "blog-seed")]
#[command(about = "Generate placeholder technical blog articles")]
#[command(long_about = "\
Generate placeholder technical blog articles

Articles are written to <content_dir>/<topic>/<slug>.md with a front-matter
block (author, timestamps, title, slug, flags, tags, description), a table of
contents heading, templated sections, and a topic-specific code sample.

Project layout (defaults, see 'blog-seed gen-config'):

  .
  ├── blog-seed.toml               # Optional config
  ├── .github/workflows/           # Required by 'validate'
  └── src/content/blog/            # Content root
      ├── java/
      │   └── jvm性能调优与内存管理.md
      └── rust/
          └── rust所有权模型深度解析.md")]
#[command(version)]
#[command(allow_external_subcommands = true)]
struct Cli {
    /// Project root
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Seed the random generator for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the content and workflow directories exist
    Validate,
    /// Generate a single article
    Generate {
        /// Topic key
        #[arg(default_value = "java")]
        topic: String,
        /// Article type key
        #[arg(default_value = "tutorial")]
        article_type: String,
        /// Mark the article as featured
        #[arg(long)]
        featured: bool,
        /// Mark the article as a draft
        #[arg(long)]
        draft: bool,
        /// Category index within the topic (out of range falls back to 0)
        #[arg(long, default_value_t = 0)]
        category: usize,
    },
    /// Generate several articles, cycling through topics and types
    Batch {
        /// Number of articles
        #[arg(default_value_t = 5)]
        count: usize,
    },
    /// Show article counts per topic
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock blog-seed.toml with all options documented
    GenConfig,
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", output::format_argument_error(&e.to_string()));
                return ExitCode::FAILURE;
            }
        },
    };
    blog_seed::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::format_error(&*e));
            ExitCode::FAILURE
        }
    }
}

/// Config, content root, and RNG shared by the commands that write or read articles.
struct Context {
    config: config::GeneratorConfig,
    content_root: PathBuf,
    rng: StdRng,
}

impl Context {
    fn load(root: &Path, seed: Option<u64>) -> Result<Self, config::ConfigError> {
        let config = config::load_config(root)?;
        let content_root = config.content_root(root);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            content_root,
            rng,
        })
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        output::print_usage();
        return Ok(());
    };

    match command {
        Command::Validate => {
            let config = config::load_config(&cli.root)?;
            stats::validate_project_layout(&config, &cli.root)?;
            output::print_validate_output(&cli.root);
        }
        Command::Generate {
            topic,
            article_type,
            featured,
            draft,
            category,
        } => {
            let mut ctx = Context::load(&cli.root, cli.seed)?;
            let request = ArticleRequest::new(topic, article_type)
                .category(category)
                .featured(featured)
                .draft(draft);
            let document = Assembler::new().assemble(&request, &mut ctx.rng)?;
            let path = writer::write_article(
                &document,
                &ctx.content_root,
                &ctx.config.author,
                Utc::now(),
            )?;
            output::print_generate_output(&document.title, &path);
        }
        Command::Batch { count } => {
            let mut ctx = Context::load(&cli.root, cli.seed)?;
            let entries = batch::batch_generate(
                &Assembler::new(),
                &ctx.content_root,
                &ctx.config.author,
                count,
                &mut ctx.rng,
                Utc::now(),
            );
            output::print_batch_output(&entries);
        }
        Command::Stats { json } => {
            let config = config::load_config(&cli.root)?;
            let stats = stats::get_stats(&config.content_root(&cli.root));
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                output::print_stats_output(&stats);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Unknown(_) => {
            output::print_usage();
        }
    }

    Ok(())
}
