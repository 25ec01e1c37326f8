/// Trailtips Moderator - inspect and moderate a single experience
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trailtips_core::CommentId;
use trailtips_moderator::{alerts::ConsoleAlerts, commands, config::ModeratorConfig};
use trailtips_views::{ActionOutcome, DefaultLayout};

#[derive(Parser)]
#[command(name = "trailtips-moderator")]
#[command(about = "Inspect and moderate Trailtips experiences", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, overriding configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Treat non-2xx DELETE answers as failures (`--check-delete-status=false` to disable)
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    check_delete_status: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an experience page as HTML
    Show {
        /// Experience slug (resource id)
        slug: String,
        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete an experience
    DeleteExperience {
        /// Experience slug (resource id)
        slug: String,
    },
    /// Delete one comment of an experience
    DeleteComment {
        /// Experience slug (resource id)
        slug: String,
        /// Comment id
        comment_id: CommentId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "trailtips_moderator=info,trailtips_client=info,trailtips_views=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ModeratorConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.base_url, cli.check_delete_status);
    config.validate()?;

    tracing::debug!(
        base_url = %config.api.base_url,
        check_delete_status = config.moderation.check_delete_status,
        "Configuration loaded"
    );

    let mut page = commands::open_page(&config, Arc::new(ConsoleAlerts))?;

    match cli.command {
        Commands::Show { slug, output } => {
            let html = commands::show(&mut page, &slug, &DefaultLayout::default()).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, html).await?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Commands::DeleteExperience { slug } => {
            if commands::delete_experience(&mut page, &slug).await == ActionOutcome::Skipped {
                println!("{}", commands::describe_state(page.state()));
            }
        }
        Commands::DeleteComment { slug, comment_id } => {
            let (_, remaining) = commands::delete_comment(&mut page, &slug, comment_id).await;
            match remaining {
                Some(count) => println!("Comments: {}", count),
                None => println!("{}", commands::describe_state(page.state())),
            }
        }
    }

    Ok(())
}
