//! Pinboard CLI
//!
//! Command-line front end for the bulletin board data layer. All logic
//! lives behind the backend contract; this binary only parses
//! arguments, dispatches, and formats results.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinboard_core::{backend, Backend, Config};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "pinboard")]
#[command(about = "Pinboard - bulletin board posts, FAQs, and inquiries")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// List frequently asked questions
    Faqs,
    /// Submit a contact inquiry
    Inquire {
        /// Your name
        #[arg(long)]
        name: String,
        /// Contact email address
        #[arg(long)]
        email: String,
        /// Inquiry subject
        #[arg(short = 'T', long)]
        title: String,
        /// Inquiry body
        #[arg(short, long)]
        content: String,
        /// Agree to the privacy terms
        #[arg(long)]
        consent: bool,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (backend mode, data location, collection counts)
    Status,
}

#[derive(Subcommand)]
enum PostCommands {
    /// List posts
    #[command(alias = "ls")]
    List {
        /// Filter by board (notice, community, event)
        #[arg(short, long)]
        board: Option<String>,
        /// Case-insensitive search over title, content, and tags
        #[arg(long)]
        query: Option<String>,
        /// Sort order: new, view, or like
        #[arg(short, long, default_value = "new")]
        sort: String,
        /// 1-based page index
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Page size
        #[arg(short = 'n', long, default_value_t = 10)]
        size: usize,
    },
    /// Show one post (counts a view)
    Show {
        /// Post id
        id: String,
    },
    /// Create a new post
    #[command(alias = "add")]
    Create {
        /// Target board (notice, community, event)
        #[arg(short, long)]
        board: String,
        #[arg(short = 'T', long)]
        title: String,
        #[arg(short, long)]
        author: String,
        #[arg(short, long)]
        content: String,
        /// Tags to attach
        #[arg(short = 't', long)]
        tag: Vec<String>,
        /// Event window start (RFC 3339), for the event board
        #[arg(long)]
        event_start: Option<String>,
        /// Event window end (RFC 3339)
        #[arg(long)]
        event_end: Option<String>,
    },
    /// Edit fields of an existing post
    Edit {
        /// Post id
        id: String,
        #[arg(long)]
        board: Option<String>,
        #[arg(short = 'T', long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
        /// Replace the tag list
        #[arg(short = 't', long)]
        tag: Vec<String>,
    },
    /// Like a post
    Like {
        /// Post id
        id: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, api_url, remote_enabled)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Commands that don't need a backend
    match &cli.command {
        Commands::Config { command } => {
            return handle_config_command(command.clone(), &output);
        }
        Commands::Status => {
            return commands::status::show(&output);
        }
        _ => {}
    }

    let config = Config::load()?;
    let backend = backend::from_config(&config)?;

    match cli.command {
        Commands::Post { command } => {
            handle_post_command(command, backend.as_ref(), &output).await
        }
        Commands::Faqs => commands::faq::list(backend.as_ref(), &output).await,
        Commands::Inquire {
            name,
            email,
            title,
            content,
            consent,
        } => {
            commands::inquiry::create(backend.as_ref(), name, email, title, content, consent, &output)
                .await
        }
        Commands::Config { .. } | Commands::Status => unreachable!(), // handled above
    }
}

async fn handle_post_command(
    command: PostCommands,
    backend: &dyn Backend,
    output: &Output,
) -> Result<()> {
    match command {
        PostCommands::List {
            board,
            query,
            sort,
            page,
            size,
        } => commands::post::list(backend, board, query, sort, page, size, output).await,
        PostCommands::Show { id } => commands::post::show(backend, id, output).await,
        PostCommands::Create {
            board,
            title,
            author,
            content,
            tag,
            event_start,
            event_end,
        } => {
            commands::post::create(
                backend,
                board,
                title,
                author,
                content,
                tag,
                event_start,
                event_end,
                output,
            )
            .await
        }
        PostCommands::Edit {
            id,
            board,
            title,
            author,
            content,
            tag,
        } => commands::post::edit(backend, id, board, title, author, content, tag, output).await,
        PostCommands::Like { id } => commands::post::like(backend, id, output).await,
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pinboard_core=warn,pinboard_cli=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
