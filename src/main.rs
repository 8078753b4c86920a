use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use logisland_console::common::config::load_console_config;
use logisland_console::common::job::Job;
use logisland_console::common::topic::Topic;
use logisland_console::{Console, ConsoleContext};

#[derive(Debug, Parser)]
#[command(name = "logisland-console", version, about = "Administrative console for LogIsland topics and jobs")]
struct Cli {
    /// Location of the config file (defaults to ./logisland.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the page at a console route, e.g. `/topic` or `/topic/orders`.
    Open {
        route: String,
        /// Search value applied to list pages.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Manage topics.
    Topics {
        #[command(subcommand)]
        action: TopicAction,
    },
    /// Manage jobs.
    Jobs {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Print the effective configuration.
    Config,
}

#[derive(Debug, Subcommand)]
enum TopicAction {
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        name: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        partitions: u32,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        replication_factor: u32,
        #[arg(long)]
        serializer: Option<String>,
        #[arg(long)]
        documentation: Option<String>,
    },
    /// Replace a topic with the JSON document in FILE.
    Update {
        file: PathBuf,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum JobAction {
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    Get {
        id: String,
    },
    Create {
        name: String,
        #[arg(long, default_value = "")]
        documentation: String,
    },
    Update {
        name: String,
        #[arg(long)]
        documentation: String,
    },
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let console_config = load_console_config(cli.config.as_deref())?;
    if let Command::Config = cli.command {
        println!("{}", serde_json::to_string_pretty(&console_config)?);
        return Ok(());
    }

    let ctx = ConsoleContext::load(console_config)?;
    match cli.command {
        Command::Open { route, filter } => {
            let mut console = Console::new(ctx);
            print!("{}", console.open(&route, filter.as_deref()).await);
        }
        Command::Topics { action } => run_topic_action(ctx, action).await?,
        Command::Jobs { action } => run_job_action(ctx, action).await?,
        Command::Config => {}
    }
    Ok(())
}

async fn run_topic_action(ctx: ConsoleContext, action: TopicAction) -> anyhow::Result<()> {
    let topics = ctx.topics.clone();
    match action {
        TopicAction::List { filter } => {
            let mut console = Console::new(ctx);
            print!("{}", console.open("/topic", filter.as_deref()).await);
        }
        TopicAction::Get { id } => print_json(&topics.get(&id).await?)?,
        TopicAction::Create {
            name,
            partitions,
            replication_factor,
            serializer,
            documentation,
        } => {
            let mut topic = Topic::new(name);
            topic.partitions = partitions;
            topic.replication_factor = replication_factor;
            topic.serializer = serializer;
            if let Some(documentation) = documentation {
                topic.documentation = documentation;
            }
            print_json(&topics.insert(&topic).await?)?;
        }
        TopicAction::Update { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let topic: Topic = serde_json::from_str(&json)
                .with_context(|| format!("{} is not a topic document", file.display()))?;
            print_json(&topics.update(&topic).await?)?;
        }
        TopicAction::Delete { id } => {
            topics.delete(&id).await?;
            log::info!("Deleted topic {}", id);
        }
    }
    Ok(())
}

async fn run_job_action(ctx: ConsoleContext, action: JobAction) -> anyhow::Result<()> {
    let jobs = ctx.jobs.clone();
    match action {
        JobAction::List { filter } => {
            let mut console = Console::new(ctx);
            print!("{}", console.open("/job", filter.as_deref()).await);
        }
        JobAction::Get { id } => print_json(&jobs.get(&id).await?)?,
        JobAction::Create { name, documentation } => {
            print_json(&jobs.insert(&Job::new(name, documentation)).await?)?;
        }
        JobAction::Update { name, documentation } => {
            print_json(&jobs.update(&Job::new(name, documentation)).await?)?;
        }
        JobAction::Delete { id } => {
            jobs.delete(&id).await?;
            log::info!("Deleted job {}", id);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
