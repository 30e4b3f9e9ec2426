mod cli;

use crate::cli::{Command, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use snip_core::{AllocError, AllocateParams, Repository, Shortener};
use snip_generator::WordLists;
use snip_shortener::{AllocatorSettings, ShortenerService};
use snip_storage::{InMemoryRepository, MySqlRepository, SqliteRepository};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = CLI::parse();

    snip_telemetry::init(config.log_format).context("failed to install log subscriber")?;

    debug!(
        storage_backend = %config.storage,
        max_attempts = config.max_attempts,
        "starting snip"
    );

    let words = match &config.words_dir {
        Some(dir) => WordLists::from_dir(dir)
            .with_context(|| format!("failed to load word lists from {}", dir.display()))?,
        None => WordLists::bundled(),
    };
    let settings = AllocatorSettings::builder()
        .max_attempts(config.max_attempts)
        .build();

    match config.storage {
        StorageBackendArg::Sqlite => {
            let repository = SqliteRepository::connect(&config.database_url)
                .await
                .context("failed to open sqlite database")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create sqlite schema")?;
            run(config.command, &config.base_url, repository, words, settings).await
        }
        StorageBackendArg::Mysql => {
            let repository = MySqlRepository::connect(&config.database_url)
                .await
                .context("failed to connect to mysql")?;
            repository
                .ensure_schema()
                .await
                .context("failed to create mysql schema")?;
            run(config.command, &config.base_url, repository, words, settings).await
        }
        StorageBackendArg::InMemory => {
            run(
                config.command,
                &config.base_url,
                InMemoryRepository::new(),
                words,
                settings,
            )
            .await
        }
    }
}

async fn run<R: Repository>(
    command: Command,
    base_url: &str,
    repository: R,
    words: WordLists,
    settings: AllocatorSettings,
) -> anyhow::Result<ExitCode> {
    let service = ShortenerService::standard(repository, words).with_settings(settings);
    execute(command, base_url, &service, &mut std::io::stdout()).await
}

/// Runs one subcommand, writing its result to `out`.
async fn execute<S: Shortener>(
    command: Command,
    base_url: &str,
    service: &S,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::New {
            id_type,
            url,
            creator_ip,
        } => {
            let link = service
                .allocate(AllocateParams::new(id_type, url, creator_ip))
                .await
                .context("failed to create link")?;
            writeln!(out, "{}", link.id.to_url(base_url))?;
        }
        Command::Get { id } => match service.lookup(&id).await? {
            Some(link) => writeln!(out, "{}", link.target)?,
            None => {
                eprintln!("no link stored under {id}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Delete { id } => match service.delete_by_id(&id).await {
            Ok(()) => info!(%id, "link deleted"),
            Err(AllocError::NotFound(_)) => {
                eprintln!("no link stored under {id}");
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err).context("failed to delete link"),
        },
    }

    Ok(ExitCode::SUCCESS)
}
