// church-members - registration and lookup for a church's member records
//
// This is the main entry point. Opens the store, then runs the form or a
// one-shot command.

use anyhow::Context;
use church_members_lib::{
    cli::{Cli, Command, SearchMembers},
    core::{searcher::TERM_REQUIRED_MESSAGE, searcher::TERM_REQUIRED_TITLE, Searcher},
    shell::{Presenter, TerminalPresenter, TerminalShell},
    Database, Result,
};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::init();
    let db_path = cli.db_path()?;

    let db = Database::new(&db_path)
        .await
        .with_context(|| format!("Could not open member store at {}", db_path.display()))?;
    let db = Arc::new(db);

    let result = match cli.command.unwrap_or(Command::App) {
        Command::App => TerminalShell::new(Arc::clone(&db)).run().await,
        Command::Search(args) => handle_search(Arc::clone(&db), args).await,
        Command::Status => handle_status(&db).await,
    };

    db.close().await;
    result?;

    Ok(())
}

async fn handle_search(db: Arc<Database>, args: SearchMembers) -> Result<()> {
    let searcher = Searcher::new(db);
    let mut presenter = TerminalPresenter;
    let term = args.term();

    if !args.json {
        searcher.search(&term, &mut presenter).await?;
        return Ok(());
    }

    match searcher.matches(&term).await? {
        Some(members) => println!("{}", serde_json::to_string_pretty(&members)?),
        None => presenter.warn(TERM_REQUIRED_TITLE, TERM_REQUIRED_MESSAGE),
    }

    Ok(())
}

async fn handle_status(db: &Database) -> Result<()> {
    let stats = db.stats().await?;

    println!("\nchurch-members Status");
    println!("{}", "=".repeat(60));
    println!("  Database:    {}", db.path().display());
    println!("  Members:     {}", stats.total_members);
    println!(
        "  Connections: {} open, {} idle",
        stats.pool_size, stats.idle_connections
    );
    println!("{}", "=".repeat(60));

    Ok(())
}
