use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sharded_kv::{cli::Cli, Request, Store, WorkerPool};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = Arc::new(Store::new(cli.shards)?);
    let pool = WorkerPool::spawn(cli.workers, Arc::clone(&store))?;
    info!(shards = cli.shards, workers = cli.workers, "store running");

    // Produce requests.
    pool.submit(Request::set("a", "1"))?;
    pool.submit(Request::set("b", "2"))?;
    pool.submit(Request::get("a"))?;
    pool.submit(Request::delete("a"))?;
    pool.submit(Request::get("a"))?;
    pool.submit(Request::get("b"))?;

    pool.shutdown().await;
    info!(entries = store.len(), "kv store shut down cleanly");

    Ok(())
}
