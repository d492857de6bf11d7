use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of shards the key space is partitioned into. Fixed for the
    /// store's lifetime.
    #[arg(long, default_value_t = 4)]
    pub shards: usize,

    /// Number of concurrent workers draining the queue. Fixed for the pool's
    /// lifetime.
    #[arg(long, default_value_t = 2)]
    pub workers: usize,
}
