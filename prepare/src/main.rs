use std::process::ExitCode;

use unicode_character_prepare::output::{self, JsonLinesStore};
use unicode_character_prepare::{DirectoryFetcher, Pipeline, PrepareConfig, PrepareResult, SnapshotCache};

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> PrepareResult<()>
{
    let config = PrepareConfig::from_args(std::env::args())?;
    log::debug!("{:?}", config);

    let pipeline = Pipeline::new(
        DirectoryFetcher::new(&config.ucd_dir),
        SnapshotCache::new(&config.cache_dir),
    );

    let prepared = pipeline.prepare()?;

    output::stats::print(&prepared.table, prepared.stats.as_ref());

    let mut store = JsonLinesStore::create(&config.output)?;
    output::submit(&mut store, &prepared.table, config.batch_size)?;
    store.flush()?;

    Ok(())
}
