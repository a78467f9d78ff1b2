use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;

use crate::engine::SearchEngine;
use crate::errors::{Result, SearchError};
use crate::task::SearchTask;

///
/// Run every task on a pool of `min(processes, tasks)` threads and wait for
/// all of them.
///
/// A failing search is not retried; its error is returned once the pool has
/// stopped.
///
/// # Arguments
/// - engine: the search engine to run
/// - tasks: searches to run
/// - processes: upper bound on concurrent searches
pub fn run_search<E: SearchEngine>(engine: &E, tasks: &[SearchTask], processes: usize) -> Result<()> {
    if tasks.is_empty() {
        return Err(SearchError::NoTasks);
    }

    let num_threads = processes.clamp(1, tasks.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    info!(
        "Running {} searches with {} on {} threads",
        tasks.len(),
        engine.name(),
        num_threads
    );

    let bar = ProgressBar::new(tasks.len() as u64);
    let result = pool.install(|| {
        tasks.par_iter().try_for_each(|task| {
            let result = engine.run(task);
            bar.inc(1);
            result
        })
    });
    bar.finish();

    result?;
    info!("All {} searches finished", tasks.len());
    Ok(())
}
