use thiserror::Error;

use orfmap_core::OrfmapError;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{engine} failed on {task}: {message}")]
    EngineFailed {
        engine: String,
        task: String,
        message: String,
    },
    #[error("No search tasks to run")]
    NoTasks,
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Glob(#[from] glob::PatternError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] OrfmapError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
