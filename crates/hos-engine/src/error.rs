use hos_core::CoreError;
use hos_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("routing failed: {0}")]
    Route(#[from] RouteError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
