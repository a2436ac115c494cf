use chainmap_core::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
