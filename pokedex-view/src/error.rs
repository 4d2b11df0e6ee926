/// Errors that can occur while writing a rendered view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
