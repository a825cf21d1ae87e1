#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("write greeting: {0}")]
    Io(#[from] std::io::Error),
}

pub type GreeterResult<T> = Result<T, GreeterError>;
