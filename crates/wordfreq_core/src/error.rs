use crate::token::TokenizeError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error("no data to aggregate")]
    EmptyInput,
}
