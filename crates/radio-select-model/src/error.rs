use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("expected option list to be an array, found {found}")]
    InvalidOptionSource { found: &'static str },
    #[error("could not determine either the `value` or `label` property of option {index}: {option}")]
    UnresolvableOptionShape { index: usize, option: String },
}

pub type Result<T> = std::result::Result<T, OptionError>;
