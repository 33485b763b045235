use thiserror::Error;

pub type RvResult<T> = Result<T, RvError>;

#[derive(Error, Debug)]
pub enum RvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
