use anyhow::Error;
use roster_cms::CmsError;
use roster_config::ConfigError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(_config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(cms_err) = cause.downcast_ref::<CmsError>() {
            return ExitCode::from(cms_exit_code(cms_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn cms_exit_code(err: &CmsError) -> u8 {
    match err {
        CmsError::Http(_) | CmsError::Decode(_) | CmsError::GraphQl(_) => EXIT_FAILURE,
        CmsError::Url(_) | CmsError::InvalidEndpoint(_) => EXIT_INVALID_INPUT,
    }
}
