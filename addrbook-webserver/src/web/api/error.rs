use super::json_error_response;
use addrbook_application::error::{AppError, BError};
pub use addrbook_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        Self::App(err.into())
    }
}

fn business_error_status(err: &BError) -> Option<Status> {
    match err {
        BError::Parameter(_) => Some(Status::BadRequest),
        BError::Repo(RepoError::NotFound) => Some(Status::NotFound),
        BError::Repo(RepoError::AlreadyExists) => Some(Status::Conflict),
        BError::Repo(_) => None,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(AppError::Business(err)) => {
                if let Some(status) = business_error_status(&err) {
                    return json_error_response(req, &err, status);
                }
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
            Error::App(AppError::Other(err)) | Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
        }
    }
}
