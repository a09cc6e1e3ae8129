use std::{fmt::Display, result};

use addrbook_boundary::Error as JsonErrorResponse;
use anyhow::anyhow;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers,
    http::Status,
    response::{self, Responder},
    routes, Catcher, Request, Route,
};

use addrbook_application::{error::AppError, prelude as flows};

mod addresses;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   addresses   --- //
        addresses::get_addresses,
        addresses::get_address,
        addresses::post_address,
        addresses::put_address,
        addresses::delete_address,
        // ---   search   --- //
        addresses::get_search_by_coordinates,
        addresses::get_search_by_address,
        // ---   misc   --- //
        util::get_version,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> (Status, Json<JsonErrorResponse>) {
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_owned(),
    };
    (status, Json(boundary_error))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Runs a flow on the blocking thread pool.
///
/// Both the database and the geocoder block the calling thread.
async fn run_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let res = rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow!("Blocking task failed: {err}")))?;
    Ok(res?)
}
