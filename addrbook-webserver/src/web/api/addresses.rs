use addrbook_core::entities::{Address, Distance, MapPoint};
use addrbook_db_sqlite::Connections;
use rocket::{delete, get, post, put, State};

use super::*;
use crate::{
    adapters::json::{self, from_json},
    web::guards::GeoCoding,
};

fn to_json_list(addresses: Vec<Address>) -> Vec<json::Address> {
    addresses.into_iter().map(Into::into).collect()
}

#[get("/addresses")]
pub async fn get_addresses(db: &State<Connections>) -> Result<Vec<json::Address>> {
    let db = db.inner().clone();
    let addresses = run_blocking(move || flows::all_addresses(&db)).await?;
    Ok(Json(to_json_list(addresses)))
}

#[get("/addresses/<id>")]
pub async fn get_address(db: &State<Connections>, id: String) -> Result<json::Address> {
    let db = db.inner().clone();
    let address = run_blocking(move || flows::get_address(&db, &id)).await?;
    Ok(Json(address.into()))
}

#[post("/addresses", format = "application/json", data = "<body>")]
pub async fn post_address(
    db: &State<Connections>,
    geo: &State<GeoCoding>,
    body: JsonResult<'_, json::NewAddress>,
) -> result::Result<(Status, Json<json::Address>), ApiError> {
    let new_address = from_json::new_address(body?.into_inner());
    let db = db.inner().clone();
    let geo = geo.gateway();
    let address =
        run_blocking(move || flows::create_address(&db, &*geo, new_address)).await?;
    Ok((Status::Created, Json(address.into())))
}

#[put("/addresses/<id>", format = "application/json", data = "<body>")]
pub async fn put_address(
    db: &State<Connections>,
    geo: &State<GeoCoding>,
    id: String,
    body: JsonResult<'_, json::UpdateAddress>,
) -> Result<json::Address> {
    let update = from_json::update_address(body?.into_inner());
    let db = db.inner().clone();
    let geo = geo.gateway();
    let address =
        run_blocking(move || flows::update_address(&db, &*geo, &id, update)).await?;
    Ok(Json(address.into()))
}

#[delete("/addresses/<id>")]
pub async fn delete_address(db: &State<Connections>, id: String) -> StatusResult {
    let db = db.inner().clone();
    run_blocking(move || flows::delete_address(&db, &id)).await?;
    Ok(Status::NoContent)
}

#[get("/addresses/search/by-coordinates?<latitude>&<longitude>&<radius_km>")]
pub async fn get_search_by_coordinates(
    db: &State<Connections>,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<json::Address>> {
    // An invalid center is rejected by the search
    let center = MapPoint::try_from_lat_lng_deg(latitude, longitude).unwrap_or_default();
    let radius = Distance::from_km(radius_km);
    let db = db.inner().clone();
    let addresses =
        run_blocking(move || flows::search_by_coordinates(&db, center, radius)).await?;
    Ok(Json(to_json_list(addresses)))
}

#[get("/addresses/search/by-address?<address_string>&<radius_km>")]
pub async fn get_search_by_address(
    db: &State<Connections>,
    geo: &State<GeoCoding>,
    address_string: String,
    radius_km: f64,
) -> Result<Vec<json::Address>> {
    let radius = Distance::from_km(radius_km);
    let db = db.inner().clone();
    let geo = geo.gateway();
    let addresses = run_blocking(move || {
        flows::search_by_address(&db, &*geo, &address_string, radius)
    })
    .await?;
    Ok(Json(to_json_list(addresses)))
}
