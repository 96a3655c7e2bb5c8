use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{parse_id, Poi, PoiParams};
use crate::error::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    success: bool,
    id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    success: bool,
    message: String,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Poi>>, Error> {
    let pois = api.list_pois().await?;

    Ok(pois.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Poi>, Error> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    let poi = api.find_poi(id).await?;

    Ok(poi.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<PoiParams>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), Error> {
    let Json(params) = params?;
    let id = api.create_poi(params).await?;

    Ok((StatusCode::CREATED, CreateResponse { success: true, id }.into()))
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Json<PoiParams>, JsonRejection>,
) -> Result<Json<UpdateResponse>, Error> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    let Json(params) = params?;
    api.update_poi(id, params).await?;

    Ok(UpdateResponse {
        success: true,
        message: "POI updated successfully".into(),
    }
    .into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, Error> {
    let Path(id) = path?;
    let id = parse_id(&id)?;
    api.delete_poi(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
