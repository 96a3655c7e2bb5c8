use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Poi, PoiParams};
use crate::error::Error;

#[async_trait]
pub trait PoiAPI {
    async fn list_pois(&self) -> Result<Vec<Poi>, Error>;
    async fn find_poi(&self, id: i32) -> Result<Poi, Error>;
    async fn create_poi(&self, params: PoiParams) -> Result<i32, Error>;
    async fn update_poi(&self, id: i32, params: PoiParams) -> Result<(), Error>;
    async fn delete_poi(&self, id: i32) -> Result<(), Error>;
}

pub trait API: PoiAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
