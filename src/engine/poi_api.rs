use super::Engine;

use async_trait::async_trait;
use futures::TryStreamExt;
use geo_types::Geometry;
use geozero::wkb;
use sqlx::{postgres::PgRow, Executor, Row};

use crate::{
    api::PoiAPI,
    entities::{Poi, PoiParams},
    error::{not_found_error, Error},
};

const SELECT_POIS: &str = "
    SELECT
        id,
        name,
        description,
        ST_Y(location) AS lat,
        ST_X(location) AS lng
    FROM
        pois
";

fn poi_from_row(row: &PgRow) -> Result<Poi, Error> {
    Ok(Poi {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        lat: row.try_get("lat")?,
        lng: row.try_get("lng")?,
    })
}

#[async_trait]
impl PoiAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_pois(&self) -> Result<Vec<Poi>, Error> {
        let query = format!("{} ORDER BY id", SELECT_POIS);

        let mut tx = self.pool.begin().await?;
        let mut pois = vec![];

        {
            let mut rows = tx.fetch(sqlx::query(&query));

            while let Some(row) = rows.try_next().await? {
                pois.push(poi_from_row(&row)?);
            }
        }

        tx.commit().await?;

        Ok(pois)
    }

    #[tracing::instrument(skip(self))]
    async fn find_poi(&self, id: i32) -> Result<Poi, Error> {
        let query = format!("{} WHERE id = $1", SELECT_POIS);

        let mut tx = self.pool.begin().await?;

        let row = tx
            .fetch_optional(sqlx::query(&query).bind(id))
            .await?
            .ok_or_else(not_found_error)?;
        let poi = poi_from_row(&row)?;

        tx.commit().await?;

        Ok(poi)
    }

    #[tracing::instrument(skip(self))]
    async fn create_poi(&self, params: PoiParams) -> Result<i32, Error> {
        params.validate()?;

        let location: Geometry<f64> = params.coordinates().into();

        let mut tx = self.pool.begin().await?;

        let id: i32 = tx
            .fetch_one(
                sqlx::query(
                    "INSERT INTO pois (name, description, location) VALUES ($1, $2, ST_SetSRID($3, 4326)) RETURNING id",
                )
                .bind(&params.name)
                .bind(&params.description)
                .bind(wkb::Encode(location)),
            )
            .await?
            .try_get("id")?;

        tx.commit().await?;

        tracing::info!(id, "poi created");

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn update_poi(&self, id: i32, params: PoiParams) -> Result<(), Error> {
        params.validate()?;

        let location: Geometry<f64> = params.coordinates().into();

        let mut tx = self.pool.begin().await?;

        let result = tx
            .execute(
                sqlx::query(
                    "UPDATE pois SET name = $2, description = $3, location = ST_SetSRID($4, 4326) WHERE id = $1",
                )
                .bind(id)
                .bind(&params.name)
                .bind(&params.description)
                .bind(wkb::Encode(location)),
            )
            .await?;

        // dropping the transaction rolls it back
        if result.rows_affected() == 0 {
            return Err(not_found_error());
        }

        tx.commit().await?;

        tracing::info!(id, "poi updated");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_poi(&self, id: i32) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        let result = tx
            .execute(sqlx::query("DELETE FROM pois WHERE id = $1").bind(id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error());
        }

        tx.commit().await?;

        tracing::info!(id, "poi deleted");

        Ok(())
    }
}
