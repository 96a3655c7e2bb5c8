mod poi_api;

use sqlx::{Executor, Pool, Postgres};

use crate::{api::API, error::Error};

type Database = Postgres;

#[derive(Debug)]
pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    pub fn new(pool: Pool<Database>) -> Self {
        Self { pool }
    }

    /// Creates the PostGIS extension and the `pois` table when missing.
    #[tracing::instrument(name = "Engine::ensure_schema", skip_all)]
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        self.pool
            .execute("CREATE EXTENSION IF NOT EXISTS postgis")
            .await?;
        self.pool
            .execute("CREATE TABLE IF NOT EXISTS pois (id SERIAL PRIMARY KEY, name TEXT NOT NULL, description TEXT NOT NULL, location geometry(Point, 4326) NOT NULL)")
            .await?;

        Ok(())
    }
}

impl API for Engine {}
