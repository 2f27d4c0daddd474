use super::{Connect, Db};
use crate::{engine::Engine, Result};

use storm_core::driver::{Driver, Flavor};
use storm_sql::Serializer;

#[derive(Debug, Default)]
pub struct Builder {
    /// Placeholder flavor overriding the driver's own
    flavor: Option<Flavor>,
}

impl Builder {
    /// Use `flavor` placeholders regardless of what the driver advertises.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self
    }

    /// Opens a connection through `driver`.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let flavor = self.flavor.unwrap_or(driver.capability().flavor);
        let connection = driver.connect().await?;

        tracing::debug!(?driver, ?flavor, "connected");

        Ok(Db {
            connection,
            engine: Engine::new(Serializer::new(flavor)),
        })
    }

    /// Opens a connection to the database at `url`, picking the driver from
    /// the URL scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }
}
