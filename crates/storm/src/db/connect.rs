use crate::Result;

use storm_core::{
    async_trait,
    driver::{Capability, Connection, Driver},
    Error,
};

use url::Url;

/// A driver chosen from a connection URL's scheme.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    capability: Capability,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        let capability = match parsed.scheme() {
            "sqlite" => Capability::SQLITE,
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self {
            url: parsed,
            capability,
        })
    }
}

#[async_trait]
impl Driver for Connect {
    fn capability(&self) -> &Capability {
        &self.capability
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "sqlite" => connect_sqlite(&self.url).await,
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            ))),
        }
    }
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url) -> Result<Box<dyn Connection>> {
    storm_driver_sqlite::Sqlite::new(url.as_str())?.connect().await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
