mod capability;
pub use capability::{Capability, Flavor};

mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::async_trait;

use std::fmt::Debug;

/// A database backend. Opens connections; pooling, timeouts and
/// cancellation are the driver's business.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which picks the placeholder flavor.
    fn capability(&self) -> &Capability;

    /// Opens a connection
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// One open connection to the database.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;

    /// Release the connection. Further operations fail.
    async fn close(&mut self) -> crate::Result<()> {
        Ok(())
    }
}
