use std::ops::Deref;
use std::sync::Arc;

use driver::database::PostgresDatabase;
use kernel::KernelError;
use vodca::References;

/// Shared router state. Cloning only bumps the reference count.
#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let handler = Handler::init().await?;
        tracing::info!("application module initialized");
        Ok(Self(Arc::new(handler)))
    }
}

#[cfg(test)]
impl AppModule {
    pub(crate) fn with_database(pgpool: PostgresDatabase) -> Self {
        Self(Arc::new(Handler { pgpool }))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
}

impl Handler {
    async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        Ok(Self { pgpool })
    }
}
