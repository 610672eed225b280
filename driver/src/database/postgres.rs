use std::ops::{Deref, DerefMut};
use std::path::Path;

use error_stack::{Report, ResultExt};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

use crate::error::ConvertError;
use crate::{env, env_or};

pub use self::book::*;

mod book;

static POSTGRES_URL: &str = "POSTGRES_URL";
static POSTGRES_MAX_CONNECTIONS: &str = "POSTGRES_MAX_CONNECTIONS";
static POSTGRES_MIGRATIONS: &str = "POSTGRES_MIGRATIONS";
static DEFAULT_MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    /// Connects using `POSTGRES_URL` and brings the schema up to date.
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let max_connections = env_or(POSTGRES_MAX_CONNECTIONS, 5u32)?;
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await
            .convert_error()?;
        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// Builds a pool that opens connections on first use. No migrations are run.
    pub fn connect_lazy(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = PgPoolOptions::new().connect_lazy(url).convert_error()?;
        Ok(Self { pool })
    }

    async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        let dir = env_or(POSTGRES_MIGRATIONS, DEFAULT_MIGRATIONS_DIR.to_string())?;
        let migrator = Migrator::new(Path::new(&dir))
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to load migrations from {dir}"))?;
        migrator
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable("Failed to apply migrations")?;
        tracing::info!(migrations = %dir, "database schema is up to date");
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
