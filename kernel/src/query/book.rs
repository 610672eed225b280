use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, BookCategory, BookId, BookWriter};
use crate::KernelError;

/// Read side of the book store. A missing row is reported as `None`, never as an error;
/// callers decide what absence means to them.
#[async_trait::async_trait]
pub trait BookQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_title_containing(
        &self,
        con: &mut Self::Transaction,
        keyword: &str,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_category(
        &self,
        con: &mut Self::Transaction,
        category: &BookCategory,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_writer(
        &self,
        con: &mut Self::Transaction,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_category_and_writer(
        &self,
        con: &mut Self::Transaction,
        category: &BookCategory,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_query(&self) -> &Self::BookQuery;
}
