use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookCategory, BookContent, BookDraft, BookId, BookTitle, BookWriter,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }

    async fn find_by_title_containing(
        &self,
        con: &mut PostgresTransaction,
        keyword: &str,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_title_containing(con, keyword).await
    }

    async fn find_by_category(
        &self,
        con: &mut PostgresTransaction,
        category: &BookCategory,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_category(con, category).await
    }

    async fn find_by_writer(
        &self,
        con: &mut PostgresTransaction,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_writer(con, writer).await
    }

    async fn find_by_category_and_writer(
        &self,
        con: &mut PostgresTransaction,
        category: &BookCategory,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_category_and_writer(con, category, writer).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, draft).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    writer: String,
    title: String,
    content: String,
    category: String,
}

impl TryFrom<BookRow> for Book {
    type Error = Report<KernelError>;
    fn try_from(value: BookRow) -> Result<Self, Self::Error> {
        let category = value
            .category
            .parse::<BookCategory>()
            .map_err(|report| report.attach_printable(format!("Corrupt row: id={}", value.id)))?;
        Ok(Book::new(
            BookId::new(value.id),
            BookWriter::new(value.writer),
            BookTitle::new(value.title),
            BookContent::new(value.content),
            category,
        ))
    }
}

fn into_books(rows: Vec<BookRow>) -> error_stack::Result<Vec<Book>, KernelError> {
    rows.into_iter().map(Book::try_from).collect()
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Book not found: {}", id.as_ref()))
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Book::try_from).transpose()
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    async fn find_by_title_containing(
        con: &mut PgConnection,
        keyword: &str,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        // strpos keeps `%` and `_` literal, and an empty keyword matches every title
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            WHERE strpos(title, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(keyword)
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    async fn find_by_category(
        con: &mut PgConnection,
        category: &BookCategory,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category.as_str())
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    async fn find_by_writer(
        con: &mut PgConnection,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            WHERE writer = $1
            ORDER BY id
            "#,
        )
        .bind(writer.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    async fn find_by_category_and_writer(
        con: &mut PgConnection,
        category: &BookCategory,
        writer: &BookWriter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, writer, title, content, category
            FROM books
            WHERE category = $1 AND writer = $2
            ORDER BY id
            "#,
        )
        .bind(category.as_str())
        .bind(writer.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    async fn create(
        con: &mut PgConnection,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (writer, title, content, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, writer, title, content, category
            "#,
        )
        .bind(draft.writer().as_ref())
        .bind(draft.title().as_ref())
        .bind(draft.content().as_ref())
        .bind(draft.category().as_str())
        .fetch_one(con)
        .await
        .convert_error()?;
        Book::try_from(row)
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, content = $3, category = $4
            WHERE id = $1
            RETURNING id, writer, title, content, category
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.content().as_ref())
        .bind(book.category().as_str())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Book::try_from)
            .transpose()?
            .ok_or_else(|| not_found(book.id()))
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(not_found(book_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::time::{SystemTime, UNIX_EPOCH};

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        BookCategory, BookContent, BookDraft, BookId, BookTitle, BookWriter,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    // Every test runs inside a transaction that is dropped without commit, so nothing
    // written here outlives the test.
    fn unique_writer() -> BookWriter {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        BookWriter::new(format!("writer-{nanos}"))
    }

    fn draft(writer: &BookWriter, title: &str, category: BookCategory) -> BookDraft {
        BookDraft::new(
            writer.clone(),
            BookTitle::new(title),
            BookContent::new(format!("content of {title}")),
            category,
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let writer = unique_writer();

        let book = PostgresBookRepository
            .create(&mut con, &draft(&writer, "1984", BookCategory::Fiction))
            .await?;
        assert_eq!(book.writer(), &writer);

        let found = PostgresBookRepository.find_by_id(&mut con, book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        let book = book.reconstruct(|b| b.title = BookTitle::new("Nineteen Eighty-Four"));
        let updated = PostgresBookRepository.update(&mut con, &book).await?;
        assert_eq!(updated, book);

        let found = PostgresBookRepository.find_by_id(&mut con, book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        PostgresBookRepository.delete(&mut con, book.id()).await?;
        let found = PostgresBookRepository.find_by_id(&mut con, book.id()).await?;
        assert!(found.is_none());

        let error = PostgresBookRepository
            .delete(&mut con, book.id())
            .await
            .unwrap_err();
        assert!(matches!(error.current_context(), KernelError::NotFound));

        let error = PostgresBookRepository.update(&mut con, &book).await.unwrap_err();
        assert!(matches!(error.current_context(), KernelError::NotFound));

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn filters() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let writer = unique_writer();

        let fiction = PostgresBookRepository
            .create(&mut con, &draft(&writer, "Animal 100%_Farm", BookCategory::Fiction))
            .await?;
        let essay = PostgresBookRepository
            .create(&mut con, &draft(&writer, "Why I Write", BookCategory::Essay))
            .await?;

        let all = PostgresBookRepository.find_all(&mut con).await?;
        assert!(all.contains(&fiction) && all.contains(&essay));

        let everything = PostgresBookRepository
            .find_by_title_containing(&mut con, "")
            .await?;
        assert_eq!(everything, all);

        let by_title = PostgresBookRepository
            .find_by_title_containing(&mut con, "100%_")
            .await?;
        assert!(by_title.contains(&fiction) && !by_title.contains(&essay));

        let by_writer = PostgresBookRepository.find_by_writer(&mut con, &writer).await?;
        assert_eq!(by_writer, vec![fiction.clone(), essay.clone()]);

        let by_category = PostgresBookRepository
            .find_by_category(&mut con, &BookCategory::Essay)
            .await?;
        assert!(by_category.contains(&essay) && !by_category.contains(&fiction));

        let both = PostgresBookRepository
            .find_by_category_and_writer(&mut con, &BookCategory::Fiction, &writer)
            .await?;
        assert_eq!(both, vec![fiction]);

        let missing = PostgresBookRepository
            .find_by_id(&mut con, &BookId::new(-1))
            .await?;
        assert!(missing.is_none());

        Ok(())
    }
}
