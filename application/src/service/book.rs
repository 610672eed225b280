use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookContent, BookDraft, BookTitle, BookWriter, DestructBook};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetBookDto, GetBooksByCategoryAndWriterDto,
    GetBooksByCategoryDto, GetBooksByWriterDto, SearchBookByTitleDto, UpdateBookDto,
};

fn into_dtos(books: Vec<Book>) -> Vec<BookDto> {
    books.into_iter().map(BookDto::from).collect()
}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(into_dtos(books))
    }

    /// Unknown ids are not an error here: the caller gets [`BookDto::default`].
    async fn get_book(&self, dto: &GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let book = self.book_query().find_by_id(&mut connection, &dto.id).await?;
        match book {
            Some(book) => Ok(BookDto::from(book)),
            None => {
                tracing::warn!(id = ?dto.id, "book not found, responding with an empty book");
                Ok(BookDto::default())
            }
        }
    }

    async fn get_books_by_title_containing(
        &self,
        dto: &SearchBookByTitleDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self
            .book_query()
            .find_by_title_containing(&mut connection, &dto.keyword)
            .await?;
        Ok(into_dtos(books))
    }

    async fn get_books_by_category(
        &self,
        dto: &GetBooksByCategoryDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self
            .book_query()
            .find_by_category(&mut connection, &dto.category)
            .await?;
        Ok(into_dtos(books))
    }

    async fn get_books_by_writer(
        &self,
        dto: &GetBooksByWriterDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let writer = BookWriter::new(dto.writer.as_str());
        let books = self
            .book_query()
            .find_by_writer(&mut connection, &writer)
            .await?;
        Ok(into_dtos(books))
    }

    async fn get_books_by_category_and_writer(
        &self,
        dto: &GetBooksByCategoryAndWriterDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let Some(category) = dto.category else {
            let dto = GetBooksByWriterDto {
                writer: dto.writer.clone(),
            };
            return self.get_books_by_writer(&dto).await;
        };

        let mut connection = self.database_connection().transact().await?;
        let writer = BookWriter::new(dto.writer.as_str());
        let books = self
            .book_query()
            .find_by_category_and_writer(&mut connection, &category, &writer)
            .await?;
        Ok(into_dtos(books))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = BookDraft::new(
            BookWriter::new(dto.writer),
            BookTitle::new(dto.title),
            BookContent::new(dto.content),
            dto.category,
        );
        let book = self.book_modifier().create(&mut connection, &draft).await?;
        connection.commit().await?;

        tracing::info!(id = ?book.id(), "book created");
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let UpdateBookDto {
            id,
            title,
            content,
            category,
        } = dto;
        let current = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Book not found: {}", id.as_ref()))
            })?;

        // id and writer are carried over, everything else comes from the request
        let DestructBook { id, writer, .. } = current.into_destruct();
        let book = Book::new(
            id,
            writer,
            BookTitle::new(title),
            BookContent::new(content),
            category,
        );

        let updated = self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        tracing::info!(id = ?updated.id(), "book updated");
        Ok(BookDto::from(updated))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: &DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        match self.book_modifier().delete(&mut connection, &dto.id).await {
            Ok(()) => tracing::info!(id = ?dto.id, "book deleted"),
            Err(report) if matches!(report.current_context(), KernelError::NotFound) => {
                tracing::debug!(id = ?dto.id, "no book to delete");
            }
            Err(report) => return Err(report),
        }
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
