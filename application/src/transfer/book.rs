use kernel::prelude::entity::{Book, BookCategory, BookId, DestructBook};

/// Outward view of a book. `Default` is the empty view handed out for unknown ids.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookDto {
    pub id: Option<i64>,
    pub writer: String,
    pub title: String,
    pub content: String,
    pub category: Option<BookCategory>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            writer,
            title,
            content,
            category,
        } = value.into_destruct();
        Self {
            id: Some(id.into()),
            writer: writer.into(),
            title: title.into(),
            content: content.into(),
            category: Some(category),
        }
    }
}

pub struct GetBookDto {
    pub id: BookId,
}

pub struct SearchBookByTitleDto {
    pub keyword: String,
}

pub struct GetBooksByCategoryDto {
    pub category: BookCategory,
}

pub struct GetBooksByWriterDto {
    pub writer: String,
}

pub struct GetBooksByCategoryAndWriterDto {
    pub category: Option<BookCategory>,
    pub writer: String,
}

pub struct CreateBookDto {
    pub writer: String,
    pub title: String,
    pub content: String,
    pub category: BookCategory,
}

pub struct UpdateBookDto {
    pub id: BookId,
    pub title: String,
    pub content: String,
    pub category: BookCategory,
}

pub struct DeleteBookDto {
    pub id: BookId,
}
