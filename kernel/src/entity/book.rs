mod category;
mod content;
mod id;
mod title;
mod writer;

pub use self::{category::*, content::*, id::*, title::*, writer::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    writer: BookWriter,
    title: BookTitle,
    content: BookContent,
    category: BookCategory,
}

impl Book {
    pub fn new(
        id: BookId,
        writer: BookWriter,
        title: BookTitle,
        content: BookContent,
        category: BookCategory,
    ) -> Self {
        Self {
            id,
            writer,
            title,
            content,
            category,
        }
    }
}

/// A book that has not been stored yet. The store assigns its id on insert.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDraft {
    writer: BookWriter,
    title: BookTitle,
    content: BookContent,
    category: BookCategory,
}

impl BookDraft {
    pub fn new(
        writer: BookWriter,
        title: BookTitle,
        content: BookContent,
        category: BookCategory,
    ) -> Self {
        Self {
            writer,
            title,
            content,
            category,
        }
    }

    pub fn into_book(self, id: BookId) -> Book {
        let DestructBookDraft {
            writer,
            title,
            content,
            category,
        } = self.into_destruct();
        Book::new(id, writer, title, content, category)
    }
}
