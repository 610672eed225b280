use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetBookDto, GetBooksByCategoryAndWriterDto,
    GetBooksByCategoryDto, SearchBookByTitleDto, UpdateBookDto,
};
use kernel::prelude::entity::{BookCategory, BookId};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    writer: String,
    title: String,
    content: String,
    category: BookCategory,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    title: String,
    content: String,
    category: BookCategory,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchTitleRequest {
    keyword: String,
}

#[derive(Debug)]
pub struct GetBooksByCategoryRequest {
    category: BookCategory,
}

impl GetBooksByCategoryRequest {
    pub fn new(category: BookCategory) -> Self {
        Self { category }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchCategoryWriterRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    category: Option<BookCategory>,
    writer: String,
}

// `?category=` is treated like a missing category
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<BookCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => name
            .parse::<BookCategory>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("unknown book category `{name}`"))),
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            writer: input.writer,
            title: input.title,
            content: input.content,
            category: input.category,
        }
    }
}

impl Intake<(i64, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (i64, UpdateBookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id: BookId::new(id),
            title: input.title,
            content: input.content,
            category: input.category,
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<SearchTitleRequest> for BookTransformer {
    type To = SearchBookByTitleDto;
    fn emit(&self, input: SearchTitleRequest) -> Self::To {
        SearchBookByTitleDto {
            keyword: input.keyword,
        }
    }
}

impl Intake<GetBooksByCategoryRequest> for BookTransformer {
    type To = GetBooksByCategoryDto;
    fn emit(&self, input: GetBooksByCategoryRequest) -> Self::To {
        GetBooksByCategoryDto {
            category: input.category,
        }
    }
}

impl Intake<SearchCategoryWriterRequest> for BookTransformer {
    type To = GetBooksByCategoryAndWriterDto;
    fn emit(&self, input: SearchCategoryWriterRequest) -> Self::To {
        GetBooksByCategoryAndWriterDto {
            category: input.category,
            writer: input.writer,
        }
    }
}
