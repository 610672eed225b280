use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::BookCategory;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Option<i64>,
    writer: String,
    title: String,
    content: String,
    category: Option<BookCategory>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            writer,
            title,
            content,
            category,
        } = value;
        Self {
            id,
            writer,
            title,
            content,
            category,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
}

/// Envelope returned by the create endpoint.
#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    status: ResponseStatus,
    message: &'static str,
    data: BookResponse,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedBookPresenter;

impl Exhaust<BookDto> for CreatedBookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        CreatedBookResponse {
            status: ResponseStatus::Success,
            message: "Success.",
            data: BookResponse::from(input),
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::BookDto;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::prelude::entity::BookCategory;
    use serde_json::json;

    use super::*;

    fn orwell() -> BookDto {
        BookDto {
            id: Some(1),
            writer: "Orwell".to_string(),
            title: "1984".to_string(),
            content: "...".to_string(),
            category: Some(BookCategory::Fiction),
        }
    }

    #[test]
    fn book_view_shape() {
        let response = BookPresenter.emit(orwell());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "id": 1,
                "writer": "Orwell",
                "title": "1984",
                "content": "...",
                "category": "FICTION"
            })
        );
    }

    #[test]
    fn empty_book_view_shape() {
        let response = BookPresenter.emit(BookDto::default());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "id": null,
                "writer": "",
                "title": "",
                "content": "",
                "category": null
            })
        );
        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn create_is_wrapped_in_envelope() {
        let response = CreatedBookPresenter.emit(orwell());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "SUCCESS");
        assert_eq!(value["data"]["id"], 1);
        assert_eq!(value["data"]["writer"], "Orwell");
        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn delete_has_no_content() {
        assert_eq!(BookPresenter.emit(()), StatusCode::NO_CONTENT);
    }

    #[test]
    fn list_keeps_order() {
        let second = BookDto {
            id: Some(2),
            ..orwell()
        };
        let axum::Json(list) = BookPresenter.emit(vec![orwell(), second]);
        let ids = list.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }
}
