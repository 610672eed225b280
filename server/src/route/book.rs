use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest,
    GetBooksByCategoryRequest, SearchCategoryWriterRequest, SearchTitleRequest, UpdateBookRequest,
};
use crate::response::{BookPresenter, CreatedBookPresenter};
use application::service::{
    CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use kernel::prelude::entity::BookCategory;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/api/v1/books",
            get(|State(module): State<AppModule>| async move {
                Controller::presenter(BookPresenter)
                    .bypass(|| async move { module.pgpool().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookRequest>| async move {
                    Controller::new(BookTransformer, CreatedBookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/books/search/title",
            get(
                |State(module): State<AppModule>, Query(req): Query<SearchTitleRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            module.pgpool().get_books_by_title_containing(&dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/books/search/category-writer",
            get(
                |State(module): State<AppModule>,
                 Query(req): Query<SearchCategoryWriterRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            module.pgpool().get_books_by_category_and_writer(&dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/books/category/:category",
            get(
                |State(module): State<AppModule>, Path(category): Path<BookCategory>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBooksByCategoryRequest::new(category))
                        .handle(|dto| async move {
                            module.pgpool().get_books_by_category(&dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/v1/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.pgpool().get_book(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .put(
                |State(module): State<AppModule>,
                 Path(id): Path<i64>,
                 Json(req): Json<UpdateBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.pgpool().update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.pgpool().delete_book(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
