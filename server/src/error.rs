use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    pub fn status_code(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        } else {
            tracing::debug!(error = ?self.0, "request rejected");
        }
        status.into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    use super::ErrorStatus;

    #[test]
    fn kernel_errors_map_to_status_codes() {
        let cases = [
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::Concurrency, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            let response = ErrorStatus::from(Report::new(error)).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn context_survives_attachments() {
        let report = Report::new(KernelError::NotFound).attach_printable("Book not found: 3");
        assert_eq!(ErrorStatus::from(report).status_code(), StatusCode::NOT_FOUND);
    }
}
