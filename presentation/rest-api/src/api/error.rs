use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// JSON body carried by every non-2xx response: an error name plus an
/// i18n-style message code.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error onto a status code and its error body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
