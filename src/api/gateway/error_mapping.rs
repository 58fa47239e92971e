//! Error mapping helpers for the HTTP movie gateway.

use http::StatusCode;

use crate::api::error::ApiError;

/// Maps a `reqwest` transport failure into the error taxonomy.
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    if error.is_builder() {
        return ApiError::LocalValidation {
            message: format!("{operation} could not be built: {error}"),
        };
    }

    if error.is_decode() {
        return ApiError::Decode {
            message: format!("{operation} response could not be decoded: {error}"),
        };
    }

    if error.is_timeout() {
        return ApiError::NoResponse {
            message: format!("{operation} timed out: {error}"),
        };
    }

    ApiError::NoResponse {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success status into the error taxonomy.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ApiError {
    let message = maybe_message.unwrap_or_else(|| "no error detail".to_owned());
    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound {
            message: format!("{operation} returned {status}: {message}"),
        }
    } else {
        ApiError::ServerRejected {
            status: status.as_u16(),
            message: format!("{operation} failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::map_http_error;
    use crate::api::error::ApiError;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let error = map_http_error("get movie", StatusCode::NOT_FOUND, None);
        assert!(matches!(error, ApiError::NotFound { .. }), "got {error:?}");
    }

    #[rstest]
    #[case::bad_request(StatusCode::BAD_REQUEST, 400)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, 500)]
    fn other_statuses_map_to_server_rejected(#[case] status: StatusCode, #[case] code: u16) {
        let error = map_http_error("create review", status, Some("boom".to_owned()));
        assert_eq!(
            error,
            ApiError::ServerRejected {
                status: code,
                message: "create review failed: boom".to_owned(),
            }
        );
    }
}
