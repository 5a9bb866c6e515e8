use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use volara_booking::BookingError;
use volara_store::StoreError;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    AuthorizationError(String),
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::AuthorizationError(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur interne du serveur".to_string(),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("internal server error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erreur interne du serveur".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

/// Store failures become opaque 500s; the operation name keeps the log entry
/// traceable.
pub fn internal(op: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        tracing::error!("{op} failed: {e}");
        AppError::InternalServerError(e.to_string())
    }
}

/// Map the booking taxonomy onto the preserved wire surface: business
/// rejections carry actionable French messages, store failures are logged
/// with the operation and hidden.
pub fn booking(op: &'static str) -> impl FnOnce(BookingError) -> AppError {
    move |e| match e {
        BookingError::NotFound => {
            AppError::NotFoundError("Réservation ou vol non trouvé".to_string())
        }
        BookingError::SeatAlreadyTaken(_) => AppError::ValidationError(
            "Cette place est déjà réservée. Veuillez en choisir une autre.".to_string(),
        ),
        BookingError::FlightFull => {
            AppError::ValidationError("Plus de places disponibles pour ce vol".to_string())
        }
        BookingError::SeatOutOfRange { seat, total } => AppError::ValidationError(format!(
            "La place {seat} n'existe pas dans cette cabine (1 à {total})"
        )),
        BookingError::Store(e) => {
            tracing::error!("{op} failed: {e}");
            AppError::InternalServerError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn statuses_match_error_kinds() {
        assert_eq!(
            status_of(AppError::AuthenticationError("t".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::AuthorizationError("t".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::ValidationError("t".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFoundError("t".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::InternalServerError("t".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn booking_rejections_map_to_the_preserved_surface() {
        assert_eq!(
            status_of(booking("t")(BookingError::SeatAlreadyTaken(4))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(booking("t")(BookingError::FlightFull)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(booking("t")(BookingError::SeatOutOfRange { seat: 61, total: 60 })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(booking("t")(BookingError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }
}
