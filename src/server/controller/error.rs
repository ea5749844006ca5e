use actix_web::{error, HttpResponse};
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::model::{ErrorResponse, MessageResponse};

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("El ID proporcionado no es un numero valido")]
    InvalidId,
    #[display("El pedido no existe")]
    OrderNotFound,
    #[display("No se encontraron pedidos")]
    NoOrders,
    #[display("El cuerpo de la solicitud no es un pedido valido")]
    InvalidBody,
    #[display("El cuerpo de la solicitud es demasiado grande")]
    BodyTooLarge,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidId | CustomError::InvalidBody => StatusCode::BAD_REQUEST,
            CustomError::OrderNotFound | CustomError::NoOrders => StatusCode::NOT_FOUND,
            CustomError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match *self {
            // an empty store is informational, not an error
            CustomError::NoOrders => res.json(MessageResponse { message: self.to_string() }),
            _ => res.json(ErrorResponse { error: self.to_string() }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use serde_json::{json, Value};

    async fn body_of(err: CustomError) -> (StatusCode, Value) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn error_payloads() {
        assert_eq!(
            body_of(CustomError::InvalidId).await,
            (StatusCode::BAD_REQUEST, json!({"ERROR": "El ID proporcionado no es un numero valido"}))
        );
        assert_eq!(
            body_of(CustomError::OrderNotFound).await,
            (StatusCode::NOT_FOUND, json!({"ERROR": "El pedido no existe"}))
        );
        assert_eq!(
            body_of(CustomError::NoOrders).await,
            (StatusCode::NOT_FOUND, json!({"message": "No se encontraron pedidos"}))
        );
        assert_eq!(
            body_of(CustomError::InvalidBody).await,
            (StatusCode::BAD_REQUEST, json!({"ERROR": "El cuerpo de la solicitud no es un pedido valido"}))
        );
        assert_eq!(
            body_of(CustomError::BodyTooLarge).await,
            (StatusCode::PAYLOAD_TOO_LARGE, json!({"ERROR": "El cuerpo de la solicitud es demasiado grande"}))
        );
    }
}
