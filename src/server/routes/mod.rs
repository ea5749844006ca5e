use actix_web::error::JsonPayloadError;
use actix_web::web;
use log::warn;
use crate::server::controller::error::CustomError;
use crate::server::controller::orders::{delete_order, get_order, get_orders, post_order, put_order};

/// Largest accepted request body, shared by the json and raw body extractors.
pub(crate) const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Register every order route, along with the extractor configs that turn
/// malformed ids and bodies into JSON errors.
pub(crate) fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default().error_handler(|err, req| {
            warn!("invalid id in path={}, {}", req.path(), err);
            CustomError::InvalidId.into()
        }),
    )
    .app_data(
        web::JsonConfig::default()
            .limit(BODY_LIMIT)
            .content_type_required(false)
            .error_handler(|err, req| {
                warn!("invalid order body on path={}, {}", req.path(), err);
                match err {
                    JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                        CustomError::BodyTooLarge.into()
                    }
                    _ => CustomError::InvalidBody.into(),
                }
            }),
    )
    .app_data(web::PayloadConfig::default().limit(BODY_LIMIT))
    .service(get_orders)
    .service(get_order)
    .service(post_order)
    .service(put_order)
    .service(delete_order);
}
