use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::model::order::Order;
use crate::server::state::AppState;

#[get("/pedidos")]
/// list every order, in insertion order
pub(crate) async fn get_orders(data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let store = data.get_store();
    let orders = store.lock().await;
    if orders.list().is_empty() {
        return Err(CustomError::NoOrders);
    }
    Ok(HttpResponse::Ok().json(orders.list()))
}

#[get("/pedidos/{id}")]
/// get one order by id
pub(crate) async fn get_order(id: web::Path<i64>, data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let id = id.into_inner();
    let store = data.get_store();
    let orders = store.lock().await;
    let order = orders
        .find_index_by_id(id)
        .and_then(|idx| orders.get(idx))
        .ok_or(CustomError::OrderNotFound)?;
    Ok(HttpResponse::Ok().json(order))
}

#[post("/pedidos")]
/// create an order, the caller supplies the id
pub(crate) async fn post_order(body: web::Json<Order>, data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let order = body.into_inner();
    let store = data.get_store();
    let mut orders = store.lock().await;
    if orders.find_index_by_id(order.id).is_some() {
        warn!("order id={} already exists, later lookups keep resolving to the first one", order.id);
    }
    orders.append(order.clone());
    info!("created order id={}", order.id);
    Ok(HttpResponse::Created().json(order))
}

#[put("/pedidos/{id}")]
/// replace every field of an existing order
pub(crate) async fn put_order(
    id: web::Path<i64>,
    body: Result<web::Bytes, actix_web::Error>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
    let id = id.into_inner();
    let store = data.get_store();
    let mut orders = store.lock().await;
    let idx = orders.find_index_by_id(id).ok_or(CustomError::OrderNotFound)?;
    // body is only looked at once the target exists
    let body = body.map_err(|e| {
        warn!("put_order id={} could not read body, {}", id, e);
        match e.as_response_error().status_code() {
            StatusCode::PAYLOAD_TOO_LARGE => CustomError::BodyTooLarge,
            _ => CustomError::InvalidBody,
        }
    })?;
    let order: Order = serde_json::from_slice(&body).map_err(|e| {
        warn!("put_order id={} rejected body, {}", id, e);
        CustomError::InvalidBody
    })?;
    orders.replace_at(idx, order.clone());
    info!("replaced order id={}", id);
    Ok(HttpResponse::Ok().json(order))
}

#[delete("/pedidos/{id}")]
/// delete an order
pub(crate) async fn delete_order(id: web::Path<i64>, data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let id = id.into_inner();
    let store = data.get_store();
    let mut orders = store.lock().await;
    let idx = orders.find_index_by_id(id).ok_or(CustomError::OrderNotFound)?;
    orders.remove_at(idx);
    info!("Pedido eliminado, id={}", id);
    Ok(HttpResponse::NoContent().finish())
}
