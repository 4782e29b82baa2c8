//! `/send` request handling.

use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::http::{error_response, json_response, params_from_body, params_from_query, ApiResponse};
use crate::ReminderService;

/// Handle one inbound reminder request. Every outcome is a JSON response.
pub async fn handle(
    service: &ReminderService,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    let method = event.method().clone();
    info!("Send reminder request: {} {}", method, event.uri().path());

    let params = match method {
        Method::GET => params_from_query(&event),
        Method::POST => match params_from_body(event.body()) {
            Ok(params) => params,
            Err(e) => return error_response(&e),
        },
        _ => {
            return json_response(405, &ApiResponse::error("不支援的請求方法", None));
        }
    };

    match service.send_reminder(&params.user_id, &params.date).await {
        Ok(()) => json_response(200, &ApiResponse::success()),
        Err(e) => error_response(&e),
    }
}
