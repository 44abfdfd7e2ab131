use actix_web::{test, web, App, HttpResponse};
use backend::errors::ErrorCode;
use backend::middleware::request_trace::RequestTrace;
use backend::AppError;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

async fn test_error_handler() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::InvalidPins,
        "Example failure".to_string(),
    ))
}

async fn test_ok_handler() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("ok"))
}

#[actix_web::test]
async fn test_error_shape() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/error", web::get().to(test_error_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/error").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);

    // Extract headers before reading body to avoid borrowing issues
    let headers = resp.headers().clone();
    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .unwrap()
        .to_string();
    assert!(!trace_id.is_empty());

    let content_type = headers.get("content-type").unwrap().to_str().unwrap();
    assert_eq!(content_type, "application/problem+json");

    let body = test::read_body(resp).await;
    let problem_details: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Assert all required keys are present
    assert!(problem_details.get("type").is_some());
    assert!(problem_details.get("title").is_some());
    assert!(problem_details.get("status").is_some());
    assert!(problem_details.get("detail").is_some());
    assert!(problem_details.get("code").is_some());
    assert!(problem_details.get("trace_id").is_some());

    // Assert specific values
    assert_eq!(problem_details["code"], "INVALID_PINS");
    assert_eq!(problem_details["detail"], "Example failure");
    assert_eq!(problem_details["status"], 400);

    // Assert trace_id in body equals the header value
    assert_eq!(problem_details["trace_id"].as_str().unwrap(), trace_id);
}

#[actix_web::test]
async fn test_success_path_carries_trace_header() {
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .route("/_test/ok", web::get().to(test_ok_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/_test/ok").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .unwrap();
    assert!(!trace_id.is_empty());
}
