use actix_web::{test, App};
use backend::routes;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

#[actix_web::test]
async fn health_returns_ok() {
    let app = test::init_service(App::new().configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}
