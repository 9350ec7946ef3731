//! Test service builders.
//!
//! `create_test_app` registers the API surface the way exempt routes see it
//! in production (no page gate). `create_gated_app` wraps a handful of dummy
//! page handlers in the session gate so its forward/redirect behavior can be
//! observed end to end.

use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error, HttpResponse};
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::session_gate::SessionGate;
use backend::routes;
use backend::state::app_state::AppState;

/// Build the API surface without the page gate.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

async fn page() -> HttpResponse {
    HttpResponse::Ok().body("page")
}

/// Build an app of dummy page routes wrapped in the session gate.
pub async fn create_gated_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(SessionGate)
            .app_data(web::Data::new(state))
            .route("/", web::get().to(page))
            .route("/blog", web::get().to(page))
            .route("/admin", web::get().to(page))
            .route("/admin/projects", web::get().to(page))
            .route("/auth/login", web::get().to(page))
            .route("/auth/register", web::get().to(page))
            .route("/api/ping", web::get().to(page))
            .route("/static/site.css", web::get().to(page)),
    )
    .await
}
