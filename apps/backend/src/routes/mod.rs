use actix_web::web;

pub mod auth;
pub mod health;
pub mod profile;
pub mod projects;

/// Configure application routes.
///
/// `main.rs` wraps the whole app in the session gate and trace middleware;
/// tests register the same paths through this function so endpoint behavior
/// can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Public content routes: /api/projects/**, /api/profile
    cfg.service(web::scope("/api/projects").configure(projects::configure_public_routes));
    cfg.service(web::scope("/api/profile").configure(profile::configure_public_routes));

    // Back-office routes: /api/admin/**
    cfg.service(
        web::scope("/api/admin")
            .configure(projects::configure_admin_routes)
            .configure(profile::configure_admin_routes),
    );
}
