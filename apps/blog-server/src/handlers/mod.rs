//! HTTP handlers and route configuration.

mod auth;
mod contact;
mod health;
mod pages;
mod posts;
mod tags;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/contact", web::post().to(contact::submit_enquiry))
            .route("/subscribe", web::post().to(contact::subscribe))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Tag routes
            .service(
                web::scope("/tags")
                    .route("", web::get().to(tags::list))
                    .route("/{name}", web::get().to(tags::posts_by_tag)),
            )
            // Page routes
            .service(
                web::scope("/pages")
                    .route("/{slug}", web::get().to(pages::get_by_slug))
                    .route("/{id}", web::put().to(pages::update)),
            ),
    );
}
