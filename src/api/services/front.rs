use actix_web::{HttpResponse, web};

use crate::config::ServerConfig;

/// GET /
pub async fn welcome(server: web::Data<ServerConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(server.welcome_message.clone())
}
