// Route exports
pub mod score;

use actix_web::web;

use crate::errors::handle_json_payload_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(score::configure);
}

/// JSON extractor config shared by the server and tests
pub fn json_config(limit_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit_bytes)
        .error_handler(handle_json_payload_error)
}
