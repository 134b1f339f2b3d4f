use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}

// Auth middleware
pub fn auth_middleware(jwt_secret: &str) -> AuthMiddleware {
    AuthMiddleware::new(jwt_secret.to_string())
}
