use std::{future::Future, pin::Pin, rc::Rc, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header,
};
use common::{error::AppError, jwt};
use futures::future::{Ready, ok};

/// Attaches `JwtClaims` to the request when a valid bearer token is sent.
///
/// Requests without an `Authorization` header pass through untouched so each
/// procedure can decide whether it needs a user. A malformed or expired token
/// is answered with 401 right away.
pub struct AuthMiddleware {
    jwt_secret: Rc<String>,
}

impl AuthMiddleware {
    pub fn new(jwt_secret: String) -> Self {
        AuthMiddleware {
            jwt_secret: Rc::new(jwt_secret),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
    jwt_secret: Rc<String>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let header_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| value.to_str().unwrap_or_default().to_string());

        let srv = Arc::clone(&self.service);

        let Some(header_value) = header_value else {
            return Box::pin(async move { srv.call(req).await.map(|res| res.map_into_boxed_body()) });
        };

        let claims = match header_value.strip_prefix("Bearer ") {
            Some(token) => jwt::validate_jwt(token.trim(), &self.jwt_secret),
            None => Err(AppError::Unauthorized(
                "Authorization header must use the Bearer scheme".to_string(),
            )),
        };

        Box::pin(async move {
            match claims {
                Ok(claims) => {
                    // insert claims to request object for the procedures
                    req.extensions_mut().insert(claims);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                Err(err) => {
                    log::debug!("Rejected bearer token on {}: {}", req.path(), err);
                    let response = match err {
                        AppError::Unauthorized(_) => err.to_http_response(),
                        _ => AppError::Unauthorized("Invalid token".to_string()).to_http_response(),
                    };
                    Ok(req.into_response(response))
                }
            }
        })
    }
}
