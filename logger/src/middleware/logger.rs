use std::{rc::Rc, time::Instant};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use colored::{ColoredString, Colorize};
use common::jwt::JwtClaims;
use futures::future::{LocalBoxFuture, Ready, ready};
use log::info;

/// Logs one line per request: status, method, path, latency and caller.
///
/// The caller is read from the claims the auth middleware attached, so this
/// middleware has to be registered outside of it.
pub struct LoggerMiddleware {
    console_logging_enabled: bool,
}

impl LoggerMiddleware {
    pub fn new(console_logging_enabled: bool) -> Self {
        Self {
            console_logging_enabled,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggerMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddlewareService {
            service: Rc::new(service),
            console_logging_enabled: self.console_logging_enabled,
        }))
    }
}

pub struct LoggerMiddlewareService<S> {
    service: Rc<S>,
    console_logging_enabled: bool,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let query_string = req.query_string().to_string();
        let enabled = self.console_logging_enabled;
        let srv = Rc::clone(&self.service);

        Box::pin(async move {
            let started = Instant::now();
            let res = srv.call(req).await?;

            if enabled {
                let user_id = res
                    .request()
                    .extensions()
                    .get::<JwtClaims>()
                    .map(|claims| claims.user_id.to_string());
                let target = if query_string.is_empty() {
                    path
                } else {
                    format!("{}?{}", path, query_string)
                };

                info!(
                    "[{}] {} {} {} user_id={}",
                    status_label(res.status().as_u16()),
                    method_label(&method),
                    target.bright_white(),
                    format!("({}ms)", started.elapsed().as_millis()).bright_black(),
                    user_id.unwrap_or_else(|| "None".to_string()).bright_blue(),
                );
            }

            Ok(res)
        })
    }
}

fn status_label(status: u16) -> ColoredString {
    match status {
        200..=299 => status.to_string().green(),
        300..=399 => status.to_string().yellow(),
        400..=499 => status.to_string().bright_red(),
        _ => status.to_string().red(),
    }
}

fn method_label(method: &str) -> ColoredString {
    match method {
        "GET" => method.blue(),
        "POST" => method.yellow(),
        "PUT" => method.purple(),
        "DELETE" => method.red(),
        _ => method.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};

    #[::core::prelude::v1::test]
    fn labels_keep_their_text() {
        colored::control::set_override(false);
        assert_eq!(status_label(404).to_string(), "404");
        assert_eq!(method_label("PATCH").to_string(), "PATCH");
    }

    #[actix_web::test]
    async fn responses_pass_through_unchanged() {
        let app = test::init_service(
            App::new()
                .wrap(LoggerMiddleware::new(true))
                .route("/teapot", web::get().to(|| async { HttpResponse::ImATeapot().body("short and stout") })),
        )
        .await;

        let req = test::TestRequest::get().uri("/teapot?x=1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);

        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"short and stout");
    }
}
