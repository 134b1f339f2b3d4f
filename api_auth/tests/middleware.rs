use actix_web::{App, HttpResponse, http::StatusCode, test, web};
use common::jwt::{ClaimsSpec, JwtClaims, Role, generate_jwt};
use uuid::Uuid;

const SECRET: &str = "test-secret";

async fn whoami(claims: Option<web::ReqData<JwtClaims>>) -> HttpResponse {
    match claims {
        Some(claims) => HttpResponse::Ok().body(claims.user_id.to_string()),
        None => HttpResponse::Ok().body("anonymous"),
    }
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(api_auth::auth_middleware(SECRET))
                .route("/me", web::get().to(whoami)),
        )
        .await
    };
}

#[actix_web::test]
async fn anonymous_requests_pass_through() {
    let app = app!();
    let req = test::TestRequest::get().uri("/me").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"anonymous");
}

#[actix_web::test]
async fn valid_token_attaches_claims() {
    let app = app!();
    let user_id = Uuid::new_v4();
    let token = generate_jwt(
        ClaimsSpec {
            user_id,
            email: None,
            role: Role::User,
        },
        SECRET,
        1,
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], user_id.to_string().as_bytes());
}

#[actix_web::test]
async fn forged_token_is_rejected() {
    let app = app!();
    let token = generate_jwt(
        ClaimsSpec {
            user_id: Uuid::new_v4(),
            email: None,
            role: Role::Admin,
        },
        "someone-elses-secret",
        1,
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Authorization error: Invalid token");
}

#[actix_web::test]
async fn non_bearer_scheme_is_rejected() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
