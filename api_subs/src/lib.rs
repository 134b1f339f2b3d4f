use actix_web::web::{self};

pub mod routes {
    pub mod catalog;
    pub mod pay;
    pub mod sub;
}

pub mod services {
    pub mod catalog;
    pub mod pay;
    pub mod plan;
    pub mod sub;
}

pub mod dtos {
    pub mod catalog;
    pub mod pay;
    pub mod plan;
    pub mod sub;
}

pub fn mount_subs() -> actix_web::Scope {
    web::scope("/sub")
        .service(routes::sub::get_current)
        .service(routes::sub::get_purchases)
}
pub fn mount_catalog() -> actix_web::Scope {
    web::scope("/catalog")
        .service(routes::catalog::get_products)
        .service(routes::catalog::get_product)
        .service(routes::catalog::get_variants)
        .service(routes::catalog::get_plans)
        .service(routes::catalog::post_sync_plans)
}
pub fn mount_pay() -> actix_web::Scope {
    web::scope("/pay")
        .service(routes::pay::post_checkout)
        .service(routes::pay::get_webhook)
        .service(routes::pay::post_webhook)
}
