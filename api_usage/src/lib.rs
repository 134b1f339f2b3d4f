use actix_web::web::{self};

pub mod routes {
    pub mod usage;
}

pub mod services {
    pub mod usage;
}

pub mod dtos {
    pub mod usage;
}

pub fn mount_usage() -> actix_web::Scope {
    web::scope("/usage")
        .service(routes::usage::post_spend)
        .service(routes::usage::get_summary)
}
