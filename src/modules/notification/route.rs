use actix_web::{
    http::Method,
    middleware::{from_fn, DefaultHeaders},
    web,
};

use crate::{
    middlewares::require_api_key,
    modules::notification::{handle, mailer::Mailer},
};

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization, X-Client-Info, Apikey"),
];

fn cors_headers() -> DefaultHeaders {
    CORS_HEADERS.iter().fold(DefaultHeaders::new(), |headers, header| headers.add(*header))
}

pub fn configure<M>(cfg: &mut web::ServiceConfig)
where
    M: Mailer + Send + Sync + 'static,
{
    cfg.service(
        web::scope("/functions/v1")
            .wrap(from_fn(require_api_key))
            .wrap(cors_headers())
            .service(
                web::resource("/send-message-email")
                    .route(web::post().to(handle::send_message_email::<M>))
                    .route(web::method(Method::OPTIONS).to(handle::preflight)),
            ),
    );
}
