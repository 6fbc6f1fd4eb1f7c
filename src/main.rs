use actix_cors::Cors;
use actix_web::{
    self,
    middleware::{from_fn, Logger},
    web, App, HttpServer,
};
use std::sync::{Arc, LazyLock};

use giftdesk::{
    configs::connect_database,
    constants,
    middlewares::{require_api_key, AccessPolicy},
    modules::{
        message::{
            repository::MessageRepository, repository_memory::InMemoryMessageRepository,
            repository_pg::MessageRepositoryPg, service::MessageService,
        },
        notification::mailer::{ResendConfig, ResendMailer},
    },
};

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

async fn message_store() -> std::io::Result<Arc<dyn MessageRepository + Send + Sync>> {
    match ENV.database_url.as_deref() {
        Some(url) => {
            let pool = connect_database(url)
                .await
                .map_err(|e| std::io::Error::other(format!("Database connection error: {e}")))?;
            Ok(Arc::new(MessageRepositoryPg::new(pool)))
        }
        None => {
            log::warn!("DATABASE_URL is not set, messages are kept in memory only");
            Ok(Arc::new(InMemoryMessageRepository::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let message_service = MessageService::with_dependencies(message_store().await?);
    let mailer = web::Data::new(ResendMailer::new(ResendConfig {
        api_key: ENV.resend_api_key.clone(),
        api_url: ENV.resend_api_url.clone(),
        from: ENV.notify_from.clone(),
        to: ENV.notify_to.clone(),
    }));
    let access_policy = web::Data::new(AccessPolicy::new(ENV.anon_key.clone()));

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
            .allowed_headers(vec!["Content-Type", "Authorization", "X-Client-Info", "Apikey"])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(message_service.clone()))
            .app_data(access_policy.clone())
            .app_data(mailer.clone())
            .service(health_check)
            .service(
                web::scope("/api")
                    .wrap(from_fn(require_api_key))
                    .wrap(cors)
                    .configure(giftdesk::modules::message::route::configure),
            )
            .configure(giftdesk::modules::notification::route::configure::<ResendMailer>)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
