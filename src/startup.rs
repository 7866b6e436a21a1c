use crate::configuration::Settings;
use crate::connectors::{self, Connectors};
use crate::errors::ApiError;
use crate::helpers::TokenSigner;
use crate::middleware;
use crate::routes;
use crate::store::ChatStore;
use actix_cors::Cors;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ChatStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let connectors = connectors::init(&settings.connectors)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let signer = TokenSigner::new(
        settings.credentials.secret_key.as_bytes(),
        settings.auth.token_ttl_secs,
    );

    serve(listener, store, connectors, signer)
}

/// Serve on `listener` with explicitly built collaborators.
pub fn serve(
    listener: TcpListener,
    store: Arc<dyn ChatStore>,
    connectors: Connectors,
    signer: TokenSigner,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let signer = web::Data::new(signer);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => format!("Invalid data received: {}", err),
            err => format!("Invalid request body: {}", err),
        };
        tracing::debug!("{}", msg);
        ApiError::Validation(msg).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(json_config.clone())
            .app_data(store.clone())
            .app_data(signer.clone())
            .app_data(connectors.completion.clone())
            .app_data(connectors.identity.clone())
            .app_data(connectors.mapping.clone())
            .app_data(connectors.images.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(web::scope("/auth").service(routes::auth::login_handler))
                    .service(
                        web::scope("/profile")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::auth::profile_handler),
                    )
                    .service(
                        web::scope("/chat")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::chat::message_handler)
                            .service(routes::chat::list_handler)
                            .service(routes::chat::history_handler)
                            .service(routes::chat::delete_handler),
                    )
                    .service(
                        web::scope("/places")
                            .wrap(middleware::authentication::Manager::new())
                            .service(routes::places::nearby_handler)
                            .service(routes::places::geocode_handler),
                    ),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
