mod config;
mod setup;
mod telemetry;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::{build_schema, AppSchema, RequestContext};
use sea_orm::DatabaseConnection;
use tracing_actix_web::TracingLogger;

use config::Config;
use setup::set_up_db;

async fn graphql_request(
    schema: web::Data<AppSchema>,
    db: web::Data<DatabaseConnection>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    // fresh context per request
    let request = request
        .into_inner()
        .data(RequestContext::new(db.get_ref().clone()));
    schema.execute(request).await.into()
}

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/")))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(std::io::Error::other)?;
    telemetry::init(config.log_format);

    let db = set_up_db(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    let schema = build_schema();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(db.clone()))
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(
                web::resource("/")
                    .route(web::post().to(graphql_request))
                    .route(web::get().to(graphql_playground)),
            )
    })
    .bind((config.host.as_str(), config.port))?;

    tracing::info!("🚀 Server ready at: http://localhost:{}", config.port);
    server.run().await
}
