use actix_web::{middleware, web, App, HttpServer};
use labyrinth::{
    api::{openapi::ApiDoc, routes},
    config::AppConfig,
};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr.clone();
    let limits = web::Data::new(config.limits);
    let openapi = ApiDoc::openapi();

    info!("Labyrinth API started at http://{bind_addr}");
    info!("   POST /api/generate");
    info!("   POST /api/solve");
    info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    info!("   Grid ceiling: {} cells", config.limits.max_cells);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(limits.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
