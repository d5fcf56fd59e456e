use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use log::info;
use survey_app_backend::{
    config::app_config::AppConfig, configure_with_limit, db::DB, middlewares::cors,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = AppConfig::init();
    let db = DB::init(&app_config.db).await?;
    let db_data = Data::new(db.clone());
    let routes = configure_with_limit(app_config.max_body_bytes);

    info!("Starting server at http://{}", app_config.server_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(cors::cors())
            .wrap(Logger::default())
            .app_data(db_data.clone())
            .configure(routes.clone())
    })
    .bind(&app_config.server_addr)?
    .run()
    .await?;

    db.close().await;
    Ok(())
}
