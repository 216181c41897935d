use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use simple_catalog::db::establish_connection_pool;
use simple_catalog::models::config::ServerConfig;
use simple_catalog::repository::DieselRepository;
use simple_catalog::routes::{categories, products};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(config::Config::try_deserialize)
        .map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(std::io::Error::other)?;

    // First run creates the schema and seed rows; reruns are no-ops.
    let mut conn = pool.get().map_err(std::io::Error::other)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(std::io::Error::other)?;
    for migration in applied {
        log::info!("Applied migration {migration}");
    }
    drop(conn);

    let repo = DieselRepository::new(pool);

    log::info!(
        "Starting catalog server on {}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .service(
                web::scope("/api")
                    .service(categories::list_categories)
                    .service(categories::products_by_category_name)
                    .service(categories::get_category)
                    .service(categories::create_category)
                    .service(categories::update_category)
                    .service(categories::delete_category)
                    .service(products::list_products)
                    .service(products::products_by_category_name)
                    .service(products::get_product)
                    .service(products::create_product)
                    .service(products::update_product)
                    .service(products::delete_product),
            )
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind((server_config.bind_address.as_str(), server_config.port))?
    .run()
    .await
}
