use std::env;
use std::path::PathBuf;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use recipeshare::ServerConfig;
use recipeshare::db::establish_connection_pool;
use recipeshare::repository::DieselRepository;
use recipeshare::routes::auth::{login, logout};
use recipeshare::routes::ingredients::{get_ingredient, list_ingredients, upload_ingredients};
use recipeshare::routes::recipes::{
    add_favorite, add_recipe, add_to_cart, delete_recipe, download_shopping_cart, edit_recipe,
    get_recipe, list_recipes, remove_favorite, remove_from_cart,
};
use recipeshare::routes::tags::{add_tag, get_tag, list_tags};
use recipeshare::routes::users::{
    list_subscriptions, me, profile, register, subscribe, unsubscribe,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let media_root = PathBuf::from(env::var("MEDIA_ROOT").unwrap_or("media".to_string()));

    if let Err(e) = std::fs::create_dir_all(&media_root) {
        log::error!("Failed to create media directory: {e}");
        std::process::exit(1);
    }

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let config = ServerConfig {
        media_root: media_root.clone(),
    };

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/media", media_root.clone()))
            .service(
                web::scope("/api")
                    .service(login)
                    .service(logout)
                    .service(register)
                    .service(me)
                    .service(list_subscriptions)
                    .service(profile)
                    .service(subscribe)
                    .service(unsubscribe)
                    .service(list_tags)
                    .service(add_tag)
                    .service(get_tag)
                    .service(list_ingredients)
                    .service(upload_ingredients)
                    .service(get_ingredient)
                    .service(list_recipes)
                    .service(add_recipe)
                    .service(download_shopping_cart)
                    .service(get_recipe)
                    .service(edit_recipe)
                    .service(delete_recipe)
                    .service(add_favorite)
                    .service(remove_favorite)
                    .service(add_to_cart)
                    .service(remove_from_cart),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
