use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use docquiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    log::info!("starting docquiz server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            // The quiz frontend is served from its own dev origin.
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::upload_document)
            .service(handlers::get_session)
            .service(handlers::record_answer)
            .service(handlers::advance_question)
            .service(handlers::retreat_question)
            .service(handlers::restore_session)
            .service(handlers::reset_session)
            .service(handlers::get_results)
            .service(handlers::list_history)
            .service(handlers::clear_history)
            .service(handlers::replay_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
