use crate::configuration::Settings;
use crate::routes;
use crate::services::ResponseGenerator;
use crate::store::Store;
use crate::ws;
use actix::Actor;
use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, Server, ServiceRequest, ServiceResponse};
use actix_web::{error, http, middleware, web, App, HttpServer};
use std::net::TcpListener;
use std::path::PathBuf;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Store,
    bot: ResponseGenerator,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    // Single hub shared by every worker; sessions register with it over its Addr.
    let chat_server = ws::ChatServer::new(store.clone(), bot.clone(), settings.bot.clone()).start();
    let chat_server = web::Data::new(chat_server);

    let static_dir = settings.static_dir.clone();

    let store = web::Data::new(store);
    let bot = web::Data::new(bot);
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        let spa_index = PathBuf::from(&static_dir).join("index.html");

        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(
                web::scope("/api")
                    .service(routes::health_check)
                    .service(
                        web::scope("/projects")
                            .service(routes::project::get::list)
                            .service(routes::project::get::item)
                            .service(routes::project::add::item),
                    )
                    .service(
                        web::scope("/chat")
                            .service(routes::chat::get::history)
                            .service(routes::chat::add::exchange),
                    )
                    .service(web::scope("/feedback").service(routes::feedback::add::item)),
            )
            .service(web::resource("/ws").route(web::get().to(ws::chat_websocket)))
            // Anything the API and asset lookup both miss gets the SPA entry
            // document, so client-side routes survive a hard refresh.
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let spa_index = spa_index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(spa_index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
            .app_data(json_config.clone())
            .app_data(store.clone())
            .app_data(bot.clone())
            .app_data(chat_server.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
