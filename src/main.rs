use devportal::banner;
use devportal::configuration::get_configuration;
use devportal::services::bot::ResponseGenerator;
use devportal::startup::run;
use devportal::store::Store;
use devportal::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("devportal".into(), "info".into());
    init_subscriber(subscriber);

    banner::print_banner();

    let settings = get_configuration().expect("Failed to read configuration.");

    let store = Store::with_demo_projects();
    let bot = ResponseGenerator::new();

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|err| panic!("failed to bind to {address}: {err}"));

    banner::print_startup_info(&settings.app_host, settings.app_port);
    tracing::info!(
        static_dir = %settings.static_dir,
        bot = %settings.bot.name,
        "Start server at {:?}",
        &address
    );

    run(listener, store, bot, settings).await?.await
}
