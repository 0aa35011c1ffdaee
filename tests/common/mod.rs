use devportal::configuration::get_configuration;
use devportal::services::ResponseGenerator;
use devportal::startup::run;
use devportal::store::Store;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Store,
}

// The server is spawned on the test runtime; workers live on their own
// threads, so requests can be driven from the test body directly.
pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_configuration().expect("Failed to get configuration");

    // Fresh, unseeded store per test keeps suites isolated from each other.
    let store = Store::new();
    let bot = ResponseGenerator::new();

    let server = run(listener, store.clone(), bot, configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp {
        address,
        port,
        store,
    }
}
