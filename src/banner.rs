/// Display a banner with version and useful information
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    let banner = format!(
        r#"
██████  ███████ ██    ██ ██████   ██████  ██████  ████████  █████  ██
██   ██ ██      ██    ██ ██   ██ ██    ██ ██   ██    ██    ██   ██ ██
██   ██ █████   ██    ██ ██████  ██    ██ ██████     ██    ███████ ██
██   ██ ██       ██  ██  ██      ██    ██ ██   ██    ██    ██   ██ ██
██████  ███████   ████   ██       ██████  ██   ██    ██    ██   ██ ███████

╭────────────────────────────────────────────────────────╮
│  {}                                             │
│  Version: {}                                        │
│  Edition: {}                                         │
╰────────────────────────────────────────────────────────╯

"#,
        capitalize(name),
        version,
        "2021"
    );

    println!("{}", banner);
}

/// Display startup information
pub fn print_startup_info(host: &str, port: u16) {
    let info = format!(
        r#"
📋 Configuration Loaded
  🌐 Server Address: http://{}:{}
  💬 WebSocket chat at /ws
  🤖 Rule-based responder ready
  📦 In-memory store initialized

"#,
        host, port
    );

    println!("{}", info);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
