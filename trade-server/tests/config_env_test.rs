// Kept in its own test binary: it mutates the process environment.
use trade_server::config::ServerConfig;

#[test]
fn test_env_overrides_file() {
    let path = std::env::temp_dir().join(format!(
        "trade-server-env-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "port = 9321\nhost = \"127.0.0.1\"\n").unwrap();
    std::env::set_var("TRADE_SERVER_PORT", "9555");
    std::env::set_var("TRADE_SERVER_LOG_LEVEL", "warn");

    let config = ServerConfig::load(&path);
    std::env::remove_var("TRADE_SERVER_PORT");
    std::env::remove_var("TRADE_SERVER_LOG_LEVEL");
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.port, 9555);
    assert_eq!(config.log_level, "warn");
    // Untouched keys still come from the file
    assert_eq!(config.host, "127.0.0.1");
}
