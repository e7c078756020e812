use arcana_domain::config::ApiConfig;
use arcana_kernel::config::load_config;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file_into_api_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8125

[deck]
meanings = "cards/meanings.json"
image_base = "/assets"
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8125);
    assert_eq!(cfg.deck.meanings, std::path::PathBuf::from("cards/meanings.json"));
    assert_eq!(cfg.deck.image_base, "/assets");

    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    let result: Result<ApiConfig, _> = load_config(Some("does/not/exist.toml"));
    assert!(result.is_err());
}

#[test]
fn empty_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "")?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.deck.image_base, "/static/images");

    Ok(())
}
