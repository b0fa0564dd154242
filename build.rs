use std::env;
use std::fs;
use std::path::Path;

/// Claves de configuración que el widget lee con `option_env!`
const CONFIG_KEYS: &[&str] = &["MAP_WIDGET_LOG_LEVEL", "OSM_TILE_URL", "ESRI_TILE_URL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // Las variables del entorno tienen prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
