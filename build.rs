use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Forward .env entries as compile-time variables read by config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults (API_BASE_URL=http://127.0.0.1:8000/api).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    for key in [
        "API_BASE_URL",
        "ENVIRONMENT",
        "ENABLE_LOGGING",
        "LOGIN_PAGE",
        "REGISTER_PAGE",
        "HOME_PAGE",
        "ADMIN_HOME_PAGE",
        "BOOKING_PAGE",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
