//! Build script for the file sharing frontend.
//!
//! Bakes `FILE_SERVER_API` into the WebAssembly binary. The value comes from
//! the process environment or, failing that, from an env file loaded with
//! `dotenvy` (`FILE_SHARING_ENV_FILE`, default `.env`, relative to this
//! crate). Unset means same-origin (`/`).

use std::env;
use std::path::PathBuf;

const API_VAR: &str = "FILE_SERVER_API";
const ENV_FILE_VAR: &str = "FILE_SHARING_ENV_FILE";

fn main() {
    println!("cargo:rerun-if-env-changed={}", API_VAR);
    println!("cargo:rerun-if-env-changed={}", ENV_FILE_VAR);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let env_file = env::var(ENV_FILE_VAR).unwrap_or_else(|_| ".env".to_string());
    let env_path = manifest_dir.join(env_file);

    // Existing process variables take precedence over the file.
    if env_path.exists() {
        println!("cargo:rerun-if-changed={}", env_path.display());
        if let Err(e) = dotenvy::from_path(&env_path) {
            println!("cargo:warning=Failed to load {}: {}", env_path.display(), e);
        }
    }

    let api = env::var(API_VAR).unwrap_or_else(|_| "/".to_string());
    println!("cargo:rustc-env={}={}", API_VAR, api);
}
