use std::env;
use std::fs;
use std::path::Path;

/// Fallback used when neither the environment nor the workspace `.env` provides one.
const DEFAULT_ADMIN_PUBKEY: &str = "DADg2nqFXr1C39bJUrfXk8hAWX74nz8ghC9UKxbiBsgA";

fn main() {
    let workspace_dir = env::var("CARGO_MANIFEST_DIR")
        .map(|dir| Path::new(&dir).parent().unwrap().to_path_buf())
        .expect("Failed to find workspace root");

    let env_path = workspace_dir.join(".env");
    dotenv::from_path(&env_path).ok();

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("config.rs");

    let admin_pubkey =
        env::var("ADMIN_PUBKEY").unwrap_or_else(|_| DEFAULT_ADMIN_PUBKEY.to_string());

    let contents = format!("pub const ADMIN: Pubkey = pubkey!(\"{}\");", admin_pubkey);

    fs::write(dest_path, contents).unwrap();
    println!("cargo:rerun-if-env-changed=ADMIN_PUBKEY");
    println!("cargo:rerun-if-changed={}", env_path.display());
}
