//! Forwards credentials from the environment (or a local `.env`) into the
//! wasm build, where they are read with `option_env!`.

const FORWARDED: [&str; 3] = ["GEMINI_API_KEY", "GEMINI_MODEL", "MAPS_API_KEY"];

fn main() {
    let _ = dotenvy::dotenv();

    for name in FORWARDED {
        println!("cargo:rerun-if-env-changed={name}");
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={name}={value}");
        }
    }
    println!("cargo:rerun-if-changed=../.env");
}
