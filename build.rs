use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary lives three levels up
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    if let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) {
        let dest_path = target_dir.join("config.toml");
        if let Err(e) = fs::copy(config_path, &dest_path) {
            println!("cargo:warning=could not copy config.toml: {}", e);
        }
    }
}
