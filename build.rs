use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

extern crate grass;

const STYLE_FILE: &str = "public/style.scss";

fn styles() -> String {
    let format = if cfg!(debug_assertions) {
        grass::Options::default().style(grass::OutputStyle::Expanded)
    } else {
        grass::Options::default().style(grass::OutputStyle::Compressed)
    };
    grass::from_path(STYLE_FILE, &format).unwrap()
}

fn main() {
    println!("cargo:rerun-if-changed={STYLE_FILE}");
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("style.css");
    let mut f = File::create(dest_path).unwrap();
    f.write_all(styles().as_bytes()).unwrap();
}
