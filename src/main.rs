//! `gengar [OPTIONS_TOML]`: open the panorama viewer.

use std::path::Path;

use gengar::{options::Options, PanoramaSketch, Viewer};

fn load_options() -> Result<Options, gengar::GengarError> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path)),
        None => Ok(Options::default()),
    }
}

fn main() {
    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            // logger not installed yet
            env_logger::init();
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = gengar::logging::init(&options.logging) {
        env_logger::init();
        log::error!("{e}");
        std::process::exit(1);
    }

    log::info!("starting {}", options.window.title);

    let result = Viewer::builder()
        .with_options(options.clone())
        .build()
        .run(PanoramaSketch::new(&options));

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
