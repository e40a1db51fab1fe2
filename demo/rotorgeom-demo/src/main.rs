//! rotorgeom demo

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use rotorgeom_demo::args::{self, Args};
use rotorgeom_demo::*;

fn main() -> eframe::Result {
    let rust_log = args::log_filter(std::env::var("RUST_LOG").ok(), cfg!(debug_assertions));
    std::env::set_var("RUST_LOG", rust_log);
    env_logger::init();

    let args = Args::parse();
    log::info!("starting with {args:?}");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };
    eframe::run_native(
        "rotorgeom demo",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, &args)?))),
    )
}
