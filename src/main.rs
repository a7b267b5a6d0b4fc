// GUI entry point for the NodeFlow diagram editor.
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::tao::dpi::LogicalSize;
use dioxus_desktop::{Config as DesktopConfig, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting NodeFlow GUI (Dioxus Desktop)...");

    // The default configuration is embedded in the binary; failing to load it
    // means the build itself is broken, so there is nothing to fall back to.
    let app_config = match AppConfig::load_default().context("loading embedded default configuration") {
        Ok(cfg) => {
            tracing::info!(version = %cfg.version, "Configuration loaded");
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {e:#}");
            panic!("embedded default configuration is invalid: {e:#}");
        }
    };

    let window = WindowBuilder::new()
        .with_title(app_config.window.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(app_config.window.width),
            f64::from(app_config.window.height),
        ));

    LaunchBuilder::desktop()
        .with_cfg(DesktopConfig::new().with_window(window))
        .with_context(app_config)
        .launch(App);
}
