//! Zettel Desktop Application
//!
//! A desktop client for a personal zettel note store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod actions;
mod app;
mod components;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("zettel=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting zettel client...");

    dioxus::launch(app::App);
}
