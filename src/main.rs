//! # Blockgen Demo Entry Point
//!
//! Runs the headless streaming demo: builds the default world and walks an
//! observer across it, logging what the streamer hands to the renderer.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    if let Err(err) = blockgen::run() {
        eprintln!("world generation failed: {err}");
        std::process::exit(1);
    }
}
