//! Entry point for the WASM application

pub fn main() {
    proconverter_frontend::start();
}
