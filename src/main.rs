#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("brand-portfolio is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    brand_portfolio::frontend::run();
}
