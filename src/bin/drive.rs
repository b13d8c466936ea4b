#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("The drive demo runs in the browser. Build it with `trunk build drive.html --dist dist/drive`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio::demo::run();
}
