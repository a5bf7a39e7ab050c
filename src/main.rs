#[cfg(target_arch = "wasm32")]
pub fn main() {
    registro::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
