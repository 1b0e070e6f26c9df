//! Generates foreign-language bindings for the `AttestKit` crates.

fn main() {
    uniffi::uniffi_bindgen_main();
}
