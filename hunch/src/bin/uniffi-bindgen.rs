//! UniFFI bindgen CLI shim, invoked by generate-bindings.

fn main() {
    uniffi::uniffi_bindgen_main()
}
