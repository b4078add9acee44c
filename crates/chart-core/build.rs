// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries that the prebuilt Skia binaries import.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Target, not host: build scripts are compiled for the host.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
