//! Build script for nvdoc-manifest - bakes the package version into the crate.
//!
//! Release pipelines set `NVDOC_PACKAGE_VERSION`; it is exposed to the crate
//! through `option_env!` so the version accessor never queries live state.

fn main() {
    println!("cargo:rerun-if-env-changed=NVDOC_PACKAGE_VERSION");

    if let Ok(version) = std::env::var("NVDOC_PACKAGE_VERSION")
        && !version.trim().is_empty()
    {
        println!("cargo:rustc-env=NVDOC_PACKAGE_VERSION={}", version.trim());
    }
}
