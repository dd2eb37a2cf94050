//! Build script for NutriFit
//!
//! Embeds the build number and compile timestamp. The build number comes
//! from the CI environment (`NUTRIFIT_BUILD_NUMBER`) and defaults to 0 for
//! local builds.

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=NUTRIFIT_BUILD_NUMBER");

    let build_number: u64 = std::env::var("NUTRIFIT_BUILD_NUMBER")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=NUTRIFIT_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=NUTRIFIT_BUILD_TIMESTAMP={}", timestamp);
}
