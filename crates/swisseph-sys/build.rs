//! Build script for swisseph-sys
//!
//! Locates a prebuilt `libswe` or compiles the Swiss Ephemeris C sources.

use std::env;
use std::path::PathBuf;

/// C translation units making up libswe (same set as the upstream Makefile).
#[cfg_attr(not(feature = "build-native"), allow(dead_code))]
const SWE_SOURCES: &[&str] = &[
    "swecl.c",
    "swedate.c",
    "swehel.c",
    "swehouse.c",
    "swejpl.c",
    "swemmoon.c",
    "swemplan.c",
    "sweph.c",
    "swephlib.c",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");
    println!("cargo:rerun-if-env-changed=SWISSEPH_SRC_DIR");

    // Strategy 1: pre-built library via environment variable
    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=swe");
        link_system_deps();
        return;
    }

    // Strategy 2: compile from source if the feature is enabled
    #[cfg(feature = "build-native")]
    {
        build_from_source();
        return;
    }

    // Strategy 3: pkg-config
    #[allow(unreachable_code)]
    if try_pkg_config() {
        return;
    }

    // Strategy 4: common install locations
    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/opt/homebrew/lib",
    ];

    for path in &search_paths {
        let dir = PathBuf::from(path);
        if dir.join("libswe.so").exists()
            || dir.join("libswe.dylib").exists()
            || dir.join("libswe.a").exists()
        {
            println!("cargo:rustc-link-search=native={}", path);
            println!("cargo:rustc-link-lib=swe");
            link_system_deps();
            return;
        }
    }

    // The declarations alone still compile; only code that calls into the
    // engine needs the library at link time.
    println!("cargo:warning=libswe not found; Swiss Ephemeris symbols will be unresolved.");
    println!("cargo:warning=Set SWISSEPH_LIB_DIR, install libswe, or enable 'build-native' with SWISSEPH_SRC_DIR.");
}

fn try_pkg_config() -> bool {
    match pkg_config::Config::new().probe("swisseph") {
        Ok(_) => {
            println!("cargo:info=Found swisseph via pkg-config");
            true
        }
        Err(_) => false,
    }
}

#[cfg(feature = "build-native")]
fn build_from_source() {
    let src_dir = match env::var("SWISSEPH_SRC_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => panic!("feature 'build-native' requires SWISSEPH_SRC_DIR to point at the Swiss Ephemeris sources"),
    };

    let missing: Vec<&str> = SWE_SOURCES
        .iter()
        .copied()
        .filter(|file| !src_dir.join(file).exists())
        .collect();
    if !missing.is_empty() {
        panic!(
            "Swiss Ephemeris sources missing in {}: {}",
            src_dir.display(),
            missing.join(", ")
        );
    }

    let mut build = cc::Build::new();
    build.include(&src_dir).warnings(false).opt_level(2);
    for file in SWE_SOURCES {
        let path = src_dir.join(file);
        println!("cargo:rerun-if-changed={}", path.display());
        build.file(path);
    }
    build.compile("swe");

    // Expose the header directory to dependent build scripts
    println!("cargo:include={}", src_dir.display());
    link_system_deps();
}

fn link_system_deps() {
    // libswe uses libm; static builds need it spelled out
    #[cfg(all(feature = "system-libs", unix))]
    println!("cargo:rustc-link-lib=m");

    #[cfg(all(feature = "build-native", unix))]
    println!("cargo:rustc-link-lib=m");
}
