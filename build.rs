//! Records the resolved AWS SDK version for the `sdk` module.
//!
//! Reads `Cargo.lock` and exports the `aws-config` version as the
//! compile-time variable `AWS_SDK_VERSION`. When the package cannot be
//! found the variable is left unset and the lookup fails at invocation time.

use std::path::PathBuf;

use serde::Deserialize;

const SDK_PACKAGE: &str = "aws-config";

#[derive(Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Deserialize)]
struct LockedPackage {
    name: String,
    version: String,
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let lockfile_path = PathBuf::from(manifest_dir).join("Cargo.lock");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", lockfile_path.display());

    let contents = match std::fs::read_to_string(&lockfile_path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("cargo:warning=cannot read {}: {err}", lockfile_path.display());
            return;
        }
    };

    let lockfile: Lockfile = match toml::from_str(&contents) {
        Ok(lockfile) => lockfile,
        Err(err) => {
            let reason = err.to_string().replace('\n', " ");
            println!("cargo:warning=cannot parse {}: {reason}", lockfile_path.display());
            return;
        }
    };

    match lockfile.package.iter().find(|p| p.name == SDK_PACKAGE) {
        Some(package) => println!("cargo:rustc-env=AWS_SDK_VERSION={}", package.version),
        None => println!("cargo:warning={SDK_PACKAGE} not found in Cargo.lock"),
    }
}
