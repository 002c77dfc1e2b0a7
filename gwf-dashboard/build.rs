//! Build script for gwf-dashboard.
//!
//! Reads every well's forecast and score artifacts from the artifact
//! directory (`GWF_ARTIFACT_DIR`, default `../fixtures`) and writes them to
//! OUT_DIR so they can be embedded via `include_str!` at compile time.
//! Gzipped forecast tables are inflated here. A well without a file gets
//! an empty placeholder, which the app reads as "no data".

use gwf_core::artifact::{forecast_file_name, score_file_name, ArtifactSet};
use gwf_core::well::WellKey;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let artifact_dir = env::var("GWF_ARTIFACT_DIR").unwrap_or_else(|_| "../fixtures".to_string());

    let artifacts = ArtifactSet::from_dir(&artifact_dir).unwrap_or_else(|e| {
        panic!("Failed to read artifacts from {}: {:#}", artifact_dir, e);
    });

    for key in WellKey::ALL {
        let files = artifacts.get(key);
        let outputs = [
            (
                forecast_file_name(key),
                files.and_then(|f| f.forecast_csv.as_deref()),
            ),
            (
                score_file_name(key),
                files.and_then(|f| f.scores_json.as_deref()),
            ),
        ];
        for (name, contents) in outputs {
            let dest = Path::new(&out_dir).join(&name);
            if contents.is_none() {
                println!(
                    "cargo:warning=Artifact {} not found in {}, using empty placeholder",
                    name, artifact_dir
                );
            }
            fs::write(&dest, contents.unwrap_or("")).unwrap_or_else(|e| {
                panic!("Failed to write {}: {}", dest.display(), e);
            });
        }
    }

    println!("cargo:rerun-if-env-changed=GWF_ARTIFACT_DIR");
    println!("cargo:rerun-if-changed={}", artifact_dir);
    println!("cargo:rerun-if-changed=build.rs");
}
