use std::{env, error::Error, fs, path::PathBuf};

const DOCS_FILE: &str = "docs.md";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={DOCS_FILE}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // OUT_DIR is <target>/<profile>/build/<package>-<hash>/out
    let profile_dir = out_dir
        .ancestors()
        .nth(3)
        .ok_or("OUT_DIR is not inside a cargo target directory")?;

    // The server reads docs.md from the directory of its executable
    fs::copy(manifest_dir.join(DOCS_FILE), profile_dir.join(DOCS_FILE))?;

    Ok(())
}
