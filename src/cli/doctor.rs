//! Environment readiness check.

use crate::config;
use crate::docset;
use anyhow::Result;
use std::path::Path;

/// Check the project root, document set, and assets directory.
pub async fn run(root: &Path) -> Result<()> {
    println!("Sitekeeper Doctor");
    println!("=================");
    println!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    // Project root
    let root_ok = root.is_dir();
    if root_ok {
        println!("[OK] Project root: {}", root.display());
    } else {
        println!("[!!] Project root is not a directory: {}", root.display());
    }

    // Document set
    let mut docs_ok = false;
    if root_ok {
        match docset::load_documents(root) {
            Ok(docs) if !docs.is_empty() => {
                docs_ok = true;
                println!("[OK] {} HTML document(s) found", docs.len());
            }
            Ok(_) => {
                println!("[!!] No HTML documents directly under the root");
            }
            Err(e) => {
                println!("[!!] Could not read the document set: {e:#}");
            }
        }
    }

    // Assets directory writability
    let assets_dir = std::env::var("SITEKEEPER_ASSETS_DIR")
        .unwrap_or_else(|_| config::DEFAULT_ASSETS_DIR.to_string());
    let assets_root = root.join(&assets_dir);
    let assets_ok = match std::fs::create_dir_all(&assets_root) {
        Ok(()) => {
            let probe = assets_root.join(".sitekeeper-probe");
            match std::fs::write(&probe, b"probe") {
                Ok(()) => {
                    std::fs::remove_file(&probe).ok();
                    println!("[OK] Assets directory writable: {}", assets_root.display());
                    true
                }
                Err(e) => {
                    println!(
                        "[!!] Assets directory not writable: {} ({e})",
                        assets_root.display()
                    );
                    false
                }
            }
        }
        Err(e) => {
            println!(
                "[!!] Cannot create assets directory: {} ({e})",
                assets_root.display()
            );
            false
        }
    };

    println!();
    if root_ok && docs_ok && assets_ok {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
    }

    Ok(())
}
