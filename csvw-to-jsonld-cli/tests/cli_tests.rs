use std::process::Command;
use std::sync::Once;
use tracing::{error, info};

static INIT: Once = Once::new();

/// Initialize logging exactly once for all tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    });
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--")
        .args(args)
        .output()
        .expect("failed to launch cargo run")
}

#[test]
fn test_convert_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("Converting the test data to stdout");
    let output = run(&["convert", "--metadata", "../test-data/metadata.jsonld"]);

    if !output.status.success() {
        error!("Command failed with status: {}", output.status);
        error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        error!("stdout: {}", String::from_utf8_lossy(&output.stdout));
    }
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let graph = rendered["@graph"]
        .as_array()
        .expect("output must carry a @graph array");
    assert_eq!(graph.len(), 2);
    assert_eq!(
        graph[0]["@id"],
        serde_json::json!("http://example.org/person/1")
    );

    info!("Test completed successfully");
    Ok(())
}

#[test]
fn test_validate_test_metadata() {
    init_logging();

    let output = run(&["validate", "--metadata", "../test-data/metadata.jsonld"]);

    if !output.status.success() {
        error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success());
}

#[test]
fn test_generate_metadata_roundtrips_through_validate() {
    init_logging();

    let dir = std::env::temp_dir().join("csvw-to-jsonld-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("metadata.jsonc");
    let path_str = path.to_string_lossy().to_string();

    let generated = run(&["generate-metadata", "--output", &path_str]);
    assert!(generated.status.success());

    let validated = run(&["validate", "--metadata", &path_str]);
    if !validated.status.success() {
        error!("stderr: {}", String::from_utf8_lossy(&validated.stderr));
    }
    assert!(validated.status.success());
}
