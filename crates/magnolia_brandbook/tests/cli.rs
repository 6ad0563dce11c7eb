use std::process::Command;

#[test]
fn cli_writes_workbook_to_output_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path_out = tmp.path().join("brand.xlsx");

    let output = Command::new(env!("CARGO_BIN_EXE_magnolia-brandbook"))
        .arg("--output")
        .arg(&path_out)
        .output()
        .expect("run magnolia-brandbook");

    assert!(
        output.status.success(),
        "expected exit 0\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    assert!(path_out.is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✨ Enhanced workbook created successfully!"),
        "unexpected stdout:\n{stdout}"
    );
    assert!(
        stdout.contains(&format!("🌸 File saved as: {}", path_out.display())),
        "unexpected stdout:\n{stdout}"
    );
}

#[test]
fn cli_fails_on_unwritable_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path_out = tmp.path().join("no_such_dir").join("brand.xlsx");

    let output = Command::new(env!("CARGO_BIN_EXE_magnolia-brandbook"))
        .arg("-o")
        .arg(&path_out)
        .output()
        .expect("run magnolia-brandbook");

    assert!(
        !output.status.success(),
        "expected non-zero exit status\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    assert!(!path_out.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to write workbook"),
        "expected error context on stderr, got:\n{stderr}"
    );
    assert!(
        !String::from_utf8_lossy(&output.stdout).contains("created successfully"),
        "success banner printed on failure"
    );
}
