//! Tests for the `gen-icons` binary.

use super::common::run_gen_icons;

#[test]
fn test_missing_source_fails() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_gen_icons(dir.path(), &["logo.png"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Source image not found: logo.png"));
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_missing_tool_reports_every_icon() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"png").unwrap();

    let out = run_gen_icons(dir.path(), &["logo.png", "--tool", "no-such-resize-tool"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("21 of 21 icons failed"), "stdout: {}", out.stdout);
}

#[cfg(unix)]
#[test]
fn test_generates_full_icon_set_with_fake_tool() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"png").unwrap();

    // Called as: <tool> -z <h> <w> <source> --out <output>
    let tool = dir.path().join("fake-sips");
    std::fs::write(&tool, "#!/bin/sh\ncp \"$4\" \"$6\"\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let out = run_gen_icons(
        dir.path(),
        &["logo.png", "--tool", tool.to_str().unwrap()],
    );

    assert_eq!(out.code, 0, "stdout: {}\nstderr: {}", out.stdout, out.stderr);
    assert!(out.stdout.contains("All 21 icons generated successfully!"));
    assert!(out.stdout.contains("npx cap sync android"));
    for file in [
        "android/app/src/main/res/mipmap-mdpi/ic_launcher.png",
        "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png",
        "public/icons/icon-256x256.png",
        "public/icons/maskable-icon-192x192.png",
    ] {
        assert!(dir.path().join(file).is_file(), "{file} was not written");
    }
}
