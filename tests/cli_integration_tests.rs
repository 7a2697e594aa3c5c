//! Integration tests for the logos-format binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn logos_format() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_logos-format"));
    cmd.env_remove("LOGOS_FORMAT_CLANG_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}

const TWEAK: &str = "%hook SpringBoard\n- (void)layout {\n  %orig;\n}\n%end\n";

/// Test that a missing clang-format fails the hook and leaves the file alone.
#[test]
fn test_hook_without_clang_format() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("Tweak.x");
    fs::write(&path, TWEAK).unwrap();

    let output = logos_format()
        .arg("hook")
        .arg("--clang-format")
        .arg(temp.path().join("missing-clang-format"))
        .arg(&path)
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("FormatterUnavailable: "), "{}", stderr);
    assert!(stderr.contains("clang-format not available"));
    assert_eq!(fs::read_to_string(&path).unwrap(), TWEAK);
}

/// Test that a bad config file is reported as an argument error.
#[test]
fn test_invalid_config_file() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("logos-format.toml");
    fs::write(&config, "column-limit = \"wide\"\n").unwrap();

    let output = logos_format()
        .arg("hook")
        .arg("--config")
        .arg(&config)
        .arg(temp.path().join("Tweak.x"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

/// Test that hook and format requires file arguments.
#[test]
fn test_missing_files_is_usage_error() {
    let output = logos_format().arg("hook").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

/// Test the full subprocess path with a stand-in clang-format that echoes stdin.
#[cfg(unix)]
#[test]
fn test_with_echo_formatter() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let fake = temp.path().join("fake-clang-format");
    fs::write(
        &fake,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo \"fake clang-format version 1.0\"; exit 0; fi\ncat\n",
    )
    .unwrap();
    fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

    let path = temp.path().join("Tweak.xm");
    fs::write(&path, TWEAK).unwrap();

    // Echo formatter: nothing changes, hook passes
    let hook = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &fake)
        .arg("hook")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(hook.status.code(), Some(0), "{}", String::from_utf8_lossy(&hook.stderr));
    assert_eq!(fs::read_to_string(&path).unwrap(), TWEAK);

    // Stdout mode prints the restored Logos source
    let format = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &fake)
        .arg("format")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(format.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&format.stdout), TWEAK);

    // Version reports both tools
    let version = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &fake)
        .arg("version")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&version.stdout);
    assert!(stdout.contains("logos-format version"));
    assert!(stdout.contains("fake clang-format version 1.0"));

    // Without --verbose-logos only warnings reach stderr
    assert!(!String::from_utf8_lossy(&hook.stderr).contains("Using clang-format"));
    let verbose = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &fake)
        .args(["--verbose-logos", "hook"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(verbose.status.code(), Some(0));
    let verbose_log = String::from_utf8_lossy(&verbose.stderr);
    assert!(verbose_log.contains("verbose-logos mode enabled"), "{}", verbose_log);
    assert!(verbose_log.contains("Using clang-format"), "{}", verbose_log);

    // A formatter that changes the file makes the hook fail once, then pass
    let rename = temp.path().join("rename-clang-format");
    fs::write(
        &rename,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo \"fake clang-format version 1.0\"; exit 0; fi\nsed 's/layout {/layoutSubviews {/'\n",
    )
    .unwrap();
    fs::set_permissions(&rename, fs::Permissions::from_mode(0o755)).unwrap();

    let changed = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &rename)
        .arg("hook")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(changed.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&changed.stdout).contains("reformatted"));
    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(rewritten.contains("- (void)layoutSubviews {"));
    assert!(rewritten.starts_with("%hook SpringBoard\n"));

    let rerun = logos_format()
        .env("LOGOS_FORMAT_CLANG_FORMAT", &rename)
        .arg("hook")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(rerun.status.code(), Some(0));

    // Saved temps land in the working directory
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    let saved = logos_format()
        .current_dir(&work)
        .env("LOGOS_FORMAT_CLANG_FORMAT", &fake)
        .args(["format", "--save-logos-temps"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(saved.status.code(), Some(0));
    assert!(has_temp_dir(&work));
}

#[cfg(unix)]
fn has_temp_dir(dir: &Path) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().starts_with("logos-format-tmp-"))
}
