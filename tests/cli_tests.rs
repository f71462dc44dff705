use std::path::PathBuf;
use std::process::{Command, Output};

fn prompts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("prompts")
}

fn run_recap(target_folder: &std::path::Path, prompts: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recap"))
        .arg("--prompts-dir")
        .arg(prompts)
        .env("TARGET_FOLDER", target_folder)
        // Unroutable; the run must stop before any request is made.
        .env("LLM_SERVER_BASE_URL", "http://127.0.0.1:9/v1")
        .env("TEMPERATURE", "0.5")
        .output()
        .expect("failed to execute recap")
}

#[test]
fn help_is_available() {
    let output = Command::new(env!("CARGO_BIN_EXE_recap"))
        .arg("--help")
        .output()
        .expect("failed to execute recap");

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--target-folder"));
}

#[test]
fn shipped_prompts_load() {
    let prompts = recap::config::Prompts::load(&prompts_dir()).expect("shipped prompts load");
    assert!(!prompts.system.is_empty());
    assert!(prompts.user.ends_with("Transcript:\n"));
}

#[test]
fn reports_missing_transcripts() {
    let folder = tempfile::tempdir().expect("create temporary target folder");
    std::fs::write(folder.path().join("recording.wav"), "audio").unwrap();

    let output = run_recap(folder.path(), &prompts_dir());

    assert!(
        !output.status.success(),
        "recap should fail without transcripts\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No .txt, .srt, or .md files found"),
        "expected missing transcript error, got:\n{}",
        stderr
    );
    assert!(!folder.path().join("recording_summary.md").exists());
}

#[test]
fn reports_missing_prompt_files() {
    let folder = tempfile::tempdir().expect("create temporary target folder");
    std::fs::write(folder.path().join("standup.txt"), "Alice: hi").unwrap();
    let empty_prompts = tempfile::tempdir().expect("create temporary prompts dir");

    let output = run_recap(folder.path(), empty_prompts.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load prompts"),
        "expected prompt loading error, got:\n{}",
        stderr
    );
    assert!(!folder.path().join("standup_summary.md").exists());
}

#[test]
fn print_transcript_echoes_content_before_request() {
    let folder = tempfile::tempdir().expect("create temporary target folder");
    std::fs::write(folder.path().join("standup.txt"), "Alice: the release ships Friday").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_recap"))
        .arg("--prompts-dir")
        .arg(prompts_dir())
        .arg("--print-transcript")
        .env("TARGET_FOLDER", folder.path())
        .env("LLM_SERVER_BASE_URL", "http://127.0.0.1:9/v1")
        .env("TEMPERATURE", "0.5")
        .output()
        .expect("failed to execute recap");

    assert!(
        !output.status.success(),
        "request to an unroutable server should fail\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Alice: the release ships Friday"),
        "expected transcript on stdout, got:\n{}",
        stdout
    );
    assert!(!folder.path().join("standup_summary.md").exists());
}

#[test]
fn dotenv_file_configures_logging_and_settings() {
    let workdir = tempfile::tempdir().expect("create temporary working dir");
    let folder = workdir.path().join("meetings");
    std::fs::create_dir(&folder).unwrap();
    std::fs::write(
        workdir.path().join(".env"),
        format!("RUST_LOG=recap=debug\nTARGET_FOLDER={}\n", folder.display()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_recap"))
        .current_dir(workdir.path())
        .arg("--prompts-dir")
        .arg(prompts_dir())
        .env_remove("RUST_LOG")
        .env_remove("TARGET_FOLDER")
        .output()
        .expect("failed to execute recap");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Loaded environment from"),
        "expected debug logging enabled by .env, got:\n{}",
        stderr
    );
    assert!(
        stderr.contains("No .txt, .srt, or .md files found"),
        "expected missing transcript error for the .env folder, got:\n{}",
        stderr
    );
}
