use std::fs;
use std::path::PathBuf;

use anyhow::bail;
use sustainvec_cli::{for_each_input, InputSummary};

#[test]
fn directory_mode_logs_failures_and_continues() {
    let dir = tempfile::tempdir().expect("temp dir");
    for name in ["b.json", "a.json", "c.json", "notes.txt"] {
        fs::write(dir.path().join(name), "[]").unwrap();
    }

    let mut seen = Vec::new();
    let summary = for_each_input(dir.path(), |path| {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        seen.push(name.clone());
        if name == "b.json" {
            bail!("broken file");
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(seen, vec!["a.json", "b.json", "c.json"]);
    assert_eq!(
        summary,
        InputSummary {
            processed: 2,
            failed: 1
        }
    );
}

#[test]
fn single_file_errors_are_returned() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("report.json");
    fs::write(&file, "[]").unwrap();

    let err = for_each_input(&file, |_| bail!("broken file")).unwrap_err();
    assert!(err.to_string().contains("broken file"));
}

#[test]
fn invalid_path_is_rejected_before_running() {
    let mut ran = false;
    let err = for_each_input(&PathBuf::from("/definitely/not/here.json"), |_| {
        ran = true;
        Ok(())
    })
    .unwrap_err();

    assert!(!ran);
    assert!(err.to_string().contains("invalid input path"));
}
