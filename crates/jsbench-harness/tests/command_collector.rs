//! Process-backed collection and config loading against real files
//!
//! Uses `sh` as the engine so the workload scripts are plain shell.

#![cfg(unix)]

#[path = "common/scratch.rs"]
mod scratch;

use jsbench_harness::config::Config;
use jsbench_harness::{CommandCollector, HarnessError, SampleCollector, SuiteRunner, Workload};
use scratch::ScratchDir;

fn workload(name: &str) -> Workload {
    name.parse().unwrap()
}

#[tokio::test]
async fn test_collects_timing_from_stdout() {
    let dir = ScratchDir::new("collect-ok");
    dir.write("amazon/chrome/urem.sh", "echo 'replaying'\necho 'Time: 42ms'\n");

    let mut collector = CommandCollector::new("sh", dir.path(), "sh");
    let sample = collector
        .collect(&workload("amazon/chrome"), "urem", 0)
        .await
        .unwrap();

    assert_eq!(sample, 42.0);
}

#[tokio::test]
async fn test_missing_timing_line_fails() {
    let dir = ScratchDir::new("collect-no-time");
    dir.write("amazon/chrome/urem.sh", "echo hello\n");

    let mut collector = CommandCollector::new("sh", dir.path(), "sh");
    let err = collector
        .collect(&workload("amazon/chrome"), "urem", 4)
        .await
        .unwrap_err();

    match err {
        HarnessError::CollectionFailure {
            workload,
            variant,
            run,
            ..
        } => {
            assert_eq!(workload, "amazon/chrome");
            assert_eq!(variant, "urem");
            assert_eq!(run, 4);
        }
        other => panic!("expected CollectionFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_first_timing_fails_despite_later_line() {
    let dir = ScratchDir::new("collect-empty-time");
    dir.write("amazon/chrome/urem.sh", "echo 'Time: ms'\necho 'Time: 5ms'\n");

    let mut collector = CommandCollector::new("sh", dir.path(), "sh");
    let err = collector
        .collect(&workload("amazon/chrome"), "urem", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, HarnessError::CollectionFailure { run: 0, .. }));
}

#[tokio::test]
async fn test_missing_engine_fails() {
    let dir = ScratchDir::new("collect-no-engine");
    dir.write("amazon/chrome/urem.sh", "echo 'Time: 1ms'\n");

    let mut collector =
        CommandCollector::new(dir.path().join("no-such-engine"), dir.path(), "sh");
    let err = collector
        .collect(&workload("amazon/chrome"), "urem", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, HarnessError::CollectionFailure { run: 0, .. }));
    assert!(err.to_string().contains("failed to run"));
}

#[tokio::test]
async fn test_nonzero_exit_still_uses_timing() {
    let dir = ScratchDir::new("collect-exit");
    dir.write("google/firefox/uem.sh", "echo 'Time: 7ms'\nexit 3\n");

    let mut collector = CommandCollector::new("sh", dir.path(), "sh");
    let sample = collector
        .collect(&workload("google/firefox"), "uem", 0)
        .await
        .unwrap();

    assert_eq!(sample, 7.0);
}

#[tokio::test]
async fn test_suite_from_config_file() {
    let dir = ScratchDir::new("suite-file");
    // Alternates between two timings so the group has spread
    dir.write(
        "corpus/case/v.sh",
        "if [ -f \"$0.odd\" ]; then rm \"$0.odd\"; echo 'Time: 12ms'; else touch \"$0.odd\"; echo 'Time: 8ms'; fi\n",
    );
    let config_path = dir.write(
        "suite.toml",
        &format!(
            r#"
                workloads = ["corpus/case"]

                [suite]
                name = "File Suite"
                runs = 6
                keep_runs = 4
                workload_root = "{}"
                extension = "sh"

                [variants]
                "*" = ["v"]
            "#,
            dir.path().display()
        ),
    );

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.suite.name, "File Suite");

    let collector = CommandCollector::from_suite("sh", &config.suite);
    let report = SuiteRunner::new(collector).run(&config).await.unwrap();

    let group = &report.groups[0];
    assert_eq!(group.record.total_runs, 6);
    assert_eq!(group.record.samples, vec![8.0, 12.0, 8.0, 12.0]);
    assert_eq!(group.stats.mean, 10.0);
    assert!(!group.stats.degenerate);
}

#[test]
fn test_config_file_missing() {
    let dir = ScratchDir::new("config-missing");
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.to_string().contains("absent.toml"));
}
