//! End-to-end tests for the load → validate → order → write pipeline
//! against the local file system.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use serde_json::Value;
use tempfile::tempdir;

use servicepack::domain::ports::{FileSystem, FsResult};
use servicepack::{
    load_all, rewrite, AcceptAll, ContentViolation, EntityName, LocalFs, PackError, ParsedEntity,
    RewriteOptions, RewriteUseCase, SvgIconValidator,
};

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#;

fn names(list: &[&str]) -> Vec<EntityName> {
    EntityName::parse_all(list.iter().copied()).unwrap()
}

fn write_source(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(format!("{name}.yml")), body).unwrap();
}

fn service(id: &str) -> String {
    format!("id: {id}\nname: {id}\nicon_svg: '{ICON}'\nrules:\n  - '||{id}.com^'\n")
}

fn ids(output: &str) -> Vec<String> {
    let doc: Value = serde_json::from_str(output).unwrap();
    doc["blocked_services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_missing_source_reports_only_that_name_and_keeps_destination() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("services");
    fs::create_dir(&src).unwrap();
    write_source(&src, "a", &service("a"));
    write_source(&src, "c", &service("c"));

    let output = dir.path().join("services.json");
    fs::write(&output, "previous").unwrap();
    let before = fs::metadata(&output).unwrap().modified().unwrap();

    let err = rewrite(&src, &output, &names(&["a", "b", "c"]), AcceptAll).unwrap_err();

    let failed: Vec<&str> = err.failed_names().into_iter().map(EntityName::as_str).collect();
    assert_eq!(failed, vec!["b"]);
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    assert_eq!(fs::metadata(&output).unwrap().modified().unwrap(), before);
}

#[test]
fn test_every_unparseable_source_is_reported_in_request_order() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "a", "id: [unclosed\n");
    write_source(dir.path(), "b", "{ unclosed: 1\n");
    write_source(dir.path(), "c", &service("c"));

    let err = load_all(dir.path(), &names(&["a", "b", "c"])).unwrap_err();

    match err {
        PackError::InvalidSources { failures } => {
            let failed: Vec<&str> = failures.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(failed, vec!["a", "b"]);
            assert!(failures.iter().all(|f| !f.reason.is_empty()));
        }
        other => panic!("expected InvalidSources, got {other:?}"),
    }
}

#[test]
fn test_empty_source_is_a_failure() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "blank", "");

    let err = load_all(dir.path(), &names(&["blank"])).unwrap_err();
    assert!(err.to_string().contains("blank"));
}

#[test]
fn test_invalid_icon_leaves_destination_untouched() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "good", &service("good"));
    write_source(
        dir.path(),
        "evil",
        "id: evil\nicon_svg: '<svg><script>alert(1)</script></svg>'\n",
    );
    let output = dir.path().join("out.json");
    fs::write(&output, "previous").unwrap();

    let err = rewrite(
        dir.path(),
        &output,
        &names(&["good", "evil"]),
        SvgIconValidator::new(),
    )
    .unwrap_err();

    match err {
        PackError::InvalidContent { violations } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].entity.as_str(), "evil");
        }
        other => panic!("expected InvalidContent, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_rewrite_sorts_and_wraps_services() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "youtube", &service("youtube"));
    write_source(dir.path(), "facebook", &service("facebook"));
    write_source(dir.path(), "tiktok", &service("tiktok"));
    let output = dir.path().join("nested").join("services.json");

    let report = rewrite(
        dir.path(),
        &output,
        &names(&["youtube", "facebook", "tiktok"]),
        SvgIconValidator::new(),
    )
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(report.entity_count, 3);
    assert_eq!(report.bytes, written.len());
    assert!(written.starts_with("{\n  \"blocked_services\": [\n"));
    assert_eq!(ids(&written), vec!["facebook", "tiktok", "youtube"]);
}

#[test]
fn test_rewrite_is_idempotent() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "a", &service("a"));
    write_source(dir.path(), "b", &service("b"));
    let output = dir.path().join("services.json");

    let first = rewrite(dir.path(), &output, &names(&["b", "a"]), AcceptAll).unwrap();
    let first_bytes = fs::read(&output).unwrap();
    let second = rewrite(dir.path(), &output, &names(&["a", "b"]), AcceptAll).unwrap();
    let second_bytes = fs::read(&output).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.digest, second.digest);
}

#[test]
fn test_custom_validator_closure_sees_whole_collection() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "a", &service("a"));
    write_source(dir.path(), "b", &service("b"));
    let output = dir.path().join("services.json");

    let at_most_one = |entities: &[ParsedEntity]| -> Result<(), Vec<ContentViolation>> {
        if entities.len() > 1 {
            Err(vec![ContentViolation::new(
                entities[1].name(),
                "id",
                "only one service allowed",
            )])
        } else {
            Ok(())
        }
    };

    let err = rewrite(dir.path(), &output, &names(&["a", "b"]), at_most_one).unwrap_err();

    assert!(matches!(err, PackError::InvalidContent { .. }));
    assert!(!output.exists());
}

/// Local file system that stalls reads of one file
struct DelayedFs {
    slow: String,
    delay: Duration,
}

impl FileSystem for DelayedFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        if path.file_stem().and_then(|s| s.to_str()) == Some(self.slow.as_str()) {
            thread::sleep(self.delay);
        }
        LocalFs::new().read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        LocalFs::new().write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        LocalFs::new().exists(path)
    }
}

#[test]
fn test_read_timing_does_not_change_failures() {
    let dir = tempdir().unwrap();
    write_source(dir.path(), "a", "id: [broken\n");
    write_source(dir.path(), "c", "id: [broken\n");

    for slow in ["a", "b", "c"] {
        let slow_fs = DelayedFs {
            slow: slow.to_string(),
            delay: Duration::from_millis(50),
        };
        let options = RewriteOptions::new(dir.path(), dir.path().join("out.json"));
        let err = RewriteUseCase::new(slow_fs, AcceptAll)
            .execute(&names(&["a", "b", "c"]), &options)
            .unwrap_err();

        let failed: Vec<&str> = err.failed_names().into_iter().map(EntityName::as_str).collect();
        assert_eq!(failed, vec!["a", "b", "c"], "slow read on {slow}");
    }
}

#[test]
fn test_read_timing_does_not_change_output() {
    let dir = tempdir().unwrap();
    for id in ["x", "y", "z"] {
        write_source(dir.path(), id, &service(id));
    }

    let mut outputs = Vec::new();
    for slow in ["x", "y", "z"] {
        let slow_fs = DelayedFs {
            slow: slow.to_string(),
            delay: Duration::from_millis(50),
        };
        let options = RewriteOptions::new(dir.path(), dir.path().join(format!("{slow}.json")));
        RewriteUseCase::new(slow_fs, AcceptAll)
            .execute(&names(&["z", "x", "y"]), &options)
            .unwrap();
        outputs.push(fs::read_to_string(&options.output).unwrap());
    }

    assert_eq!(ids(&outputs[0]), vec!["x", "y", "z"]);
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}
