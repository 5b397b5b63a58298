// tests/real_filesystem.rs

mod common;
use crate::common::builders::ConfigJsonBuilder;
use crate::common::init_tracing;

use std::error::Error;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use unprefixed_intl::config::load_from_path;
use unprefixed_intl::{ConfigLoader, IntlError};
use unprefixed_intl_test_utils::project::TempProject;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn config_file_on_disk_is_adopted() -> TestResult {
    init_tracing();
    let project = TempProject::new()?;
    project.write_config(
        &ConfigJsonBuilder::new()
            .messages_path("/opt/site/lang")
            .default_lang("de")
            .to_json_string(),
    )?;

    let loaded = ConfigLoader::new(project.root()).load();

    assert!(loaded.diagnostic.is_none());
    assert_eq!(loaded.config.messages_path(), Path::new("/opt/site/lang"));
    assert_eq!(loaded.config.default_lang(), "de");
    Ok(())
}

#[test]
fn src_messages_on_disk_is_picked_as_default() -> TestResult {
    let project = TempProject::new()?.with_src_messages()?;

    let cfg = ConfigLoader::new(project.root()).load().into_config();

    assert_eq!(
        cfg.messages_path(),
        project.root().join("src").join("messages")
    );
    assert!(cfg.messages_path().is_absolute());
    Ok(())
}

#[test]
fn empty_dir_defaults_to_sibling_messages() -> TestResult {
    let project = TempProject::new()?;

    let loaded = ConfigLoader::new(project.root()).load();

    assert!(loaded.diagnostic.is_none());
    assert_eq!(loaded.config.messages_path(), project.root().join("messages"));
    assert!(!loaded.config.messages_path().exists());
    Ok(())
}

#[test]
fn malformed_file_on_disk_falls_back() -> TestResult {
    init_tracing();
    let project = TempProject::new()?.with_src_messages()?;
    let path = project.write_config("{ messagesPath: nope }")?;

    let loaded = ConfigLoader::new(project.root()).load();
    loaded.log_diagnostic();

    let msg = loaded
        .diagnostic
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_default();
    assert!(msg.contains(&path.display().to_string()), "{msg}");
    assert_eq!(
        loaded.config.messages_path(),
        project.root().join("src").join("messages")
    );
    Ok(())
}

#[test]
fn directory_at_config_path_names_the_io_cause() -> TestResult {
    init_tracing();
    let project = TempProject::new()?;
    std::fs::create_dir(project.config_path())?;

    let loaded = ConfigLoader::new(project.root()).load();
    loaded.log_diagnostic();

    assert_eq!(loaded.config.messages_path(), project.root().join("messages"));
    match loaded.diagnostic {
        Some(err @ IntlError::Read { .. }) => {
            let msg = err.to_string();
            assert!(msg.contains(&project.config_path().display().to_string()), "{msg}");
            // The anyhow context alone only repeats the path; the io error follows it.
            let io_cause = std::fs::read_to_string(project.config_path())
                .err()
                .map(|e| e.to_string())
                .ok_or("reading a directory unexpectedly succeeded")?;
            assert!(msg.contains(&io_cause), "{msg} should contain {io_cause}");
        }
        other => panic!("Expected Read diagnostic, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn invalid_utf8_on_disk_names_the_io_cause() -> TestResult {
    let project = TempProject::new()?;
    std::fs::write(project.config_path(), [0xff, 0xfe, b'{', b'}'])?;

    let loaded = ConfigLoader::new(project.root()).load();

    let msg = loaded
        .diagnostic
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_default();
    assert!(msg.contains("valid UTF-8"), "{msg}");
    Ok(())
}

#[test]
fn load_from_path_is_strict() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "messagesPath": "/m", "defaultLang": "en", "maxAcceptedLanguageSearch": 2 }}"#
    )?;

    let result = load_from_path(file.path());

    match result {
        Err(IntlError::Validation { reason, .. }) => {
            assert!(reason.contains("allowLanguageCode"));
        }
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    Ok(())
}

#[test]
fn load_from_path_reports_missing_file_as_read_error() -> TestResult {
    let project = TempProject::new()?;

    let result = load_from_path(project.root().join("nope.json"));

    assert!(matches!(result, Err(IntlError::Read { .. })));
    Ok(())
}

#[test]
fn load_from_path_reads_valid_file() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", ConfigJsonBuilder::new().to_json_string())?;

    let cfg = load_from_path(file.path())?;

    assert_eq!(cfg.default_lang(), "pt-BR");
    assert_eq!(cfg.max_accepted_language_search(), 5);
    Ok(())
}
