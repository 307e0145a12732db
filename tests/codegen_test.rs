use std::fs;
use std::path::{Path, PathBuf};

use connector_sdk::codegen::{run, CodegenOptions};
use connector_sdk::connector::ConnectorType;
use connector_sdk::error::Error;
use tempfile::TempDir;
use walkdir::WalkDir;

fn options(package: &str, connector_type: ConnectorType, output: &Path) -> CodegenOptions {
    CodegenOptions {
        output: Some(output.to_path_buf()),
        ..CodegenOptions::new(package, connector_type)
    }
}

/// Relative paths of all files below `root`, sorted.
fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

#[test_log::test]
fn test_generate_car_package() {
    let temp_dir = TempDir::new().unwrap();
    let report = run(&options("acme_connector", ConnectorType::Car, temp_dir.path())).unwrap();

    let package_dir = temp_dir.path().join("acme_connector");
    assert_eq!(report.package_dir, package_dir);
    assert!(report.result.skipped.is_empty());
    assert_eq!(report.result.created.len(), 12);

    let mut expected: Vec<PathBuf> = [
        "app.py",
        "README.md",
        "setup.py",
        "Dockerfile",
        "configurations/config.json",
        "configurations/lang.json",
        "acme_connector/__init__.py",
        "acme_connector/full_import.py",
        "acme_connector/data_handler.py",
        "acme_connector/inc_import.py",
        "acme_connector/requirements.txt",
        "acme_connector/server_access.py",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    expected.sort();
    assert_eq!(files_under(&package_dir), expected);

    let mut created: Vec<PathBuf> = report
        .result
        .created
        .iter()
        .map(|p| p.strip_prefix(&package_dir).unwrap().to_path_buf())
        .collect();
    created.sort();
    assert_eq!(created, expected);

    let server = package_dir.join("server");
    assert!(server.is_dir());
    assert_eq!(fs::read_dir(server).unwrap().count(), 0);

    let app = fs::read_to_string(package_dir.join("app.py")).unwrap();
    assert!(app.contains("from acme_connector.full_import import FullImport"));
}

#[test]
fn test_generate_udi_package() {
    let temp_dir = TempDir::new().unwrap();
    let report = run(&options("acme_udi", ConnectorType::Udi, temp_dir.path())).unwrap();

    let package_dir = temp_dir.path().join("acme_udi");
    assert_eq!(report.result.created.len(), 17);
    assert!(package_dir.join("acme_udi/stix_transmission/connector.py").is_file());
    assert!(package_dir.join("configuration/lang_en.json").is_file());
    assert!(!package_dir.join("app.py").exists());
    assert_eq!(files_under(&package_dir).len(), 17);
}

#[test]
fn test_existing_package_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let package_dir = temp_dir.path().join("acme_connector");
    fs::create_dir(&package_dir).unwrap();

    match run(&options("acme_connector", ConnectorType::Car, temp_dir.path())) {
        Err(Error::PackageAlreadyExists { path }) => assert_eq!(path, package_dir),
        other => panic!("Expected PackageAlreadyExists, got {:?}", other),
    }
    assert_eq!(fs::read_dir(&package_dir).unwrap().count(), 0);
}

#[test]
fn test_invalid_package_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["9lives", "acme/connector", "../acme", "acme-connector", "class", ""] {
        match run(&options(name, ConnectorType::Car, temp_dir.path())) {
            Err(Error::InvalidPackageName { name: reported }) => assert_eq!(reported, name),
            other => panic!("Expected InvalidPackageName for {:?}, got {:?}", name, other),
        }
    }
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_layout_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cases = [
        ("server", ConnectorType::Car),
        ("Dockerfile", ConnectorType::Car),
        ("configurations", ConnectorType::Car),
        ("Server", ConnectorType::Car),
        ("server", ConnectorType::Udi),
        ("configuration", ConnectorType::Udi),
    ];
    for (name, connector_type) in cases {
        match run(&options(name, connector_type, temp_dir.path())) {
            Err(Error::InvalidPackageName { name: reported }) => assert_eq!(reported, name),
            other => panic!("Expected InvalidPackageName for {} ({}), got {:?}", name, connector_type, other),
        }
    }
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_name_of_other_layout_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let report = run(&options("configuration", ConnectorType::Car, temp_dir.path())).unwrap();

    let package_dir = temp_dir.path().join("configuration");
    assert_eq!(report.result.created.len(), 12);
    assert!(package_dir.join("configuration/data_handler.py").is_file());
    assert!(package_dir.join("configurations/config.json").is_file());
}

#[test]
fn test_output_base_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("nested/out");

    let report = run(&options("acme_connector", ConnectorType::Car, &output)).unwrap();

    assert_eq!(report.package_dir, output.join("acme_connector"));
    assert!(output.join("acme_connector/app.py").is_file());
    assert!(output.join("acme_connector/server").is_dir());
}

#[test_log::test]
fn test_reload_fills_in_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let package_dir = temp_dir.path().join("acme_connector");
    run(&options("acme_connector", ConnectorType::Car, temp_dir.path())).unwrap();

    fs::remove_file(package_dir.join("README.md")).unwrap();
    fs::write(package_dir.join("app.py"), "# customised\n").unwrap();

    let reload = CodegenOptions { reload: true, ..options("acme_connector", ConnectorType::Car, temp_dir.path()) };
    let report = run(&reload).unwrap();

    assert_eq!(report.result.created, vec![package_dir.join("README.md")]);
    assert_eq!(report.result.skipped.len(), 11);
    assert!(report.result.skipped.contains(&package_dir.join("app.py")));
    assert_eq!(fs::read_to_string(package_dir.join("app.py")).unwrap(), "# customised\n");
}

#[test]
fn test_reload_into_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let reload = CodegenOptions { reload: true, ..options("acme_connector", ConnectorType::Car, temp_dir.path()) };

    let report = run(&reload).unwrap();
    assert_eq!(report.result.created.len(), 12);
}

#[test]
fn test_generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for connector_type in ConnectorType::ALL {
        run(&options("acme_connector", connector_type, &first.path().join(connector_type.as_str())))
            .unwrap();
        run(&options("acme_connector", connector_type, &second.path().join(connector_type.as_str())))
            .unwrap();
    }

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_rerun_with_reload_changes_nothing() {
    let generated = TempDir::new().unwrap();
    let reference = TempDir::new().unwrap();
    run(&options("acme_connector", ConnectorType::Udi, generated.path())).unwrap();
    run(&options("acme_connector", ConnectorType::Udi, reference.path())).unwrap();

    let reload = CodegenOptions { reload: true, ..options("acme_connector", ConnectorType::Udi, generated.path()) };
    let report = run(&reload).unwrap();

    assert!(report.result.created.is_empty());
    assert_eq!(report.result.skipped.len(), 17);
    assert!(!dir_diff::is_different(generated.path(), reference.path()).unwrap());
}
