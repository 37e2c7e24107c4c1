use crate::common::TestProject;
use devboard_cli::test_utils::ManifestFixture;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_manifest_resolves_property_references() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_success();

    assert_eq!(
        output.json(),
        json!({
            "parent": { "artifactId": "parent-artifact", "version": "2.0.0" },
            "dependencies": [
                { "artifactId": "dep1", "version": "1.0.0" },
                { "artifactId": "dep2", "version": "3.0.0" }
            ]
        })
    );
}

#[test]
fn test_manifest_sentinels_and_namespaces() {
    let project = TestProject::new().unwrap();
    ManifestFixture::maven().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_success();

    let json = output.json();
    assert_eq!(json["parent"], serde_json::Value::Null);
    assert_eq!(
        json["dependencies"],
        json!([
            { "artifactId": "jackson-databind", "version": "2.17.1" },
            { "artifactId": "spring-boot-starter-web", "version": "Default" },
            { "artifactId": "lombok", "version": "N/A" },
            { "artifactId": "alias-user", "version": "${jackson.version}" }
        ])
    );
}

#[test]
fn test_manifest_unresolved_reference_is_logged() {
    let project = TestProject::new().unwrap();
    ManifestFixture::maven().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_success();
    output.assert_stderr_contains("lombok.version");
}

#[test]
fn test_manifest_quiet_suppresses_logging() {
    let project = TestProject::new().unwrap();
    ManifestFixture::maven().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["--quiet", "manifest", "pom.xml"]).unwrap();
    output.assert_success();
    assert!(output.stderr.is_empty(), "unexpected stderr: {}", output.stderr);
}

#[test]
fn test_manifest_empty_dependencies() {
    let project = TestProject::new().unwrap();
    ManifestFixture::empty_dependencies().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_success();
    assert_eq!(output.json(), json!({ "parent": null, "dependencies": [] }));
}

#[test]
fn test_manifest_missing_dependencies_fails() {
    let project = TestProject::new().unwrap();
    ManifestFixture::missing_dependencies().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("project/dependencies");
    output.assert_stderr_contains("Add <dependencies> to the manifest");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_manifest_invalid_markup_fails() {
    let project = TestProject::new().unwrap();
    ManifestFixture::invalid_syntax().write_to(project.project_path()).unwrap();

    let output = project.run_devboard(&["manifest", "pom.xml"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Invalid manifest syntax");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_manifest_missing_file_fails() {
    let project = TestProject::new().unwrap();

    let output = project.run_devboard(&["manifest", "nope.xml"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("nope.xml");
}

#[test]
fn test_manifest_from_stdin() {
    let project = TestProject::new().unwrap();

    let output = project
        .run_devboard_with_stdin(&["manifest", "-"], &ManifestFixture::basic().content)
        .unwrap();
    output.assert_success();
    assert_eq!(output.json()["dependencies"][0]["version"], "1.0.0");
}

#[test]
fn test_manifest_text_format() {
    let project = TestProject::new().unwrap();
    ManifestFixture::basic().write_to(project.project_path()).unwrap();

    project
        .command()
        .args(["manifest", "pom.xml", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parent parent-artifact 2.0.0"))
        .stdout(predicate::str::contains("dep1  1.0.0 (${my.version})"))
        .stdout(predicate::str::contains("dep2  3.0.0"));
}
