use crate::common::TestProject;
use devboard_cli::test_utils::ReviewFixture;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_reviews_normalized_output() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&[
            "reviews",
            "prs.json",
            "--project",
            "payments",
            "--link-prefix",
            "https://dev.azure.com/contoso",
        ])
        .unwrap();
    output.assert_success();

    assert_eq!(
        output.json(),
        json!([
            {
                "title": "PR 1",
                "description": "Description 1",
                "prLink": "https://dev.azure.com/contoso/payments/_git/repo1/pullrequest/123",
                "createdByDisplayName": "User 1",
                "creationDate": "2025-01-01T00:00:00Z",
                "completionDate": "2025-01-03T00:00:00Z",
                "reviewers": "Person 1"
            },
            {
                "title": "PR 2",
                "description": "Description 2",
                "prLink": "https://dev.azure.com/contoso/payments/_git/repo2/pullrequest/456",
                "createdByDisplayName": "User 2",
                "creationDate": "2025-01-02T00:00:00Z",
                "reviewers": ""
            }
        ])
    );
}

#[test]
fn test_reviews_envelope_from_stdin() {
    let project = TestProject::new().unwrap();

    let output = project
        .run_devboard_with_stdin(
            &["reviews", "-", "-p", "payments", "-o", "contoso"],
            &ReviewFixture::basic().to_envelope_json(),
        )
        .unwrap();
    output.assert_success();

    let json = output.json();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(
        json[1]["prLink"],
        "https://dev.azure.com/contoso/payments/_git/repo2/pullrequest/456"
    );
}

#[test]
fn test_reviews_organization_from_environment() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    project
        .command()
        .env("AZURE_ORG", "from-env")
        .args(["reviews", "prs.json", "-p", "payments"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://dev.azure.com/from-env/payments/_git/repo1/pullrequest/123",
        ));
}

#[test]
fn test_reviews_prefix_from_config_file() {
    let project = TestProject::new().unwrap();
    project.write_config("base_url = \"https://devops.example.com/tfs/Collection/\"\n").unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project.run_devboard(&["reviews", "prs.json", "-p", "payments"]).unwrap();
    output.assert_success();
    assert_eq!(
        output.json()[0]["prLink"],
        "https://devops.example.com/tfs/Collection/payments/_git/repo1/pullrequest/123"
    );
}

#[test]
fn test_reviews_explicit_prefix_beats_organization() {
    let project = TestProject::new().unwrap();
    project.write_config("organization = \"from-config\"\n").unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&[
            "reviews",
            "prs.json",
            "-p",
            "payments",
            "-o",
            "from-flag",
            "--link-prefix",
            "http://localhost:8080/",
        ])
        .unwrap();
    output.assert_success();
    assert_eq!(output.json()[0]["prLink"], "http://localhost:8080/payments/_git/repo1/pullrequest/123");
}

#[test]
fn test_reviews_without_prefix_fails() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project.run_devboard(&["reviews", "prs.json", "-p", "payments"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("no link prefix configured");
    output.assert_stderr_contains("--link-prefix");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_reviews_status_filter() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso", "--status", "Active"])
        .unwrap();
    output.assert_success();

    let json = output.json();
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["title"], "PR 2");
    assert!(json[0].get("completionDate").is_none());
}

#[test]
fn test_reviews_invalid_status_rejected() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    project
        .command()
        .args(["reviews", "prs.json", "-p", "payments", "-o", "contoso", "--status", "merged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("merged"));
}

#[test]
fn test_reviews_missing_author_rejects_batch() {
    let project = TestProject::new().unwrap();
    ReviewFixture::missing_author().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso"])
        .unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Review record #1 is missing required field 'createdBy.displayName'");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_reviews_malformed_json_fails() {
    let project = TestProject::new().unwrap();
    project.write_file("prs.json", "{ not json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso"])
        .unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Failed to parse pull requests from prs.json");
}

#[test]
fn test_reviews_empty_batch() {
    let project = TestProject::new().unwrap();
    project.write_file("prs.json", "[]").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso"])
        .unwrap();
    output.assert_success();
    assert_eq!(output.json(), json!([]));
}

#[test]
fn test_reviews_text_format() {
    let project = TestProject::new().unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    project
        .command()
        .args(["reviews", "prs.json", "-p", "payments", "-o", "contoso", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PR 1\n  https://dev.azure.com/contoso/payments/_git/repo1/pullrequest/123"))
        .stdout(predicate::str::contains("completed 2025-01-03 00:00 UTC"))
        .stdout(predicate::str::contains("reviewers: Person 1"))
        .stdout(predicate::str::contains("DOMAIN").not());
}

#[test]
fn test_reviews_filtered_error_reports_input_position() {
    let project = TestProject::new().unwrap();
    ReviewFixture::missing_author().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso", "--status", "active"])
        .unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Review record #1 is missing required field 'createdBy.displayName'");
    output.assert_stderr_contains("Check record #1 in the input");
}

#[test]
fn test_reviews_filter_skips_invalid_excluded_record() {
    let project = TestProject::new().unwrap();
    ReviewFixture::missing_author().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso", "--status", "completed"])
        .unwrap();
    output.assert_success();
    assert_eq!(output.json()[0]["title"], "PR 1");
}

#[test]
fn test_reviews_override_ignores_invalid_config() {
    let project = TestProject::new().unwrap();
    project.write_config("organization = [").unwrap();
    ReviewFixture::basic().write_to(project.project_path(), "prs.json").unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "--link-prefix", "http://localhost"])
        .unwrap();
    output.assert_success();
    assert_eq!(output.json()[0]["prLink"], "http://localhost/payments/_git/repo1/pullrequest/123");

    let output = project.run_devboard(&["reviews", "prs.json", "-p", "payments"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Failed to parse global config");
}

#[test]
fn test_reviews_wrongly_typed_field_reports_position() {
    let project = TestProject::new().unwrap();
    project
        .write_file("prs.json", "[\n  { \"title\": \"ok\" },\n  { \"title\": 5 }\n]")
        .unwrap();

    let output = project
        .run_devboard(&["reviews", "prs.json", "-p", "payments", "-o", "contoso"])
        .unwrap();
    output.assert_failure();
    output.assert_stderr_contains("invalid type");
    output.assert_stderr_contains("line 3");
    assert!(!output.stderr.contains("untagged"));
}
