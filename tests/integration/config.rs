use crate::common::TestProject;
use std::fs;

#[test]
fn test_config_path_honors_override() {
    let project = TestProject::new().unwrap();

    let output = project.run_devboard(&["config", "path"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout.trim(), project.config_path().display().to_string());
}

#[test]
fn test_config_init_creates_example() {
    let project = TestProject::new().unwrap();

    let output = project.run_devboard(&["config", "init"]).unwrap();
    output.assert_success();
    output.assert_stdout_contains("Created config at");

    let content = fs::read_to_string(project.config_path()).unwrap();
    assert!(content.contains("organization = \"your-organization\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(project.config_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn test_config_init_does_not_overwrite_without_force() {
    let project = TestProject::new().unwrap();
    project.write_config("organization = \"mine\"\n").unwrap();

    let output = project.run_devboard(&["config", "init"]).unwrap();
    output.assert_success();
    output.assert_stdout_contains("Use --force to overwrite");
    assert_eq!(fs::read_to_string(project.config_path()).unwrap(), "organization = \"mine\"\n");

    project.run_devboard(&["config", "init", "--force"]).unwrap().assert_success();
    assert!(fs::read_to_string(project.config_path()).unwrap().contains("your-organization"));
}

#[test]
fn test_config_show_defaults() {
    let project = TestProject::new().unwrap();

    let output = project.run_devboard(&["config"]).unwrap();
    output.assert_success();
    output.assert_stdout_contains("No settings configured.");
}

#[test]
fn test_config_show_link_prefix() {
    let project = TestProject::new().unwrap();
    project.write_config("organization = \"contoso\"\n").unwrap();

    let output = project.run_devboard(&["config", "show"]).unwrap();
    output.assert_success();
    output.assert_stdout_contains("organization = \"contoso\"");
    output.assert_stdout_contains("Link prefix: https://dev.azure.com/contoso");
}

#[test]
fn test_config_show_invalid_toml_fails() {
    let project = TestProject::new().unwrap();
    project.write_config("organization = ").unwrap();

    let output = project.run_devboard(&["config", "show"]).unwrap();
    output.assert_failure();
    output.assert_stderr_contains("Failed to parse global config");
}
