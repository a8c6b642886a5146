use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn signup_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("signup"));
    cmd.env_remove("SIGNUP_CONFIG").env_remove("RUST_LOG");
    cmd
}

const REGISTER_JOHN: &str = r#"register(registerDto: { name: "John Doe", email: "john@example.com", password: "password123", phone_number: 1234567890 }) { activation_token error { message code } }"#;

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    signup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("user-registration"));
}

#[test]
fn test_version() {
    signup_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signup"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args(["--config", "does-not-exist.toml", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_unusable_log_file_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("blocker"), "not a directory").unwrap();

    signup_cmd()
        .args(["--log-file", "blocker/logs/signup.log", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logging"))
        .stderr(predicate::str::contains("cannot create log directory"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_log_file_directory_is_created() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args(["--log-file", "logs/signup.log", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert!(temp_dir.path().join("logs").is_dir());
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args(["init", "--port", "4321"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config = std::fs::read_to_string(temp_dir.path().join("signup.toml")).unwrap();
    assert!(config.contains("4321"));
    assert!(config.contains("activation_token_length"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    signup_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("register(registerDto: RegisterInput!): RegisterResponse!"))
        .stdout(predicate::str::contains("phone_number: Int!"))
        .stdout(predicate::str::contains("activation_token: String"))
        .stdout(predicate::str::contains("EMAIL_TAKEN"))
        .stdout(predicate::str::contains("password_hash").not());
}

// =============================================================================
// GraphQL
// =============================================================================

#[test]
fn test_graphql_mutate_register() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args(["mutate", REGISTER_JOHN])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#""activation_token": "[0-9a-z]{32}""#).unwrap())
        .stdout(predicate::str::contains("\"error\": null"));
}

#[test]
fn test_graphql_query_uses_configured_token_length() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("signup.toml"),
        "[users]\nactivation_token_length = 12\n",
    )
    .unwrap();

    signup_cmd()
        .args(["query", &format!("mutation {{ {} }}", REGISTER_JOHN)])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#""activation_token": "[0-9a-z]{12}""#).unwrap());
}

#[test]
fn test_graphql_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args([
            "query",
            "mutation Register($input: RegisterInput!) { register(registerDto: $input) { activation_token error { code } } }",
            "--variables",
            r#"{"input": {"name": "Jane", "email": "jane@example.com", "password": "hunter2hunter2", "phone_number": 5550100}}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\": null"));
}

#[test]
fn test_graphql_invalid_input_reports_errors() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args([
            "mutate",
            r#"register(registerDto: { name: "John Doe", email: "not-an-email", password: "password123", phone_number: 1234567890 }) { activation_token }"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"errors\""))
        .stdout(predicate::str::contains("invalid email"));
}

#[test]
fn test_invalid_variables_json_fails() {
    let temp_dir = TempDir::new().unwrap();

    signup_cmd()
        .args(["query", "{ user(id: \"x\") { id } }", "--variables", "{not json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}
