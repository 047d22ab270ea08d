use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn tfe_gpg(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("tfe-gpg");
    cmd.current_dir(dir.path())
        .env_remove("TFE_HOSTNAME")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir.path())
        .env("NO_COLOR", "1")
        .env("TFE_TOKEN", "test-token");
    cmd
}

#[test]
fn lookup_prints_key_as_json() {
    let dir = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/registry/private/v2/gpg-keys/acme/32966F3FB5AC1129");
        then.status(200).json_body(json!({
            "data": {
                "type": "gpg-keys",
                "id": "13",
                "attributes": {
                    "ascii-armor": "ARMOR\n",
                    "key-id": "32966F3FB5AC1129",
                    "namespace": "acme"
                }
            }
        }));
    });

    let output = tfe_gpg(&dir)
        .env("TFE_ADDRESS", server.base_url())
        .args(["lookup", "--namespace", "acme", "--key-id", "32966F3FB5AC1129"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let found: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(found["id"], "13");
    assert_eq!(found["provider_namespace"], "acme");
    assert_eq!(found["key_id"], "32966F3FB5AC1129");
    assert_eq!(found["ascii_armor"], "ARMOR\n");
}

#[test]
fn lookup_of_unknown_key_could_not_be_found() {
    let dir = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/registry/private/v2/gpg-keys/acme/nonexistent");
        then.status(404);
    });

    tfe_gpg(&dir)
        .env("TFE_ADDRESS", server.base_url())
        .args(["lookup", "--namespace", "acme", "--key-id", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find GPG key acme/nonexistent",
        ));
}

#[test]
fn lookup_server_error_is_retrieval_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/registry/private/v2/gpg-keys/acme/ABC");
        then.status(503);
    });

    tfe_gpg(&dir)
        .env("TFE_ADDRESS", server.base_url())
        .args(["lookup", "--namespace", "acme", "--key-id", "ABC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error retrieving GPG key acme/ABC"));
}

#[test]
fn config_file_supplies_address_and_token() {
    let dir = assert_fs::TempDir::new().unwrap();
    let server = MockServer::start();

    let read = server.mock(|when, then| {
        when.method(GET)
            .path("/api/registry/private/v2/gpg-keys/acme/ABC")
            .header("authorization", "Bearer file-token");
        then.status(404);
    });

    let config = dir.path().join("tfe.toml");
    std::fs::write(
        &config,
        format!(
            "[provider]\naddress = \"{}\"\ntoken = \"file-token\"\n",
            server.base_url()
        ),
    )
    .unwrap();

    tfe_gpg(&dir)
        .env_remove("TFE_TOKEN")
        .env_remove("TFE_ADDRESS")
        .arg("--config")
        .arg(&config)
        .args(["lookup", "--namespace", "acme", "--key-id", "ABC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find GPG key acme/ABC"));

    read.assert();
}

#[test]
fn schema_describes_resource_and_data_source() {
    let dir = assert_fs::TempDir::new().unwrap();

    let output = tfe_gpg(&dir).arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["resources"][0]["name"], "tfe_registry_gpg_key");
    assert_eq!(schema["data_sources"][0]["name"], "tfe_registry_gpg_key");

    let armor = schema["resources"][0]["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "ascii_armor")
        .unwrap();
    assert_eq!(armor["force_new"], true);
}
