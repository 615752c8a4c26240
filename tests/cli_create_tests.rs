//! End-to-end tests for `party-intake create` and `list`.

mod fixtures;
use fixtures::*;

#[test]
fn test_create_saves_and_prints_handoff() {
    let (config_dir, data_dir) = fast_config_dir();

    let output = isolated_command(
        &[
            "create",
            "--name",
            "Acme Traders",
            "--phone",
            "98765-43210",
            "--email",
            "a@b.com",
            "--session",
            "tenant-7",
            "--json",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Create should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let handoff: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(handoff["partyName"], "Acme Traders");
    assert_eq!(handoff["partyPhone"], "9876543210");
    assert_eq!(handoff["partyAddress"], "");
    assert_eq!(handoff["selectedParty"], handoff["newPartyData"]);

    let record = &handoff["newPartyData"];
    assert_eq!(record["HasAddress"], false);
    assert_eq!(record["HasContacts"], true);
    assert_eq!(record["HasAlternateContacts"], false);
    assert_eq!(record["TenantId"], "tenant-7");
    assert!(record["PartyCode"]
        .as_str()
        .unwrap()
        .starts_with("PID-ACME-"));

    let id = handoff["partyId"].as_str().unwrap();
    assert!(data_dir.join(format!("{id}.json")).exists());
}

#[test]
fn test_create_without_session_fails_and_writes_nothing() {
    let (config_dir, data_dir) = fast_config_dir();

    let output = isolated_command(&["create", "--name", "Acme Traders"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session found"), "stderr: {stderr}");
    assert!(!data_dir.exists());
}

#[test]
fn test_create_invalid_fields_exit_one() {
    let (config_dir, data_dir) = fast_config_dir();

    let output = isolated_command(
        &["create", "--name", "A", "--session", "t"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("partyName"));
    assert!(!data_dir.exists());
}

#[test]
fn test_create_rejects_overlong_phone() {
    let (config_dir, _data_dir) = fast_config_dir();

    let output = isolated_command(
        &["create", "--name", "Acme", "--phone", "12345678901", "--session", "t"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_create_with_prefill_file() {
    let (config_dir, _data_dir) = fast_config_dir();
    let prefill = config_dir.path().join("selected.json");
    std::fs::write(
        &prefill,
        r#"{"LedgerName": "Grand Hotel", "Address_line1": "12 MG Road", "Address_line2": "Block C", "City": "Bengaluru"}"#,
    )
    .unwrap();

    let output = isolated_command(
        &[
            "create",
            "--prefill",
            prefill.to_str().unwrap(),
            "--zipcode",
            "560001",
            "--json",
        ],
        config_dir.path(),
    )
    .env("PARTY_INTAKE_SESSION", "tenant-env")
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let handoff: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(handoff["partyName"], "Grand Hotel");
    assert_eq!(handoff["partyAddress"], "12 MG Road, Block C");
    assert_eq!(handoff["partyZipcode"], "560001");
    assert_eq!(handoff["newPartyData"]["HasAddress"], true);
    assert_eq!(handoff["newPartyData"]["TenantId"], "tenant-env");
}

#[test]
fn test_list_shows_created_parties() {
    let (config_dir, _data_dir) = fast_config_dir();

    let empty = isolated_command(&["list", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(empty.status.code(), Some(0));
    let records: serde_json::Value = serde_json::from_slice(&empty.stdout).unwrap();
    assert_eq!(records, serde_json::json!([]));

    for name in ["Acme Traders", "Grand Hotel"] {
        let output = isolated_command(
            &["create", "--name", name, "--session", "t"],
            config_dir.path(),
        )
        .output()
        .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
    }

    let output = isolated_command(&["list", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["LedgerName"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Acme Traders"));
    assert!(names.contains(&"Grand Hotel"));
}
