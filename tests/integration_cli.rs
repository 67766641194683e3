use std::process::Command;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_projectile-cli"))
}

#[test]
fn test_cli_flight_basic() {
    let output = cli()
        .args(["flight", "--speed", "10", "--angle", "45"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("TRAJECTORY") && stdout.contains("Range"),
        "Should contain trajectory output"
    );
}

#[test]
fn test_cli_flight_json_output() {
    let output = cli()
        .args(["flight", "--speed", "10", "--angle", "45", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should parse");
    assert!(parsed["points"].is_array());
    assert!(parsed["summary"]["range"].is_number());
    assert_eq!(parsed["termination"], "ground-impact");
}

#[test]
fn test_cli_drag_csv_output() {
    let output = cli()
        .args(["drag", "--speed", "50", "--angle", "40", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("t,x,y,z,vx,vy,vz,v"));
    assert!(lines.next().is_some(), "CSV should contain data rows");
}

#[test]
fn test_cli_drag_compare() {
    let output = cli()
        .args(["drag", "--speed", "80", "--angle", "60", "--compare"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DENSITY MODEL COMPARISON"));
}

#[test]
fn test_cli_bounce() {
    let output = cli()
        .args(["bounce", "--height", "10", "--restitution", "0.7"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BounceLimitReached") || stdout.contains("Termination"));
}

#[test]
fn test_cli_orbital_reports_landing_coordinates() {
    let output = cli()
        .args(["orbital", "--speed", "3000", "--angle", "45"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("LANDING COORDINATES"));
    assert!(stdout.contains("Latitude"));
}

#[test]
fn test_cli_aim_reachable() {
    let output = cli()
        .args(["aim", "--speed", "15", "--target-x", "10", "--target-y", "5"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TARGET SOLUTIONS"));
    assert!(stdout.contains("High Angle"));
}

#[test]
fn test_cli_aim_unreachable() {
    let output = cli()
        .args(["aim", "--speed", "5", "--target-x", "100", "--target-y", "20"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TARGET UNREACHABLE"));
}

#[test]
fn test_cli_rejects_vertical_target() {
    let output = cli()
        .args(["aim", "--speed", "15", "--target-x", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Vertical target should fail");
}
