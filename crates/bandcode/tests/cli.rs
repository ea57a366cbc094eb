use std::path::Path;
use std::process::Output;

use assert_cmd::Command;

fn bandcode(home: &Path, args: &[&str]) -> Output {
    Command::cargo_bin("bandcode")
        .unwrap()
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn decodes_a_mica_capacitor() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(
        home.path(),
        &["decode", "capacitor", "--type", "K", "red,violet,orange,brown,orange"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("27 nF (27000 pF)"), "{out}");
    assert!(out.contains("±1%"), "{out}");
    assert!(out.contains("26.73 nF – 27.27 nF"), "{out}");
    assert!(out.contains("400 V"), "{out}");
    assert!(out.contains("-150 × 10⁻⁶ /°C"), "{out}");
}

#[test]
fn decodes_a_resistor_from_separate_arguments() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(
        home.path(),
        &["decode", "resistor", "Yellow", "Violet", "Black", "Brown", "Brown"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("4.7 kΩ (4700 Ω)"), "{out}");
    assert!(out.contains("±1% (precision)"), "{out}");
    assert!(out.contains("4.653 kΩ – 4.747 kΩ"), "{out}");
}

#[test]
fn json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(
        home.path(),
        &["decode", "resistor", "yellow,violet,black,gold", "--format", "json"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["component"], "resistor");
    assert_eq!(json["resistance_ohms"], "47");
    assert_eq!(json["min_ohms"], "44.65");
    assert_eq!(json["max_ohms"], "49.35");
    assert_eq!(json["layout"]["layout"], "four_band");
}

#[test]
fn invalid_band_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(home.path(), &["decode", "capacitor", "gold,red,red,brown"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Band 1: Gold is not valid for a digit band"),
        "{}",
        stderr(&output)
    );

    let output = bandcode(
        home.path(),
        &["decode", "resistor", "red,red,red,red,red,red,red"],
    );
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Invalid resistor band count 7 (must be 4, 5, or 6)"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn unknown_color_is_rejected_by_the_parser() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(home.path(), &["decode", "resistor", "red,teal,red,gold"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown color 'teal'"), "{}", stderr(&output));
}

#[test]
fn small_capacitor_advisory_is_a_warning() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(
        home.path(),
        &["decode", "capacitor", "brown,black,black,orange"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("Warning: Band 4: Orange tolerance not typically used"));
    assert!(stdout(&output).contains("±3%"));
}

#[test]
fn config_supplies_the_default_type() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("bandcode.toml");
    std::fs::write(&config, "capacitor_type = \"M\"\n").unwrap();

    let output = bandcode(
        home.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "decode",
            "capacitor",
            "brown,black,yellow,gold,brown",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Type M (Electrolytic 4-Band)"), "{out}");
    assert!(out.contains("1.6 V"), "{out}");
}

#[test]
fn reference_tables() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(home.path(), &["colors"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for name in ["Black", "Violet", "Silver"] {
        assert!(out.contains(name), "{out}");
    }

    let output = bandcode(home.path(), &["types"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Polyester / Polystyrene"));
}

#[test]
fn wizard_requires_a_terminal() {
    let home = tempfile::tempdir().unwrap();
    let output = bandcode(home.path(), &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("interactive terminal"), "{}", stderr(&output));
}
