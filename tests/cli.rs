use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_RATES: &str = "year,rate\n2020,5\n2021,10\n2022,-2\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write_rates(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("inflation").unwrap();
        cmd.env("PESO_INFLATION_DIR", self.dir.path().join("config"))
            .env_remove("PESO_INFLATION_RATES")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn convert_forward() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "100", "--from", "2020", "--to", "2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In 2020, the goods you can buy for ₱100.00"))
        .stdout(predicate::str::contains(
            "would roughly cost you ₱107.80 (7.80% increase)",
        ))
        .stdout(predicate::str::contains("Source: BSP and public datasets."));
}

#[test]
fn convert_backward_with_grouping() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "1,000", "--from", "2022", "--to", "2020", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₱927.64"))
        .stdout(predicate::str::contains("decrease"))
        .stdout(predicate::str::contains("Multiplier:  1.078000"));
}

#[test]
fn convert_swap() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "100", "--from", "2020", "--to", "2022", "--swap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In 2022"))
        .stdout(predicate::str::contains("₱92.76"));
}

#[test]
fn convert_invalid_amount() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "abc", "--from", "2020", "--to", "2021"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter a valid amount to see the result."))
        .stderr(predicate::str::contains(
            "Please enter a valid non-negative number for the amount.",
        ))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn convert_negative_amount() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "-5", "--from", "2020", "--to", "2021"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter a valid amount to see the result."))
        .stderr(predicate::str::contains(
            "Please enter a valid non-negative number for the amount.",
        ))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn convert_out_of_range_result() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["convert", "1e308", "--from", "1990", "--to", "2024"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter a valid amount to see the result."))
        .stdout(predicate::str::contains("inf").not())
        .stderr(predicate::str::contains(
            "Please enter a valid non-negative number for the amount.",
        ));
}

#[test]
fn convert_same_year() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "250", "--from", "2021", "--to", "2021"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₱250.00 (0.00% increase)"))
        .stderr(predicate::str::contains("Picking the same year shows no change."));
}

#[test]
fn convert_unknown_year() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "100", "--from", "1999", "--to", "2021"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Year 1999 is not in the rate table (2020-2022)"));
}

#[test]
fn convert_strict_rejects_unknown_rate() {
    let fx = Fixture::new();
    let rates = fx.write_rates("gaps.json", r#"{"2020": 5, "2021": null, "2022": 1}"#);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "100", "--from", "2020", "--to", "2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₱101.00"));

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["convert", "100", "--from", "2020", "--to", "2022", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No inflation rate recorded for 2021"));
}

#[test]
fn convert_builtin_defaults() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["convert", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In 1990"))
        .stdout(predicate::str::contains("at the end of 2025"))
        .stderr(predicate::str::contains("WARN").not());
}

#[test]
fn table_grid() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average inflation by year"))
        .stdout(predicate::str::contains("2025  —"))
        .stdout(predicate::str::contains("1990"));
}

#[test]
fn table_csv_export() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);

    fx.cmd()
        .arg("--rates")
        .arg(&rates)
        .args(["table", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "year,rate,delta\n2022,-2,-12.00\n2021,10,5.00\n2020,5,\n",
        ));
}

#[test]
fn table_json_to_file() {
    let fx = Fixture::new();
    let output = fx.dir.path().join("deltas.json");

    fx.cmd()
        .args(["table", "--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rate table written to"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("\"schema_version\": \"1.0.0\""));
    assert!(contents.contains("\"year\": 1990"));
}

#[test]
fn table_rejects_zero_columns() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["table", "--columns", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--columns must be at least 1"));
}

#[test]
fn years_list() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("Year"))
        .stdout(predicate::str::contains("0.7%"));
}

#[test]
fn init_then_config() {
    let fx = Fixture::new();

    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      no"));

    fx.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      yes"))
        .stdout(predicate::str::contains("Rate table:           built-in"))
        .stdout(predicate::str::contains("1990-2025 (36 years)"));
}

#[test]
fn settings_rates_file_is_used() {
    let fx = Fixture::new();
    let rates = fx.write_rates("rates.csv", SAMPLE_RATES);
    let config_dir = fx.dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        format!(r#"{{"rates_file": {:?}}}"#, rates.display().to_string()),
    )
    .unwrap();

    fx.cmd()
        .arg("years")
        .assert()
        .success()
        .stdout(predicate::str::contains("2022"))
        .stdout(predicate::str::contains("1990").not());
}
