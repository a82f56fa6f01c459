use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn robokassa() -> Command {
    let mut cmd = Command::new(cargo_bin!("robokassa"));
    cmd.env_remove("ROBOKASSA_LOGIN")
        .env_remove("ROBOKASSA_PASSWORD1")
        .env_remove("ROBOKASSA_PASSWORD2")
        .args(["--login", "login", "--password1", "pass1", "--password2", "pass2"]);
    cmd
}

#[test]
fn test_sign_prints_md5_signature() {
    robokassa()
        .args(["sign", "--amount", "100", "--invoice-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("AE04404080C8AE85169399651A9D2DD3\n"));
}

#[test]
fn test_sign_does_not_echo_passwords() {
    robokassa()
        .args(["sign", "--amount", "100", "--invoice-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass1").not());
}

#[test]
fn test_sign_with_sha256() {
    robokassa()
        .args(["--algorithm", "sha256", "sign", "--amount", "100", "--invoice-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9A-F]{64}\n$").unwrap());
}

#[test]
fn test_unsupported_algorithm_fails() {
    robokassa()
        .args(["--algorithm", "md6", "sign", "--amount", "100", "--invoice-id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported signature algorithm"));
}

#[test]
fn test_unsupported_currency_fails() {
    robokassa()
        .args(["--currency", "RUB", "sign", "--amount", "100", "--invoice-id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output currency"));
}
