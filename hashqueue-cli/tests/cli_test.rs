use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const MD5_AB: &str = "187ef4436122d1cc2f40dc2b92f0eba0";
const MD5_ZZ: &str = "25ed1bcb423b0b7200f485fc5ff71c8e";

fn cli() -> Result<Command> {
    let mut cmd = Command::cargo_bin("hashqueue-cli")?;
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_crack_finds_plaintext() -> Result<()> {
    let dir = tempdir()?;
    cli()?
        .current_dir(dir.path())
        .args(["crack", MD5_AB, "--max-length", "2", "--num-workers", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^ab \(found in \d+\.\ds\)\n$").unwrap());
    Ok(())
}

#[test]
fn test_crack_reports_no_solution() -> Result<()> {
    let dir = tempdir()?;
    cli()?
        .current_dir(dir.path())
        .args(["crack", MD5_ZZ, "-m", "1", "-w", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to find a solution"));
    Ok(())
}

#[test]
fn test_crack_with_config_file() -> Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("crack.yaml");
    fs::write(&config_path, "alphabet: \"0123456789\"\nmax_length: 1\n")?;

    // The file limits lengths to 1; the command line raises it to 4.
    cli()?
        .current_dir(dir.path())
        .args([
            "crack",
            "81dc9bdb52d04dc20036dbd8313ed055",
            "--config",
            config_path.to_str().unwrap(),
            "-m",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1234 (found in "));
    Ok(())
}

#[test]
fn test_crack_rejects_malformed_hash() -> Result<()> {
    cli()?
        .args(["crack", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidHash"));
    Ok(())
}

#[test]
fn test_crack_rejects_oversized_max_length() -> Result<()> {
    cli()?
        .args(["crack", "0cc175b9c0f1b6a831c399e269772661"])
        .args(["-a", "a", "-m", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_length must be at most 64"));
    Ok(())
}

#[test]
fn test_buffer_describes_selection() -> Result<()> {
    cli()?
        .args(["buffer", "-q", "heap", "-p", "5", "-c", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "heap buffer for 5 producer(s) at speed 1 and 1 consumer(s) at speed 1",
        ));
    Ok(())
}

#[test]
fn test_buffer_rejects_unknown_queue() -> Result<()> {
    cli()?
        .args(["buffer", "--queue", "ring"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown queue type 'ring'"));
    Ok(())
}
