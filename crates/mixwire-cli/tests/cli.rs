use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mixwire"))
}

#[test]
fn help_covers_packet_subcommands() {
    cmd().arg("packet").arg("decode").arg("--help").assert().success();
    cmd().arg("packet").arg("encode").arg("--help").assert().success();
    cmd().arg("packet").arg("kinds").assert().success();
}

#[test]
fn decode_outputs_json_message() {
    let assert = cmd()
        .arg("packet")
        .arg("decode")
        .arg("4001c80232")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["lane_loudness"][0]["lane_id"], 1);
    assert_eq!(value["lane_loudness"][0]["current_loudness"], 200);
    assert_eq!(value["lane_loudness"][1]["lane_id"], 2);
}

#[test]
fn encode_then_decode_round_trips() {
    let assert = cmd()
        .arg("packet")
        .arg("encode")
        .arg("lane_loudness")
        .arg("1:200")
        .arg("2:50")
        .assert()
        .success();
    let hex = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(hex.trim(), "4001c80232");

    cmd()
        .arg("packet")
        .arg("decode")
        .arg(hex.trim())
        .assert()
        .success()
        .stdout(contains("lane_loudness"));
}

#[test]
fn encode_rejects_out_of_range_value() {
    cmd()
        .arg("packet")
        .arg("encode")
        .arg("lane_loudness")
        .arg("1:300")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("300")));
}

#[test]
fn decode_rejects_bad_hex_with_hint() {
    cmd()
        .arg("packet")
        .arg("decode")
        .arg("zz")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn decode_reports_unrecognized_packet() {
    cmd()
        .arg("packet")
        .arg("decode")
        .arg("7f0102")
        .assert()
        .failure()
        .stderr(contains("unrecognized packet"));
}

#[test]
fn kinds_lists_registered_tags() {
    cmd()
        .arg("packet")
        .arg("kinds")
        .assert()
        .success()
        .stdout(contains("lane_loudness").and(contains("0x40")).and(contains("gain_modify")));
}
