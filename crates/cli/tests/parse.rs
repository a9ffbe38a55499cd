use beacon_cli::Cli;
use clap::Parser;

#[test]
fn assistants_subcommand_parses() {
    assert!(Cli::try_parse_from(["beacon", "assistants"]).is_ok());
}

#[test]
fn invoke_with_sample_parses() {
    let parsed = Cli::try_parse_from(["beacon", "invoke", "--assistant", "content", "--sample"]);
    assert!(parsed.is_ok());
}

#[test]
fn invoke_requires_an_assistant() {
    assert!(Cli::try_parse_from(["beacon", "invoke", "--sample"]).is_err());
}

#[test]
fn inline_payload_and_sample_are_mutually_exclusive() {
    let parsed = Cli::try_parse_from([
        "beacon",
        "invoke",
        "--assistant",
        "content",
        "--payload",
        "{}",
        "--sample",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn payload_file_and_sample_are_mutually_exclusive() {
    let parsed = Cli::try_parse_from([
        "beacon",
        "invoke",
        "--assistant",
        "content",
        "--payload-file",
        "payload.json",
        "--sample",
    ]);
    assert!(parsed.is_err());
}
