use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mixwire_core::{
    CodecError, DispatchError, GainModify, LaneLoudness, Message, PacketRegistry, WireRecord,
    encode_packet,
};

#[derive(Parser, Debug)]
#[command(name = "mixwire")]
#[command(version)]
#[command(
    about = "Encode and decode mixer control-plane packets (lane loudness / gain modify).",
    long_about = None,
    after_help = "Examples:\n  mixwire packet decode 4001c80232 --pretty\n  mixwire packet encode lane_loudness 1:200 2:50\n  mixwire packet kinds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on control-plane packet buffers.
    Packet {
        #[command(subcommand)]
        command: PacketCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PacketCommands {
    /// Classify and decode a packet given as hex, printing JSON.
    Decode {
        /// Packet bytes as hex digits (whitespace allowed)
        hex: String,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,
    },
    /// Encode records of one kind into a packet, printing hex.
    Encode {
        /// Packet kind name (see `mixwire packet kinds`)
        kind: String,

        /// Records as lane:value pairs, e.g. 1:200
        #[arg(required = true)]
        records: Vec<String>,
    },
    /// List registered packet kinds and their type tags.
    Kinds,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packet { command } => match command {
            PacketCommands::Decode {
                hex,
                pretty,
                compact,
            } => cmd_packet_decode(&hex, pretty, compact),
            PacketCommands::Encode { kind, records } => cmd_packet_encode(&kind, &records),
            PacketCommands::Kinds => cmd_packet_kinds(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_packet_decode(hex: &str, pretty: bool, _compact: bool) -> Result<(), CliError> {
    let bytes = parse_hex(hex)?;
    let registry = PacketRegistry::with_default_kinds();
    let message = registry.dispatch(&bytes).map_err(describe_dispatch_error)?;
    let json = serialize_message(&message, pretty)?;
    println!("{}", json);
    Ok(())
}

fn cmd_packet_encode(kind: &str, records: &[String]) -> Result<(), CliError> {
    let packet = match kind {
        k if k == LaneLoudness::KIND_NAME => encode_kind(records, LaneLoudness::new)?,
        k if k == GainModify::KIND_NAME => encode_kind(records, GainModify::new)?,
        other => {
            return Err(CliError::new(
                format!("unknown packet kind: {}", other),
                Some("run `mixwire packet kinds` for the registered kinds".to_string()),
            ));
        }
    };
    println!("{}", to_hex(&packet));
    Ok(())
}

fn cmd_packet_kinds() -> Result<(), CliError> {
    let registry = PacketRegistry::with_default_kinds();
    for kind in registry.kinds() {
        println!("{}  {:#04x}", kind.name(), kind.tag());
    }
    Ok(())
}

fn encode_kind<R: WireRecord>(
    pairs: &[String],
    build: fn(i64, i64) -> Result<R, CodecError>,
) -> Result<Vec<u8>, CliError> {
    let mut records = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let (lane, value) = split_pair(pair)?;
        let record = build(lane, value).map_err(|err| CliError::new(err.to_string(), None))?;
        records.push(record);
    }
    encode_packet(&records).map_err(|err| CliError::new(err.to_string(), None))
}

fn split_pair(pair: &str) -> Result<(i64, i64), CliError> {
    let hint = Some("records are lane:value pairs, e.g. 1:200".to_string());
    let Some((lane, value)) = pair.split_once(':') else {
        return Err(CliError::new(format!("malformed record: {}", pair), hint));
    };
    let lane: i64 = lane
        .trim()
        .parse()
        .with_context(|| format!("invalid lane id: {}", lane))
        .map_err(|err: anyhow::Error| CliError::new(err.to_string(), hint.clone()))?;
    let value: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid field value: {}", value))
        .map_err(|err: anyhow::Error| CliError::new(err.to_string(), hint.clone()))?;
    Ok((lane, value))
}

fn parse_hex(hex: &str) -> Result<Vec<u8>, CliError> {
    let digits: Vec<char> = hex.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let hint = Some("pass packet bytes as hex digits, e.g. 4001c80232".to_string());
    if digits.is_empty() || digits.len() % 2 != 0 {
        return Err(CliError::new(
            format!("hex input must be a non-empty, even number of digits: {}", hex),
            hint,
        ));
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let nibble = |c: char| {
            c.to_digit(16)
                .ok_or_else(|| CliError::new(format!("invalid hex digit: {}", c), hint.clone()))
        };
        bytes.push(((nibble(pair[0])? << 4) | nibble(pair[1])?) as u8);
    }
    Ok(bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

fn describe_dispatch_error(err: DispatchError) -> CliError {
    let hint = match &err {
        DispatchError::UnrecognizedPacket { .. } => {
            Some("run `mixwire packet kinds` for the registered type tags".to_string())
        }
        DispatchError::EmptyBuffer => Some("pass at least the type tag byte".to_string()),
        DispatchError::Codec(_) => None,
    };
    CliError::new(err.to_string(), hint)
}

fn serialize_message(message: &Message, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(message)
    } else {
        serde_json::to_string(message)
    };
    json.context("Failed to serialize decoded message")
        .map_err(CliError::from)
}
