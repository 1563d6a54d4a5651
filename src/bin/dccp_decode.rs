//! DCCP 头部解码工具
//!
//! 从十六进制字符串、原始字节文件或内置样本中读取一个 DCCP 包并打印解码结果。

use std::fs;
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use dccp_rs::dccp::{DccpPacket, DecodeOptions, ExtensionHeader};
use dccp_rs::samples;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "dccp_decode", about = "解码单个 DCCP 包的头部")]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "file", "sample"])))]
struct Args {
    /// 十六进制字节串（允许空白和 `0x` 前缀）
    #[arg(long)]
    hex: Option<String>,
    /// 原始字节文件（从 DCCP 通用头部开始）
    #[arg(long)]
    file: Option<PathBuf>,
    /// 内置抓包样本
    #[arg(long, value_enum)]
    sample: Option<Sample>,
    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
    /// Data Offset 与实际头部长度不符时报错
    #[arg(long)]
    strict_offset: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    Request,
    ClientRequest,
    ServerAck,
}

fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits: {}", digits.len()));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let hi = pair[0].to_digit(16);
            let lo = pair[1].to_digit(16);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
                _ => Err(format!("invalid hex byte: {}{}", pair[0], pair[1])),
            }
        })
        .collect()
}

fn print_summary(pkt: &DccpPacket) {
    println!(
        "dccp {} -> {} type={:?} ccval={} cscov={} checksum={:#06x} x={} seq={} header_len={}",
        pkt.source_port(),
        pkt.dest_port(),
        pkt.packet_type(),
        pkt.ccval(),
        pkt.cscov(),
        pkt.checksum(),
        pkt.extended_seq_flag(),
        pkt.sequence_number(),
        pkt.header_len,
    );
    match &pkt.extension {
        ExtensionHeader::RequestResponse { code } => println!("code={code}"),
        ExtensionHeader::Ack { ack_number } => println!("ack={}", ack_number.value()),
        ExtensionHeader::Unparsed { raw } => println!("unparsed_bytes={}", raw.len()),
    }
}

fn main() {
    // 日志输出到 stderr，stdout 只留解码结果
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let bytes = if let Some(hex) = &args.hex {
        match parse_hex(hex) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        }
    } else if let Some(path) = &args.file {
        fs::read(path).expect("read packet file")
    } else {
        match args.sample {
            Some(Sample::Request) => samples::REQUEST.to_vec(),
            Some(Sample::ClientRequest) => samples::CLIENT_REQUEST.to_vec(),
            Some(Sample::ServerAck) => samples::SERVER_ACK.to_vec(),
            None => unreachable!("clap requires one input"),
        }
    };
    info!(len = bytes.len(), "开始解码");

    let opts = DecodeOptions {
        strict_offset: args.strict_offset,
    };
    let pkt = match DccpPacket::decode_with(&bytes, &opts) {
        Ok(pkt) => pkt,
        Err(e) => {
            eprintln!("error ({:?} stage): {e}", e.stage());
            std::process::exit(1);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&pkt).expect("serialize packet");
        println!("{json}");
    } else {
        print_summary(&pkt);
    }
}
