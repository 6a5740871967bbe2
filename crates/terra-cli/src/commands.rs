use std::io;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use terra_crypto::{composite_trace, digest_file, digest_reader, digests_match};
use terra_types::{Digest512, DigestTrace};

use crate::cli::*;
use crate::config::{OutputFormat, TerraConfig};

/// Input hashed by the demo command.
pub const DEMO_INPUT: &[u8] = b"This is some data to hash.";

/// Label printed in front of the demo digest.
pub const DEMO_LABEL: &str = "TerraHash-8192";

/// Settings resolved from the command line and the config file.
pub struct Session {
    pub config: TerraConfig,
    pub format: OutputFormat,
}

impl Session {
    pub fn new(config: TerraConfig, format_override: Option<OutputFormat>) -> Self {
        let format = format_override.unwrap_or(config.output.format);
        Self { config, format }
    }
}

pub fn run_command(command: Option<Command>, session: &Session) -> anyhow::Result<()> {
    match command {
        None | Some(Command::Demo) => cmd_demo(session),
        Some(Command::Hash(args)) => cmd_hash(args, session),
        Some(Command::Verify(args)) => cmd_verify(args, session),
        Some(Command::Config) => cmd_config(session),
    }
}

/// Where a digest's input comes from.
#[derive(Debug, PartialEq, Eq)]
enum Source {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    fn collect(text: Option<String>, files: Vec<PathBuf>) -> Vec<Source> {
        let mut sources: Vec<Source> = text.into_iter().map(Source::Text).collect();
        sources.extend(files.into_iter().map(Source::File));
        if sources.is_empty() {
            sources.push(Source::Stdin);
        }
        sources
    }

    fn label(&self) -> String {
        match self {
            Self::Text(text) => format!("{text:?}"),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "-".into(),
        }
    }

    fn digest(&self, chunk_size: usize) -> anyhow::Result<DigestTrace> {
        match self {
            Self::Text(text) => Ok(composite_trace(text.as_bytes())),
            Self::File(path) => digest_file(path, chunk_size)
                .with_context(|| format!("hashing {}", path.display())),
            Self::Stdin => digest_reader(io::stdin().lock(), chunk_size).context("hashing stdin"),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    source: String,
    digest: &'a Digest512,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a DigestTrace>,
}

impl<'a> Report<'a> {
    fn new(source: String, trace: &'a DigestTrace, show_trace: bool) -> Self {
        Self {
            source,
            digest: trace.composite(),
            trace: show_trace.then_some(trace),
        }
    }
}

fn render_text(source: &str, trace: &DigestTrace, show_trace: bool) -> String {
    let mut out = format!("{}  {}", trace.composite(), source);
    if show_trace {
        for (alg, digest) in trace.intermediates() {
            out.push_str(&format!("\n  {:<12} {}", alg.name().dimmed(), digest));
        }
    }
    out
}

fn cmd_demo(session: &Session) -> anyhow::Result<()> {
    let trace = composite_trace(DEMO_INPUT);
    tracing::debug!(len = DEMO_INPUT.len(), "hashed demo input");
    match session.format {
        OutputFormat::Text => {
            println!("{}: {}", DEMO_LABEL.bold(), trace.composite());
            if session.config.output.trace {
                for (alg, digest) in trace.intermediates() {
                    println!("  {:<12} {}", alg.name().dimmed(), digest);
                }
            }
        }
        OutputFormat::Json => {
            let source = String::from_utf8_lossy(DEMO_INPUT).into_owned();
            let report = Report::new(source, &trace, session.config.output.trace);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn cmd_hash(args: HashArgs, session: &Session) -> anyhow::Result<()> {
    let show_trace = args.trace || session.config.output.trace;
    let chunk_size = session.config.hashing.chunk_size;
    let sources = Source::collect(args.text, args.files);

    let mut reports = Vec::with_capacity(sources.len());
    for source in &sources {
        let trace = source.digest(chunk_size)?;
        tracing::info!(source = %source.label(), digest = %trace.composite().short_hex(), "hashed");
        reports.push((source.label(), trace));
    }

    match session.format {
        OutputFormat::Text => {
            for (label, trace) in &reports {
                println!("{}", render_text(label, trace, show_trace));
            }
        }
        OutputFormat::Json => {
            let json: Vec<Report<'_>> = reports
                .iter()
                .map(|(label, trace)| Report::new(label.clone(), trace, show_trace))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs, session: &Session) -> anyhow::Result<()> {
    let expected = Digest512::from_hex(&args.expected).context("malformed expected digest")?;
    let source = Source::collect(args.text, args.file.into_iter().collect())
        .into_iter()
        .next()
        .unwrap_or(Source::Stdin);
    let trace = source.digest(session.config.hashing.chunk_size)?;
    let matched = digests_match(trace.composite(), &expected);

    match session.format {
        OutputFormat::Text => {
            if matched {
                println!("{} {}", "✓".green().bold(), source.label());
            } else {
                println!("{} {}", "✗".red().bold(), source.label());
                println!("  expected: {}", expected);
                println!("  actual:   {}", trace.composite());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "source": source.label(),
                "matched": matched,
                "expected": expected,
                "actual": trace.composite(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    if !matched {
        anyhow::bail!("digest mismatch for {}", source.label());
    }
    Ok(())
}

fn cmd_config(session: &Session) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(&session.config)?);
    Ok(())
}
