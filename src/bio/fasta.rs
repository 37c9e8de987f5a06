use crate::DnaRiskError;
use flate2::read::GzDecoder;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::newline,
    combinator::opt,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One `>header` plus the sequence lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: String,
}

impl FastaRecord {
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!(">{} {}", self.id, desc),
            None => format!(">{}", self.id),
        }
    }
}

/// Concatenate every non-header line of `content` into one uppercase
/// sequence. All header lines are dropped, so a multi-record file collapses
/// into a single sequence; use [`parse_records`] to keep records apart.
pub fn parse_fasta(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>'))
        .collect::<String>()
        .to_uppercase()
}

pub fn looks_like_fasta(content: &str) -> bool {
    content.trim_start().starts_with('>')
}

/// Take one line, without its terminator.
fn line(input: &str) -> IResult<&str, &str> {
    let (input, line) = take_till(|c: char| c == '\n')(input)?;
    let (input, _) = opt(newline)(input)?;
    Ok((input, line.trim_end_matches('\r')))
}

/// Parse a FASTA header line
fn parse_header(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, _) = tag(">")(input)?;
    let (input, header) = line(input)?;
    let header = header.trim();
    let (id, description) = match header.split_once(char::is_whitespace) {
        Some((id, desc)) if !desc.trim().is_empty() => (id, Some(desc.trim())),
        Some((id, _)) => (id, None),
        None => (header, None),
    };
    Ok((input, (id, description)))
}

/// Parse sequence lines until next header or EOF
fn parse_sequence(input: &str) -> IResult<&str, String> {
    let mut sequence = String::new();
    let mut remaining = input;

    while !remaining.is_empty() && !remaining.trim_start().starts_with('>') {
        let (rest, line) = line(remaining)?;
        sequence.extend(
            line.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase),
        );
        remaining = rest;
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &str) -> IResult<&str, FastaRecord> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;
    Ok((
        input,
        FastaRecord {
            id: id.to_string(),
            description: description.map(str::to_string),
            sequence,
        },
    ))
}

/// Parse `content` into ordered `(header, sequence)` records.
pub fn parse_records(content: &str) -> Result<Vec<FastaRecord>, DnaRiskError> {
    let mut records = Vec::new();
    let mut input = content.trim_start();

    while !input.is_empty() {
        if !input.starts_with('>') {
            return Err(DnaRiskError::Parse(
                "FASTA content must start with a '>' header line".to_string(),
            ));
        }

        match parse_record(input) {
            Ok((remaining, record)) => {
                records.push(record);
                input = remaining.trim_start();
            }
            Err(e) => {
                return Err(DnaRiskError::Parse(format!("Failed to parse FASTA: {:?}", e)));
            }
        }
    }

    Ok(records)
}

/// Read a sequence input file as text (supports .gz compression)
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, DnaRiskError> {
    let path = path.as_ref();
    let mut content = String::new();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        decoder.read_to_string(&mut content)?;
    } else {
        content = std::fs::read_to_string(path)?;
    }

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
