//! Line-structured instance reader.
//!
//! ```text
//! M N
//! topic topic ...
//! id points difficulty topic length     (N lines)
//! ```
//!
//! Only structure is checked here: field counts, numeric syntax, the number
//! of problem lines, duplicate ids and duplicate topics. Range rules such as
//! `points <= M` belong to the external input validator.

use std::io::Read;
use std::str::FromStr;

use crate::domain::{Points, PreferenceList, ProblemRecord, ProblemSet};
use crate::error::{Result, SetForgeError};

const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// A parsed problem-selection instance.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Points the selection must reach.
    pub target: Points,
    /// The ranked problems.
    pub problems: ProblemSet,
}

impl Instance {
    pub fn new(target: Points, problems: ProblemSet) -> Self {
        Self { target, problems }
    }

    /// Reads and parses an instance from any reader.
    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_instance(&text)
    }
}

impl FromStr for Instance {
    type Err = SetForgeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_instance(s)
    }
}

/// Parses an instance from its text form.
///
/// # Examples
///
/// ```
/// use setforge_core::parse_instance;
///
/// let instance = parse_instance("10 2\ndp graphs\n1 5 3 dp 120\n2 6 5 graphs 200\n").unwrap();
/// assert_eq!(instance.target, 10);
/// assert_eq!(instance.problems.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`SetForgeError::Parse`] with a 1-based line number for
/// structural problems, and the domain errors for duplicate ids or topics.
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| SetForgeError::parse(1, "missing header line 'M N'"))?;
    let header_fields: Vec<&str> = header.split_whitespace().collect();
    if header_fields.len() != 2 {
        return Err(SetForgeError::parse(
            header_no,
            format!("expected 2 fields 'M N', found {}", header_fields.len()),
        ));
    }
    let target: Points = parse_field(header_no, "target", header_fields[0])?;
    let count: usize = parse_field(header_no, "problem count", header_fields[1])?;

    let (topics_no, topics_line) = lines
        .next()
        .ok_or_else(|| SetForgeError::parse(header_no + 1, "missing topic preference line"))?;
    if topics_line.is_empty() {
        return Err(SetForgeError::parse(topics_no, "topic preference list is empty"));
    }
    let preferences = PreferenceList::new(topics_line.split_whitespace())?;

    // The header count is untrusted until the records are seen.
    let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
    let mut last_line = topics_no;
    for (line_no, line) in lines {
        last_line = line_no;
        if line.is_empty() {
            continue;
        }
        if records.len() == count {
            return Err(SetForgeError::parse(
                line_no,
                format!("unexpected input after {} problems", count),
            ));
        }
        records.push(parse_record(line_no, line)?);
    }

    if records.len() != count {
        return Err(SetForgeError::parse(
            last_line,
            format!("expected {} problems, found {}", count, records.len()),
        ));
    }

    Ok(Instance::new(target, ProblemSet::new(records, preferences)?))
}

fn parse_record(line_no: usize, line: &str) -> Result<ProblemRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(SetForgeError::parse(
            line_no,
            format!(
                "expected 5 fields 'id points difficulty topic length', found {}",
                fields.len()
            ),
        ));
    }

    Ok(ProblemRecord::new(
        parse_field(line_no, "id", fields[0])?,
        parse_field(line_no, "points", fields[1])?,
        parse_field(line_no, "difficulty", fields[2])?,
        fields[3],
        parse_field(line_no, "length", fields[4])?,
    ))
}

fn parse_field<T>(line_no: usize, name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| SetForgeError::parse(line_no, format!("invalid {} '{}': {}", name, raw, e)))
}
