/*
 * Text Input Helpers
 *
 * Front ends collect workloads as plain text. Two formats are accepted:
 *
 * - Reference strings: page numbers separated by commas and/or whitespace,
 *   e.g. "7,0,1,2,0,3" or "7 0 1 2"
 * - Process tables: one process per line, `pid arrival burst [priority [kind]]`,
 *   blank lines and `#` comments ignored
 */

use crate::error::{Field, Result, SimError, ValidationError};
use crate::memory::PageId;
use crate::scheduler::{ProcessSpec, ProcessType, Workload};

/// Reference string used when the caller supplies none
pub const DEFAULT_REFERENCE_STRING: &str = "7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1";

/// Parse a reference string into page identifiers
///
/// An empty (or all-separator) string yields an empty sequence.
pub fn parse_reference_string(input: &str) -> Result<Vec<PageId>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u64>().map(PageId).map_err(|_| {
                SimError::from(ValidationError::NotNumeric {
                    field: Field::Page,
                    token: token.to_string(),
                })
            })
        })
        .collect()
}

fn number(field: Field, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| {
        ValidationError::NotNumeric {
            field,
            token: token.to_string(),
        }
        .into()
    })
}

/// Parse a process table into unvalidated specs
///
/// Line numbers in errors are 1-based. Range checks (negative values, zero
/// bursts, duplicate pids) are left to `Workload::new`.
pub fn parse_process_table(input: &str) -> Result<Vec<ProcessSpec>> {
    let mut specs = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = content.split_whitespace().collect();
        if !(3..=5).contains(&tokens.len()) {
            return Err(ValidationError::MalformedLine { line }.into());
        }

        let arrival = number(Field::Arrival, tokens[1])?;
        let burst = number(Field::Burst, tokens[2])?;
        let mut spec = ProcessSpec::new(tokens[0], arrival, burst);
        if let Some(priority) = tokens.get(3) {
            spec = spec.with_priority(number(Field::Priority, priority)?);
        }
        if let Some(kind) = tokens.get(4) {
            let kind = ProcessType::from_token(kind).ok_or_else(|| ValidationError::UnknownKind {
                line,
                token: kind.to_string(),
            })?;
            spec = spec.with_kind(kind);
        }
        specs.push(spec);
    }

    Ok(specs)
}

/// Parse and validate a process table in one go
pub fn load_workload(input: &str) -> Result<Workload> {
    Workload::new(parse_process_table(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::scheduler::Pid;

    #[test]
    fn reference_string_accepts_mixed_separators() {
        let pages = parse_reference_string(" 7,0 1,,2\n3 ").unwrap();
        assert_eq!(pages, vec![PageId(7), PageId(0), PageId(1), PageId(2), PageId(3)]);
        assert!(parse_reference_string("").unwrap().is_empty());
        assert_eq!(parse_reference_string(DEFAULT_REFERENCE_STRING).unwrap().len(), 20);
    }

    #[test]
    fn reference_string_rejects_garbage() {
        assert_eq!(
            parse_reference_string("1,two,3"),
            Err(SimError::Validation(ValidationError::NotNumeric {
                field: Field::Page,
                token: "two".to_string(),
            }))
        );
        assert!(parse_reference_string("1,-2").is_err());
    }

    #[test]
    fn process_table_with_optional_columns() {
        let specs = parse_process_table(
            "# pid arrival burst priority kind\n\
             A 0 5\n\
             \n\
             B 1 3 2 io   # trailing comment\n\
             C 2 1 0\n",
        )
        .unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0], ProcessSpec::new("A", 0, 5));
        assert_eq!(specs[1].priority, 2);
        assert_eq!(specs[1].kind, ProcessType::IoBound);
        assert_eq!(specs[2].kind, ProcessType::CpuBound);
    }

    #[test]
    fn process_table_errors_name_the_line() {
        assert_eq!(
            parse_process_table("A 0 5\nB 1\n"),
            Err(SimError::Validation(ValidationError::MalformedLine { line: 2 }))
        );
        assert_eq!(
            parse_process_table("A 0 5 1 gpu"),
            Err(SimError::Validation(ValidationError::UnknownKind {
                line: 1,
                token: "gpu".to_string(),
            }))
        );
        assert!(matches!(
            parse_process_table("A x 5"),
            Err(SimError::Validation(ValidationError::NotNumeric { field: Field::Arrival, .. }))
        ));
    }

    #[test]
    fn load_workload_validates() {
        assert_eq!(
            load_workload("A 0 1\nA 1 1"),
            Err(SimError::Configuration(ConfigurationError::DuplicatePid(Pid::from("A"))))
        );
        assert_eq!(
            load_workload("# nothing\n"),
            Err(SimError::Configuration(ConfigurationError::EmptyWorkload))
        );
        assert_eq!(load_workload("A 0 1\nB 3 2").unwrap().len(), 2);
    }
}
