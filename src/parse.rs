//! Parser for the code-section line grammar.
//!
//! Grammar, one construct per line:
//! - `$name [creator]` starts a new code (`[creator]` optional)
//! - `*text` attaches a note to the code under construction
//! - any other non-empty line is a hexadecimal address/data pair
//!
//! Parsing is tolerant: malformed hex tokens degrade to zero and malformed
//! bracket syntax degrades to a partial or empty creator, so one bad line in
//! a hand-edited store never blocks loading of the well-formed codes around
//! it. Issues worth reporting are collected as structured warnings instead
//! of errors.

use serde::{Deserialize, Serialize};

use crate::code::{CodeLine, GeckoCode};

/// Which store a line sequence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeOrigin {
    /// The global/shared store.
    Global,
    /// The user-local override store.
    User,
}

impl CodeOrigin {
    fn is_user(self) -> bool {
        matches!(self, CodeOrigin::User)
    }
}

/// Machine-readable non-fatal parse issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ParseWarning {
    /// A `*` note line appeared before any `$` header. The note is dropped.
    #[serde(rename = "ORPHAN_NOTE")]
    OrphanNote {
        /// Zero-based index of the offending line.
        line: usize,
    },
}

/// Result of parsing one store's code section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Parsed codes in declaration order. Duplicate names are legal at this
    /// layer; they are only reconciled by [`merge_codes`](crate::merge_codes).
    pub codes: Vec<GeckoCode>,

    /// Non-fatal issues, in line order.
    pub warnings: Vec<ParseWarning>,
}

/// Parser state: either between codes or accumulating into one.
enum State {
    NoCode,
    InCode(GeckoCode),
}

/// Parse one store's raw code-section lines into structured codes.
///
/// `origin` stamps the `user_defined` flag on every produced code. End of
/// input is an implicit code boundary, symmetric with the next `$` header.
pub fn parse_lines(lines: &[String], origin: CodeOrigin) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut state = State::NoCode;

    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('$') {
            if let State::InCode(code) = state {
                finish_code(code, &mut outcome.codes);
            }
            state = State::InCode(parse_header(header, origin));
        } else if let Some(note) = line.strip_prefix('*') {
            match &mut state {
                State::InCode(code) => code.notes.push(note.to_string()),
                State::NoCode => {
                    outcome.warnings.push(ParseWarning::OrphanNote { line: index });
                }
            }
        } else {
            match &mut state {
                State::InCode(code) => code.codes.push(parse_code_line(line)),
                // A code line ahead of any header has no code to land in.
                State::NoCode => {}
            }
        }
    }

    if let State::InCode(code) = state {
        finish_code(code, &mut outcome.codes);
    }

    outcome
}

/// Codes without a name are never emitted.
fn finish_code(code: GeckoCode, out: &mut Vec<GeckoCode>) {
    if !code.name.is_empty() {
        out.push(code);
    }
}

/// Split a header (the text after `$`) into name and creator.
///
/// The name is everything up to the first `[`, trimmed. The creator is
/// everything between that `[` and the next `]`, untrimmed, running to end
/// of line when the bracket is unterminated. No balancing is attempted.
fn parse_header(header: &str, origin: CodeOrigin) -> GeckoCode {
    let mut code = GeckoCode {
        user_defined: origin.is_user(),
        ..GeckoCode::default()
    };
    match header.find('[') {
        Some(open) => {
            code.name = header[..open].trim().to_string();
            let rest = &header[open + 1..];
            code.creator = match rest.find(']') {
                Some(close) => rest[..close].to_string(),
                None => rest.to_string(),
            };
        }
        None => code.name = header.trim().to_string(),
    }
    code
}

fn parse_code_line(line: &str) -> CodeLine {
    let mut tokens = line.split_whitespace();
    CodeLine {
        address: parse_hex(tokens.next()),
        data: parse_hex(tokens.next()),
        original_line: line.to_string(),
    }
}

/// Missing or malformed tokens degrade to zero rather than failing.
fn parse_hex(token: Option<&str>) -> u32 {
    token
        .and_then(|t| u32::from_str_radix(t, 16).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_code_with_creator_and_note() {
        let input = lines(&[
            "$Infinite Health [Author]",
            "04000000 3C000000",
            "*grants invincibility",
        ]);
        let outcome = parse_lines(&input, CodeOrigin::User);
        assert_eq!(outcome.codes.len(), 1);
        let code = &outcome.codes[0];
        assert_eq!(code.name, "Infinite Health");
        assert_eq!(code.creator, "Author");
        assert_eq!(code.codes.len(), 1);
        assert_eq!(code.codes[0].address, 0x04000000);
        assert_eq!(code.codes[0].data, 0x3C000000);
        assert_eq!(code.codes[0].original_line, "04000000 3C000000");
        assert_eq!(code.notes, vec!["grants invincibility".to_string()]);
        assert!(code.user_defined);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_origin_stamps_user_defined() {
        let input = lines(&["$A", "$B"]);
        let global = parse_lines(&input, CodeOrigin::Global);
        assert!(global.codes.iter().all(|c| !c.user_defined));
        let user = parse_lines(&input, CodeOrigin::User);
        assert!(user.codes.iter().all(|c| c.user_defined));
    }

    #[test]
    fn test_header_without_creator() {
        let outcome = parse_lines(&lines(&["$Max Rupees"]), CodeOrigin::Global);
        assert_eq!(outcome.codes[0].name, "Max Rupees");
        assert_eq!(outcome.codes[0].creator, "");
    }

    #[test]
    fn test_header_name_is_trimmed_creator_is_not() {
        let outcome = parse_lines(&lines(&["$  Spaced Name   [ The Author ]"]), CodeOrigin::User);
        assert_eq!(outcome.codes[0].name, "Spaced Name");
        assert_eq!(outcome.codes[0].creator, " The Author ");
    }

    #[test]
    fn test_unterminated_creator_bracket_runs_to_end_of_line() {
        let outcome = parse_lines(&lines(&["$Code [Nobody"]), CodeOrigin::User);
        assert_eq!(outcome.codes[0].name, "Code");
        assert_eq!(outcome.codes[0].creator, "Nobody");
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let input = lines(&["", "$A", "", "00000000 00000001", ""]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        assert_eq!(outcome.codes.len(), 1);
        assert_eq!(outcome.codes[0].codes.len(), 1);
    }

    #[test]
    fn test_malformed_hex_degrades_to_zero() {
        let input = lines(&["$A", "ZZZZZZZZ 00000001"]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        let entry = &outcome.codes[0].codes[0];
        assert_eq!(entry.address, 0);
        assert_eq!(entry.data, 1);
        assert_eq!(entry.original_line, "ZZZZZZZZ 00000001");
    }

    #[test]
    fn test_single_token_code_line_defaults_data_to_zero() {
        let input = lines(&["$A", "04000000"]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        let entry = &outcome.codes[0].codes[0];
        assert_eq!(entry.address, 0x04000000);
        assert_eq!(entry.data, 0);
    }

    #[test]
    fn test_orphan_note_is_dropped_with_warning() {
        let input = lines(&["*floating comment", "$A"]);
        let outcome = parse_lines(&input, CodeOrigin::User);
        assert_eq!(outcome.codes.len(), 1);
        assert!(outcome.codes[0].notes.is_empty());
        assert_eq!(outcome.warnings, vec![ParseWarning::OrphanNote { line: 0 }]);
    }

    #[test]
    fn test_code_lines_before_any_header_are_dropped() {
        let input = lines(&["04000000 00000001", "$A", "04000000 00000002"]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        assert_eq!(outcome.codes.len(), 1);
        assert_eq!(outcome.codes[0].codes.len(), 1);
        assert_eq!(outcome.codes[0].codes[0].data, 2);
    }

    #[test]
    fn test_nameless_header_is_never_emitted() {
        let input = lines(&["$ [Ghost]", "04000000 00000001", "$Real"]);
        let outcome = parse_lines(&input, CodeOrigin::User);
        assert_eq!(outcome.codes.len(), 1);
        assert_eq!(outcome.codes[0].name, "Real");
    }

    #[test]
    fn test_duplicate_names_are_kept_at_this_layer() {
        let input = lines(&["$Twin", "$Twin"]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        assert_eq!(outcome.codes.len(), 2);
    }

    #[test]
    fn test_end_of_input_is_an_implicit_boundary() {
        let input = lines(&["$First", "$Last", "00000000 00000001"]);
        let outcome = parse_lines(&input, CodeOrigin::Global);
        assert_eq!(outcome.codes.len(), 2);
        assert_eq!(outcome.codes[1].name, "Last");
        assert_eq!(outcome.codes[1].codes.len(), 1);
    }

    #[test]
    fn test_note_strips_only_the_marker() {
        let input = lines(&["$A", "* keeps leading space"]);
        let outcome = parse_lines(&input, CodeOrigin::User);
        assert_eq!(outcome.codes[0].notes[0], " keeps leading space");
    }
}
