//! Per-command validation rules
//!
//! Each command selects a (datatype, arity, range) triple of checks. The
//! triple is picked by an exhaustive match on [`CommandKind`], so adding a
//! command without rules is a compile error.
//!
//! Parse-success semantics are full-token: the whole whitespace-delimited
//! value must parse, so `"5x"` fails where `"5"` passes.

use crate::command::CommandKind;

/// The check triple for one command kind.
///
/// `datatype` runs first on the value token, then `arity` (which also sees
/// whether further tokens followed the value), then `range`. Range checks may
/// re-parse the token; by the time they run the datatype check has proven the
/// parse succeeds.
pub struct Rules {
    pub datatype: fn(&str) -> bool,
    pub arity: fn(value: &str, no_more_tokens: bool) -> bool,
    pub range: fn(&str) -> bool,
}

/// Selects the rule triple for a command.
pub fn rules_for(kind: CommandKind) -> Rules {
    match kind {
        CommandKind::Draw => Rules {
            datatype: is_real,
            arity: single_value,
            range: distance_range,
        },
        CommandKind::Move => Rules {
            datatype: is_real,
            arity: single_value,
            range: distance_range,
        },
        CommandKind::Rotate => Rules {
            datatype: is_real,
            arity: single_value,
            range: unconstrained,
        },
        CommandKind::Fg => Rules {
            datatype: is_integer,
            arity: single_value,
            range: fg_range,
        },
        CommandKind::Bg => Rules {
            datatype: is_integer,
            arity: single_value,
            range: bg_range,
        },
        CommandKind::Pattern => Rules {
            datatype: is_printable_char,
            arity: single_char,
            range: unconstrained,
        },
    }
}

fn is_real(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(|v| v.is_finite())
}

fn is_integer(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

fn is_printable_char(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_control())
}

fn single_value(_value: &str, no_more_tokens: bool) -> bool {
    no_more_tokens
}

/// PATTERN's stricter arity: the value itself must be exactly one character.
fn single_char(value: &str, no_more_tokens: bool) -> bool {
    value.chars().count() == 1 && no_more_tokens
}

fn distance_range(value: &str) -> bool {
    value
        .parse::<f64>()
        .is_ok_and(|d| (0.0..=80.0).contains(&d))
}

fn fg_range(value: &str) -> bool {
    value.parse::<i64>().is_ok_and(|c| (0..=15).contains(&c))
}

fn bg_range(value: &str) -> bool {
    value.parse::<i64>().is_ok_and(|c| (0..=7).contains(&c))
}

fn unconstrained(_value: &str) -> bool {
    true
}
