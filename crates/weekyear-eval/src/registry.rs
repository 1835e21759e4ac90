//! Date/time operators and their expression templates
//!
//! A `TemplateRegistry` maps each `DateTimeOp` to a `Template`: text with
//! positional placeholders (`{0}`, `{1}`, ...) that a query translator fills
//! with operand expressions. Registries are ordinary values built by the
//! caller; there is no process-wide default instance.

use crate::error::{EvalError, EvalResult};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use weekyear_types::DateTimeField;

/// Abstract date/time extraction operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeOp {
    Year,
    Month,
    Week,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    Hour,
    Minute,
    Second,
    Millisecond,
    /// `year * 100 + month`
    YearMonth,
    /// ISO `weekyear * 100 + week`
    YearWeek,
    /// MySQL mode-0 year-week
    YearWeekMysql,
}

impl DateTimeOp {
    pub const ALL: [DateTimeOp; 13] = [
        DateTimeOp::Year,
        DateTimeOp::Month,
        DateTimeOp::Week,
        DateTimeOp::DayOfWeek,
        DateTimeOp::DayOfMonth,
        DateTimeOp::DayOfYear,
        DateTimeOp::Hour,
        DateTimeOp::Minute,
        DateTimeOp::Second,
        DateTimeOp::Millisecond,
        DateTimeOp::YearMonth,
        DateTimeOp::YearWeek,
        DateTimeOp::YearWeekMysql,
    ];

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            DateTimeOp::Year => "year",
            DateTimeOp::Month => "month",
            DateTimeOp::Week => "week",
            DateTimeOp::DayOfWeek => "day_of_week",
            DateTimeOp::DayOfMonth => "day_of_month",
            DateTimeOp::DayOfYear => "day_of_year",
            DateTimeOp::Hour => "hour",
            DateTimeOp::Minute => "minute",
            DateTimeOp::Second => "second",
            DateTimeOp::Millisecond => "millisecond",
            DateTimeOp::YearMonth => "year_month",
            DateTimeOp::YearWeek => "year_week",
            DateTimeOp::YearWeekMysql => "year_week_mysql",
        }
    }

    /// The single field this operator extracts, if it is a plain accessor
    pub fn field(&self) -> Option<DateTimeField> {
        match self {
            DateTimeOp::Year => Some(DateTimeField::Year),
            DateTimeOp::Month => Some(DateTimeField::Month),
            DateTimeOp::Week => Some(DateTimeField::WeekOfYear),
            DateTimeOp::DayOfWeek => Some(DateTimeField::DayOfWeek),
            DateTimeOp::DayOfMonth => Some(DateTimeField::DayOfMonth),
            DateTimeOp::DayOfYear => Some(DateTimeField::DayOfYear),
            DateTimeOp::Hour => Some(DateTimeField::Hour),
            DateTimeOp::Minute => Some(DateTimeField::Minute),
            DateTimeOp::Second => Some(DateTimeField::Second),
            DateTimeOp::Millisecond => Some(DateTimeField::Millisecond),
            DateTimeOp::YearMonth | DateTimeOp::YearWeek | DateTimeOp::YearWeekMysql => None,
        }
    }
}

impl fmt::Display for DateTimeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateTimeOp {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        DateTimeOp::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| EvalError::unknown_operator(s))
    }
}

/// `{{` and `}}` are escaped braces, `{N}` a placeholder; any other brace is an error
static TEMPLATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d+)\}|[{}]").expect("valid template token regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
}

/// A parsed expression template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    arity: usize,
}

impl Template {
    /// Parse template text
    pub fn parse(source: impl Into<String>) -> EvalResult<Self> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut arity = 0;
        let mut last = 0;

        for caps in TEMPLATE_TOKEN.captures_iter(&source) {
            let Some(token) = caps.get(0) else { continue };
            literal.push_str(&source[last..token.start()]);
            last = token.end();

            match (token.as_str(), caps.get(1)) {
                ("{{", _) => literal.push('{'),
                ("}}", _) => literal.push('}'),
                (_, Some(index)) => {
                    let index = index
                        .as_str()
                        .parse::<u16>()
                        .map(usize::from)
                        .map_err(|_| EvalError::invalid_template(&source, "placeholder index too large"))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Arg(index));
                    arity = arity.max(index + 1);
                }
                (brace, None) => {
                    return Err(EvalError::invalid_template(
                        &source,
                        format!("unmatched '{}' at byte {}", brace, token.start()),
                    ));
                }
            }
        }
        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source,
            segments,
            arity,
        })
    }

    /// The original template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of arguments needed: the highest placeholder index plus one
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Substitute `args` for the placeholders
    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> EvalResult<String> {
        if args.len() < self.arity {
            return Err(EvalError::TemplateArity {
                template: self.source.clone(),
                expected: self.arity,
                found: args.len(),
            });
        }

        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg(index) => out.push_str(args[*index].as_ref()),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Templates rendering each operator as an expression over a `chrono` date
/// value, with the MySQL year-week delegated to this crate.
const CHRONO_TEMPLATES: [(DateTimeOp, &str); 13] = [
    (DateTimeOp::Year, "{0}.year()"),
    (DateTimeOp::Month, "{0}.month()"),
    (DateTimeOp::Week, "{0}.iso_week().week()"),
    (DateTimeOp::DayOfWeek, "{0}.weekday().number_from_monday()"),
    (DateTimeOp::DayOfMonth, "{0}.day()"),
    (DateTimeOp::DayOfYear, "{0}.ordinal()"),
    (DateTimeOp::Hour, "{0}.hour()"),
    (DateTimeOp::Minute, "{0}.minute()"),
    (DateTimeOp::Second, "{0}.second()"),
    (DateTimeOp::Millisecond, "({0}.nanosecond() / 1_000_000)"),
    (DateTimeOp::YearMonth, "({0}.year() * 100 + {0}.month() as i32)"),
    (
        DateTimeOp::YearWeek,
        "({0}.iso_week().year() * 100 + {0}.iso_week().week() as i32)",
    ),
    (DateTimeOp::YearWeekMysql, "weekyear_eval::mysql_year_week({0}.into())"),
];

/// Operator-to-template mapping
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<DateTimeOp, Template>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding a template for every operator, targeting
    /// `chrono` values
    pub fn chrono() -> EvalResult<Self> {
        let mut registry = Self::new();
        for (op, source) in CHRONO_TEMPLATES {
            registry.register(op, source)?;
        }
        Ok(registry)
    }

    /// Register a template, returning the one it replaces
    pub fn register(&mut self, op: DateTimeOp, source: &str) -> EvalResult<Option<Template>> {
        let template = Template::parse(source)?;
        let previous = self.templates.insert(op, template);
        match &previous {
            Some(old) => log::debug!("replaced template for {op}: '{old}' -> '{source}'"),
            None => log::debug!("registered template for {op}: '{source}'"),
        }
        Ok(previous)
    }

    /// Get the template for an operator
    pub fn get(&self, op: DateTimeOp) -> Option<&Template> {
        self.templates.get(&op)
    }

    pub fn contains(&self, op: DateTimeOp) -> bool {
        self.templates.contains_key(&op)
    }

    /// Render the template registered for `op`
    pub fn render<S: AsRef<str>>(&self, op: DateTimeOp, args: &[S]) -> EvalResult<String> {
        let template = self
            .templates
            .get(&op)
            .ok_or(EvalError::MissingTemplate { operator: op })?;
        let rendered = template.render(args)?;
        log::trace!("rendered {op} as '{rendered}'");
        Ok(rendered)
    }

    /// Registered operators and templates, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (DateTimeOp, &Template)> {
        self.templates.iter().map(|(op, template)| (*op, template))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
