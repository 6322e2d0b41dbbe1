use crate::{error::SyntaxErrorKind as Kind, keyword, prelude::*};
use entdsl_config_build::AnnotationConfig;
use tracing::debug;

const BLOCK_OPEN: char = '{';
const BLOCK_CLOSE: char = '}';
const ARRAY_CLOSE: char = ']';
const PARAM_OPEN: char = '(';
const PARAM_CLOSE: char = ')';
const SEPARATOR: char = ',';
const TERMINATOR: &str = ";";

///
/// AnnotationParser
///
/// Validates the annotation block of one field declaration against the
/// keyword table. Input is the declaration text from the first `{` onward
/// (or the remainder of the line when it has no block).
///

#[derive(Clone, Debug, Default)]
pub struct AnnotationParser {
    allow_empty_block: bool,
}

impl AnnotationParser {
    #[must_use]
    pub const fn new(config: &AnnotationConfig) -> Self {
        Self {
            allow_empty_block: config.allow_empty_block,
        }
    }

    /// Parse an annotation block into records, in source order.
    pub fn parse(&self, field_text: &str) -> Result<Vec<AnnotationRecord>, SchemaError> {
        let result = self.parse_block(field_text);
        if let Err(err) = &result {
            debug!(field = field_text, error = %err, "annotation block rejected");
        }

        result
    }

    fn parse_block(&self, text: &str) -> Result<Vec<AnnotationRecord>, SchemaError> {
        let (open, close) = match (text.find(BLOCK_OPEN), text.rfind(BLOCK_CLOSE)) {
            (None, None) => {
                check_array_tail(text)?;
                return Ok(Vec::new());
            }
            (Some(open), Some(close)) if open < close => (open, close),
            _ => return Err(SchemaError::syntax(Kind::MismatchedBracket, text)),
        };

        let tail = text[close + 1..].trim();
        if !tail.is_empty() && tail != TERMINATOR {
            return Err(SchemaError::syntax(Kind::TrailingContent, text));
        }

        let body = text[open + 1..close].trim();
        if body.is_empty() {
            return if self.allow_empty_block {
                Ok(Vec::new())
            } else {
                Err(SchemaError::syntax(Kind::EmptyBlock, text))
            };
        }

        body.split(SEPARATOR)
            .map(|token| parse_single(token.trim()))
            .collect()
    }
}

// no block: anything after a closing array marker is stray content
fn check_array_tail(text: &str) -> Result<(), SchemaError> {
    if let Some(idx) = text.find(ARRAY_CLOSE)
        && idx > 0
        && !text[idx + 1..].trim().is_empty()
    {
        return Err(SchemaError::syntax(Kind::TrailingContent, text));
    }

    Ok(())
}

// parse_single
// one `@Name` or `@Name(param)` token
fn parse_single(token: &str) -> Result<AnnotationRecord, SchemaError> {
    let Some(rest) = token.strip_prefix(keyword::ANNOTATION_SIGIL) else {
        return Err(SchemaError::syntax(Kind::MissingSigil, token));
    };

    let (name, param) = match rest.find(PARAM_OPEN) {
        Some(idx) => {
            let Some(inner) = rest[idx + 1..].strip_suffix(PARAM_CLOSE) else {
                return Err(SchemaError::syntax(Kind::UnclosedParameter, token));
            };
            let inner = inner.trim();
            if inner.is_empty() {
                return Err(SchemaError::syntax(Kind::EmptyParameter, token));
            }

            (rest[..idx].trim(), Some(inner))
        }
        None => (rest.trim(), None),
    };

    let spec = keyword::lookup(name).ok_or_else(|| SchemaError::UnknownAnnotation {
        name: name.to_string(),
    })?;

    match (spec.parameter, param) {
        (ParameterKind::None, None) => Ok(AnnotationRecord::flag(spec.name)),
        (ParameterKind::None, Some(_)) => {
            Err(SchemaError::syntax(Kind::ParameterNotAllowed, token))
        }
        (ParameterKind::Decimal | ParameterKind::Integer, None) => {
            Err(SchemaError::syntax(Kind::ParameterRequired, token))
        }
        (ParameterKind::Decimal, Some(raw)) => raw
            .parse::<Decimal>()
            .map(|value| AnnotationRecord::decimal(spec.name, value))
            .map_err(|_| SchemaError::syntax(Kind::InvalidDecimal, token)),
        (ParameterKind::Integer, Some(raw)) => raw
            .parse::<i32>()
            .map(|value| AnnotationRecord::integer(spec.name, value))
            .map_err(|_| SchemaError::syntax(Kind::InvalidInteger, token)),
    }
}

///
/// TESTS
///
