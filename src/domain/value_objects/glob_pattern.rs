//! Shell-style glob pattern for asset base names
//!
//! # Syntax
//!
//! | Form | Matches |
//! |------|---------|
//! | `*` | any run of characters |
//! | `?` | exactly one character |
//! | `[abc]`, `[a-z]`, `[[:digit:]]` | one character from the class |
//! | `[!abc]`, `[^abc]` | one character outside the class |
//! | `{a,b}` | either alternative (nestable) |
//! | `{1..3}` | any integer in the range |
//! | `@(a\|b)` | exactly one of the alternatives |
//! | `?(a\|b)` | zero or one of the alternatives |
//! | `*(a\|b)` | zero or more of the alternatives |
//! | `+(a\|b)` | one or more of the alternatives |
//! | `!(a\|b)` | anything except the alternatives |
//! | `\c` | the literal character `c` |
//!
//! A leading `!` (not followed by `(`) negates the whole pattern.
//!
//! Names starting with `.` are only matched by patterns whose body (after a
//! negating `!`) itself starts with `.`. Matching is anchored and
//! case-sensitive.

use regex::Regex;
use thiserror::Error;

/// Largest `{a..b}` range expanded into alternatives
const MAX_RANGE: u64 = 1024;

const POSIX_CLASSES: &[&str] = &[
    "alnum", "alpha", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

/// Reason a pattern failed to compile
#[derive(Debug, Error)]
pub enum GlobError {
    #[error("trailing backslash")]
    TrailingEscape,

    #[error("unclosed character class")]
    UnclosedClass,

    #[error("unclosed brace expansion")]
    UnclosedBrace,

    #[error("unclosed extglob group")]
    UnclosedGroup,

    #[error("negated extglob groups cannot be nested")]
    NestedNegation,

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// One compiled glob pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    negated: bool,
    dotfiles: bool,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// `*` followed by plain text
    Suffix(String),
    Regex(Regex),
    /// `<prefix>!(<excluded>)<rest>`
    Exclude {
        prefix: Regex,
        excluded: Regex,
        rest: Box<Matcher>,
    },
}

impl GlobPattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns an error for unclosed classes, braces or groups, a trailing
    /// backslash, or a `!(...)` group nested inside another group.
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let (negated, body) = match pattern.strip_prefix('!') {
            Some(rest) if !rest.starts_with('(') => (true, rest),
            _ => (false, pattern),
        };

        let matcher = match plain_suffix(body) {
            Some(suffix) => Matcher::Suffix(suffix.to_string()),
            None => {
                let chars: Vec<char> = body.chars().collect();
                let mut pos = 0;
                compile(&chars, &mut pos)?
            }
        };

        Ok(Self {
            source: pattern.to_string(),
            negated,
            dotfiles: body.starts_with('.'),
            matcher,
        })
    }

    /// `*<suffix>` without going through the parser
    pub fn suffix(suffix: &str) -> Self {
        Self {
            source: format!("*{}", suffix),
            negated: false,
            dotfiles: false,
            matcher: Matcher::Suffix(suffix.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether `name` (a single path segment) matches
    pub fn matches(&self, name: &str) -> bool {
        if name.starts_with('.') && !self.dotfiles {
            return false;
        }
        self.matcher.matches(name) != self.negated
    }
}

impl Matcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Suffix(suffix) => name
                .strip_suffix(suffix.as_str())
                .is_some_and(|head| !head.contains('/')),
            Matcher::Regex(re) => re.is_match(name),
            Matcher::Exclude {
                prefix,
                excluded,
                rest,
            } => boundaries(name)
                .filter(|&start| prefix.is_match(&name[..start]))
                .any(|start| {
                    boundaries(name).filter(|&end| end >= start).any(|end| {
                        let part = &name[start..end];
                        !part.contains('/') && !excluded.is_match(part) && rest.matches(&name[end..])
                    })
                }),
        }
    }
}

/// Char boundaries of `s`, end included
fn boundaries(s: &str) -> impl Iterator<Item = usize> + '_ {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
}

/// `*.css` style patterns: a leading star and no other syntax
fn plain_suffix(body: &str) -> Option<&str> {
    let rest = body.strip_prefix('*')?;
    if rest.contains(|c| matches!(c, '*' | '?' | '[' | '{' | '(' | '\\')) {
        None
    } else {
        Some(rest)
    }
}

fn compile(chars: &[char], pos: &mut usize) -> Result<Matcher, GlobError> {
    let prefix = translate(chars, pos, &[], true)?;
    if *pos >= chars.len() {
        return Ok(Matcher::Regex(anchored(&prefix)?));
    }

    // stopped on `!(`
    *pos += 2;
    let excluded = group(chars, pos)?;
    let rest = compile(chars, pos)?;
    Ok(Matcher::Exclude {
        prefix: anchored(&prefix)?,
        excluded: anchored(&excluded)?,
        rest: Box::new(rest),
    })
}

fn anchored(source: &str) -> Result<Regex, GlobError> {
    Ok(Regex::new(&format!(r"\A(?:{})\z", source))?)
}

/// Translate up to the first `stop` character into regex syntax.
///
/// At the top level a `!(` ends the run; anywhere else it is an error.
fn translate(
    chars: &[char],
    pos: &mut usize,
    stop: &[char],
    top_level: bool,
) -> Result<String, GlobError> {
    let mut out = String::new();

    while let Some(&c) = chars.get(*pos) {
        if stop.contains(&c) {
            break;
        }
        let opens_group = chars.get(*pos + 1) == Some(&'(');

        match c {
            '!' if opens_group => {
                if top_level {
                    break;
                }
                return Err(GlobError::NestedNegation);
            }
            '?' | '*' | '+' | '@' if opens_group => {
                *pos += 2;
                out.push_str(&group(chars, pos)?);
                match c {
                    '?' => out.push('?'),
                    '*' => out.push('*'),
                    '+' => out.push('+'),
                    _ => {}
                }
                continue;
            }
            '\\' => {
                let escaped = *chars.get(*pos + 1).ok_or(GlobError::TrailingEscape)?;
                push_literal(&mut out, escaped);
                *pos += 2;
                continue;
            }
            '[' => {
                out.push_str(&class(chars, pos)?);
                continue;
            }
            '{' => {
                out.push_str(&braces(chars, pos)?);
                continue;
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            other => push_literal(&mut out, other),
        }
        *pos += 1;
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// `|`-separated alternatives up to `)`; `pos` is just past the `(`
fn group(chars: &[char], pos: &mut usize) -> Result<String, GlobError> {
    let mut alternatives = Vec::new();
    loop {
        alternatives.push(translate(chars, pos, &['|', ')'], false)?);
        match chars.get(*pos) {
            Some(&'|') => *pos += 1,
            Some(&')') => {
                *pos += 1;
                break;
            }
            _ => return Err(GlobError::UnclosedGroup),
        }
    }
    Ok(format!("(?:{})", alternatives.join("|")))
}

/// `{a,b}` or `{1..3}`; `pos` is on the `{`
fn braces(chars: &[char], pos: &mut usize) -> Result<String, GlobError> {
    if let Some(range) = numeric_range(chars, pos) {
        return Ok(range);
    }

    *pos += 1;
    let mut items = Vec::new();
    loop {
        items.push(translate(chars, pos, &[',', '}'], false)?);
        match chars.get(*pos) {
            Some(&',') => *pos += 1,
            Some(&'}') => {
                *pos += 1;
                break;
            }
            _ => return Err(GlobError::UnclosedBrace),
        }
    }

    // `{a}` has nothing to expand and stays literal
    if items.len() == 1 {
        return Ok(format!(r"\{{{}\}}", items[0]));
    }
    Ok(format!("(?:{})", items.join("|")))
}

fn numeric_range(chars: &[char], pos: &mut usize) -> Option<String> {
    let open = *pos;
    let len = chars[open + 1..].iter().position(|&c| c == '}')?;
    let body: String = chars[open + 1..open + 1 + len].iter().collect();
    let (from, to) = body.split_once("..")?;
    let from: i64 = from.parse().ok()?;
    let to: i64 = to.parse().ok()?;
    if from.abs_diff(to) > MAX_RANGE {
        return None;
    }

    let values: Vec<String> = if from <= to {
        (from..=to).map(|n| n.to_string()).collect()
    } else {
        (to..=from).rev().map(|n| n.to_string()).collect()
    };
    *pos = open + len + 2;
    Some(format!("(?:{})", values.join("|")))
}

/// Bracket expression; `pos` is on the `[`
fn class(chars: &[char], pos: &mut usize) -> Result<String, GlobError> {
    let mut i = *pos + 1;
    let negated = matches!(chars.get(i), Some(&'!') | Some(&'^'));
    if negated {
        i += 1;
    }
    let first = i;
    let mut members = String::new();

    loop {
        let c = *chars.get(i).ok_or(GlobError::UnclosedClass)?;
        match c {
            // a `]` in first position is literal
            ']' if i > first => break,
            '[' => match posix_class(chars, i) {
                Some((name, width)) => {
                    members.push_str(&format!("[:{}:]", name));
                    i += width;
                    continue;
                }
                None => push_literal(&mut members, '['),
            },
            '\\' => {
                let escaped = *chars.get(i + 1).ok_or(GlobError::TrailingEscape)?;
                push_literal(&mut members, escaped);
                i += 2;
                continue;
            }
            '-' if i > first && chars.get(i + 1).is_some_and(|&next| next != ']') => {
                members.push('-');
            }
            other => push_literal(&mut members, other),
        }
        i += 1;
    }

    *pos = i + 1;
    if negated {
        Ok(format!("[^/{}]", members))
    } else {
        Ok(format!("[{}]", members))
    }
}

/// `[:name:]` at `i`, with its width in chars
fn posix_class(chars: &[char], i: usize) -> Option<(String, usize)> {
    if chars.get(i + 1) != Some(&':') {
        return None;
    }
    let len = chars.get(i + 2..)?.iter().position(|&c| c == ':')?;
    if chars.get(i + 3 + len) != Some(&']') {
        return None;
    }
    let name: String = chars[i + 2..i + 2 + len].iter().collect();
    POSIX_CLASSES
        .contains(&name.as_str())
        .then_some((name, len + 4))
}
