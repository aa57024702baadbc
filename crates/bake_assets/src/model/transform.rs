//! `transform` attribute parsing.
//!
//! The grammar is a whitespace/comma separated list of `name(args)`
//! tokens.  Only `translate(x, y)` and `scale(x, y)` have an effect; every
//! other name (`rotate`, `matrix`, `skewX`, ...) is skipped together with
//! its argument list.  Tokens compose on the right in textual order.

use bake_core::{AffineMatrix, BakeError, BakeResult};
use glam::{Mat3, Vec2};

/// One `name(args)` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformToken<'a> {
    pub name: &'a str,
    pub args: &'a str,
    /// The full token text, for diagnostics.
    pub text: &'a str,
}

pub struct Tokens<'a> {
    rest: &'a str,
}

pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = BakeResult<TransformToken<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self
                .rest
                .trim_start_matches(|c: char| c.is_whitespace() || c == ',');
            if start.is_empty() {
                self.rest = start;
                return None;
            }

            let name_len = start
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(start.len());
            if name_len == 0 {
                // stray character between tokens
                let skip = start.chars().next().map_or(0, char::len_utf8);
                self.rest = &start[skip..];
                continue;
            }

            let name = &start[..name_len];
            let after_name = start[name_len..].trim_start();
            let Some(after_paren) = after_name.strip_prefix('(') else {
                // bare word, not a transform
                self.rest = after_name;
                continue;
            };

            let Some(close) = after_paren.find(')') else {
                self.rest = "";
                return Some(Err(BakeError::Transform {
                    token: start.to_string(),
                    reason: "unclosed argument list",
                }));
            };

            let args = &after_paren[..close];
            let consumed = start.len() - after_paren.len() + close + 1;
            self.rest = &start[consumed..];
            return Some(Ok(TransformToken {
                name,
                args,
                text: &start[..consumed],
            }));
        }
    }
}

/// Parse a `transform` attribute into a matrix.  Empty text is the identity.
pub fn parse_transform(text: &str) -> BakeResult<Mat3> {
    let mut result = Mat3::IDENTITY;
    for token in tokens(text) {
        let token = token?;
        result = match token.name {
            "translate" => result.translated(pair(&token)?),
            "scale" => result.scaled(pair(&token)?),
            _ => result,
        };
    }
    Ok(result)
}

fn pair(token: &TransformToken) -> BakeResult<Vec2> {
    let malformed = |reason| BakeError::Transform {
        token: token.text.to_string(),
        reason,
    };

    let values = token
        .args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|a| !a.is_empty())
        .map(|a| a.parse::<f32>().map_err(|_| malformed("malformed number")))
        .collect::<BakeResult<Vec<_>>>()?;

    match values[..] {
        [x, y] => Ok(Vec2::new(x, y)),
        _ => Err(malformed("expected two numeric arguments")),
    }
}
