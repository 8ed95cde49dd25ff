//! Top-level splitting of a parameter-list body.
//!
//! The body is lexed with `logos` into parentheses, commas and runs of other
//! text. A depth counter tracks nesting so that a comma inside a size or
//! precision qualifier such as `NUMBER(38,0)` does not split the parameter.

use log::warn;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[regex(r"[^(),]+")]
    Text,
}

/// Split `body` on commas that sit outside any parentheses.
///
/// Each segment is trimmed of surrounding whitespace. A body that is empty
/// or only whitespace yields no segments; otherwise the number of segments
/// is the number of top-level commas plus one. An excess `)` is logged and
/// otherwise ignored, so depth never drops below zero.
///
/// # Examples
///
/// ```
/// use ddlcheck::signature::split_top_level;
///
/// let parts = split_top_level("NUMBER(38,0), VARCHAR");
/// assert_eq!(parts, vec!["NUMBER(38,0)", "VARCHAR"]);
/// ```
#[must_use]
pub fn split_top_level(body: &str) -> Vec<&str> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut lexer = Token::lexer(body);
    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) if depth > 0 => depth -= 1,
            Ok(Token::RParen) => {
                warn!("excess closing parenthesis at byte {} in {body:?}", span.start);
            }
            Ok(Token::Comma) if depth == 0 => {
                parts.push(body.get(start..span.start).unwrap_or("").trim());
                start = span.end;
            }
            Ok(Token::Comma | Token::Text) | Err(()) => {}
        }
    }
    parts.push(body.get(start..).unwrap_or("").trim());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Vec::new())]
    #[case("   ", Vec::new())]
    #[case("NUMBER", vec!["NUMBER"])]
    #[case("NUMBER(38,0), VARCHAR", vec!["NUMBER(38,0)", "VARCHAR"])]
    #[case(" A ,B,  C ", vec!["A", "B", "C"])]
    #[case("ARRAY(NUMBER(38,0)), OBJECT", vec!["ARRAY(NUMBER(38,0))", "OBJECT"])]
    #[case("A,", vec!["A", ""])]
    #[case("A, , B", vec!["A", "", "B"])]
    #[case("A), B", vec!["A)", "B"])]
    fn splits_on_top_level_commas(#[case] body: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_top_level(body), expected);
    }

    fn top_level_commas(body: &str) -> usize {
        let mut depth = 0usize;
        let mut commas = 0usize;
        for c in body.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => commas += 1,
                _ => {}
            }
        }
        commas
    }

    #[rstest]
    #[case("NUMBER(38,0), VARCHAR, DEFAULT BOOLEAN")]
    #[case("VECTOR(FLOAT, 256)")]
    #[case("A((1,2),(3,4)), B(5), C")]
    #[case("TIMESTAMP_NTZ(9)")]
    fn segment_count_matches_top_level_commas(#[case] body: &str) {
        assert_eq!(split_top_level(body).len(), top_level_commas(body) + 1);
    }
}
