use crate::error::ParseError;

/// A lexical token with its byte offset in the input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// Splits the input into tokens, skipping whitespace.
///
/// Numbers are decimal with an optional fraction and optional `e`/`E`
/// exponent. Identifiers are ASCII-alphabetic runs; the parser decides
/// whether one names the variable, a constant, or a function.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' | '-' | '*' | '/' | '^' | '(' | ')' => {
                chars.next();
                let token = match ch {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '^' => Token::Caret,
                    '(' => Token::LParen,
                    _ => Token::RParen,
                };
                tokens.push(Spanned { token, pos });
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = pos;
                let mut saw_digit = false;
                while let Some(&(p, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        saw_digit |= c.is_ascii_digit();
                        end = p + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Optional exponent, only if followed by a valid suffix.
                let exponent = matches!(
                    chars.peek(),
                    Some(&(p, c)) if saw_digit
                        && (c == 'e' || c == 'E')
                        && has_exponent_suffix(&input[p..])
                );
                if exponent {
                    chars.next();
                    if matches!(chars.peek(), Some(&(_, '+')) | Some(&(_, '-'))) {
                        chars.next();
                    }
                    while let Some(&(p, c)) = chars.peek() {
                        if c.is_ascii_digit() {
                            end = p + c.len_utf8();
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
                let text = &input[pos..end];
                let value: f64 = text
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber { pos })?;
                tokens.push(Spanned {
                    token: Token::Num(value),
                    pos,
                });
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = pos;
                while let Some(&(p, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() {
                        end = p + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Spanned {
                    token: Token::Ident(input[pos..end].to_string()),
                    pos,
                });
            }
            _ => return Err(ParseError::UnexpectedChar { ch, pos }),
        }
    }

    Ok(tokens)
}

/// True if the input starts with `e`/`E` followed by a digit-bearing
/// exponent, so `2e3` lexes as one number while `2e` stays `2 * e`.
fn has_exponent_suffix(rest: &str) -> bool {
    let mut chars = rest.chars();
    let _ = chars.next();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('+') | Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}
