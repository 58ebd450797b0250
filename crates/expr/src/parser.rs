use std::f64::consts;

use crate::error::ParseError;
use crate::expr::{Expr, Func};
use crate::token::{Spanned, Token, tokenize};

/// Parses the input into an expression tree.
///
/// Grammar, in precedence order (loosest first):
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := ('+' | '-') unary | power
/// power      := atom ('^' unary)?          // right-associative
/// atom       := number | 'x' | 'pi' | 'e'
///             | function '(' expression ')'
///             | '(' expression ')'
/// ```
pub(crate) fn parse(text: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser { tokens, index: 0 };
    let expr = parser.expression()?;

    match parser.peek() {
        Some(spanned) => Err(ParseError::TrailingInput { pos: spanned.pos }),
        None => Ok(expr),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.index).cloned();
        if spanned.is_some() {
            self.index += 1;
        }
        spanned
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Plus => Expr::Add,
                Token::Minus => Expr::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.term()?;
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Star => Expr::Mul,
                Token::Slash => Expr::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().map(|s| &s.token) {
            Some(Token::Minus) => {
                self.advance();
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        if let Some(spanned) = self.peek() {
            if spanned.token == Token::Caret {
                self.advance();
                // Right-associative, and the exponent may carry a sign: 2^-3.
                let exponent = self.unary()?;
                return Ok(Expr::Pow(Box::new(base), Box::new(exponent)));
            }
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        let Some(spanned) = self.advance() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Num(value) => Ok(Expr::Num(value)),
            Token::LParen => {
                let inner = self.expression()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Token::Ident(name) => self.ident(name, spanned.pos),
            _ => Err(ParseError::UnexpectedToken { pos: spanned.pos }),
        }
    }

    fn ident(&mut self, name: String, pos: usize) -> Result<Expr, ParseError> {
        match name.as_str() {
            "x" => return Ok(Expr::X),
            "pi" => return Ok(Expr::Num(consts::PI)),
            "e" => return Ok(Expr::Num(consts::E)),
            _ => {}
        }

        let called = matches!(self.peek(), Some(s) if s.token == Token::LParen);
        let Some(func) = Func::from_name(&name) else {
            return Err(if called {
                ParseError::UnknownFunction { name }
            } else {
                ParseError::UnknownIdentifier { name }
            });
        };

        if !called {
            // A function name needs an argument list.
            return Err(ParseError::UnexpectedToken { pos });
        }

        self.advance();
        let arg = self.expression()?;
        self.expect_rparen()?;
        Ok(Expr::Call(func, Box::new(arg)))
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        match self.advance() {
            Some(spanned) if spanned.token == Token::RParen => Ok(()),
            Some(spanned) => Err(ParseError::UnexpectedToken { pos: spanned.pos }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
