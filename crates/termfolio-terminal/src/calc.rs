//! Bounded arithmetic evaluator for `calc`.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] [('e' | 'E') ['+' | '-'] digits]
//! ```
//!
//! `×`, `÷` and `−` are accepted as operator spellings. Nothing else is.

use termfolio_types::error::{Result, TermfolioError};

/// Longest expression accepted, in chars.
pub const MAX_EXPR_LEN: usize = 256;

/// Deepest parenthesis / unary nesting accepted.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Evaluate an arithmetic expression.
pub fn evaluate(expr: &str) -> Result<f64> {
    if expr.chars().count() > MAX_EXPR_LEN {
        return Err(TermfolioError::Calc(format!(
            "expression longer than {MAX_EXPR_LEN} characters"
        )));
    }
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(TermfolioError::Calc("empty expression".into()));
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some((tok, col)) = parser.peek() {
        return Err(TermfolioError::Calc(format!(
            "unexpected '{tok}' at position {col}"
        )));
    }
    if !value.is_finite() {
        return Err(TermfolioError::Calc("result is not a finite number".into()));
    }
    Ok(value)
}

/// Tokens paired with the 1-based column they start at.
fn tokenize(expr: &str) -> Result<Vec<(Token, usize)>> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let col = i + 1;
        let tok = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            },
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let (n, len) = scan_number(&chars[i..], col)?;
                tokens.push((Token::Num(n), col));
                i += len;
                continue;
            },
            other => {
                return Err(TermfolioError::Calc(format!(
                    "unexpected character '{other}' at position {col}"
                )));
            },
        };
        tokens.push((tok, col));
        i += 1;
    }
    Ok(tokens)
}

/// Scan a number literal at the start of `chars`. Returns the value and the
/// number of chars consumed.
fn scan_number(chars: &[char], col: usize) -> Result<(f64, usize)> {
    let mut len = 0;
    let digits = |from: usize| chars[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let int_digits = digits(len);
    len += int_digits;
    let mut frac_digits = 0;
    if chars.get(len) == Some(&'.') {
        len += 1;
        frac_digits = digits(len);
        len += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return Err(TermfolioError::Calc(format!(
            "malformed number at position {col}"
        )));
    }
    if matches!(chars.get(len), Some('e' | 'E')) {
        let mut exp_len = 1;
        if matches!(chars.get(len + exp_len), Some('+' | '-')) {
            exp_len += 1;
        }
        let exp_digits = digits(len + exp_len);
        if exp_digits == 0 {
            return Err(TermfolioError::Calc(format!(
                "malformed exponent at position {col}"
            )));
        }
        len += exp_len + exp_digits;
    }
    let literal: String = chars[..len].iter().collect();
    let value = literal
        .parse::<f64>()
        .map_err(|e| TermfolioError::Calc(format!("bad number '{literal}': {e}")))?;
    Ok((value, len))
}

struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<(Token, usize)> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<(Token, usize)> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(TermfolioError::Calc(format!(
                "expression nested deeper than {MAX_DEPTH} levels"
            )));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64> {
        let mut lhs = self.term()?;
        while let Some((tok @ (Token::Plus | Token::Minus), _)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            lhs = if tok == Token::Plus { lhs + rhs } else { lhs - rhs };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<f64> {
        let mut lhs = self.unary()?;
        while let Some((tok @ (Token::Star | Token::Slash), col)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = match tok {
                Token::Star => lhs * rhs,
                _ if rhs == 0.0 => {
                    return Err(TermfolioError::Calc(format!(
                        "division by zero at position {col}"
                    )));
                },
                _ => lhs / rhs,
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek() {
            Some((Token::Minus, _)) => {
                self.pos += 1;
                self.descend()?;
                let v = self.unary()?;
                self.depth -= 1;
                Ok(-v)
            },
            Some((Token::Plus, _)) => {
                self.pos += 1;
                self.descend()?;
                let v = self.unary()?;
                self.depth -= 1;
                Ok(v)
            },
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64> {
        match self.bump() {
            Some((Token::Num(n), _)) => Ok(n),
            Some((Token::LParen, col)) => {
                self.descend()?;
                let v = self.expr()?;
                self.depth -= 1;
                match self.bump() {
                    Some((Token::RParen, _)) => Ok(v),
                    Some((tok, c)) => Err(TermfolioError::Calc(format!(
                        "expected ')' but found '{tok}' at position {c}"
                    ))),
                    None => Err(TermfolioError::Calc(format!(
                        "unclosed '(' at position {col}"
                    ))),
                }
            },
            Some((tok, col)) => Err(TermfolioError::Calc(format!(
                "unexpected '{tok}' at position {col}"
            ))),
            None => Err(TermfolioError::Calc("unexpected end of expression".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> f64 {
        evaluate(s).unwrap()
    }

    fn err(s: &str) -> String {
        evaluate(s).unwrap_err().to_string()
    }

    #[test]
    fn precedence_and_parentheses() {
        assert_eq!(eval("2 + 3 * (4 / 2)"), 8.0);
        assert_eq!(eval("(2 + 3) * 4"), 20.0);
        assert_eq!(eval("10 - 4 - 3"), 3.0);
        assert_eq!(eval("12 / 3 / 2"), 2.0);
    }

    #[test]
    fn unary_signs() {
        assert_eq!(eval("-3 + 5"), 2.0);
        assert_eq!(eval("--3"), 3.0);
        assert_eq!(eval("2 * -(1 + 1)"), -4.0);
        assert_eq!(eval("+7"), 7.0);
    }

    #[test]
    fn decimals_and_exponents() {
        assert_eq!(eval("0.5 + .25"), 0.75);
        assert_eq!(eval("1e3 / 4"), 250.0);
        assert_eq!(eval("2.5E-1"), 0.25);
        assert_eq!(eval("3."), 3.0);
    }

    #[test]
    fn unicode_operator_spellings() {
        assert_eq!(eval("6 × 7"), 42.0);
        assert_eq!(eval("9 ÷ 3 − 1"), 2.0);
    }

    #[test]
    fn display_matches_shortest_float() {
        assert_eq!(eval("2 * 3").to_string(), "6");
        assert_eq!(eval("0.1 + 0.2").to_string(), "0.30000000000000004");
    }

    #[test]
    fn rejects_code() {
        assert!(err("alert(1)").contains("unexpected character 'a'"));
        assert!(err("2; 3").contains("';'"));
        assert!(err("Math.PI").contains("unexpected character 'M'"));
    }

    #[test]
    fn rejects_dangling_operator() {
        assert_eq!(err("1 +"), "unexpected end of expression");
        assert!(err("* 2").contains("unexpected '*' at position 1"));
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(err("(1 + 2").contains("unclosed '('"));
        assert!(err("1 + 2)").contains("unexpected ')'"));
        assert!(err("(1 2)").contains("expected ')'"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(err(".").contains("malformed number"));
        assert!(err("1e").contains("malformed exponent"));
        assert!(err("1.2.3").contains("unexpected '0.3' at position 4"));
    }

    #[test]
    fn division_by_zero_is_error() {
        assert!(err("1 / 0").contains("division by zero"));
        assert!(err("1 / (2 - 2)").contains("division by zero"));
    }

    #[test]
    fn overflow_is_error() {
        assert!(err("1e308 * 10").contains("not a finite number"));
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(err(&deep).contains("nested deeper"));
        let ok = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(eval(&ok), 1.0);
    }

    #[test]
    fn length_is_bounded() {
        let long = "1+".repeat(MAX_EXPR_LEN) + "1";
        assert!(err(&long).contains("longer than"));
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(err("   "), "empty expression");
    }
}
