//! turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedMathKit::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression_in("2x^2 + sin(x)", "x").unwrap();
//! println!(" parsed_expression {}", parsed_expression);
//! assert_eq!(parsed_expression.eval1D("x", 0.0), 0.0);
//! ```
use crate::symbolic::symbolic_engine::{Expr, MathFunction, named_constant};
use crate::symbolic::utils::{has_balanced_brackets, normalize_symbols};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{map, map_res, opt, recognize, value},
    multi::many0,
    sequence::{pair, preceded},
};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

//   text ──nom──> tokens ──split fused names──> tokens ──implicit '*'──> tokens ──recursive descent──> Expr
//
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/') unary)*
//   unary   := ('-' | '+') unary | power
//   power   := primary ('^' unary)?
//   primary := number | identifier | function '(' expr (',' expr)* ')' | '(' expr ')'

/// Error types for the expression and equation parsers
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    InvalidEquationFormat,
    InvalidTerm(String),
    UnexpectedToken(String),
    UnexpectedEnd,
    UnknownIdentifier(String),
    UnbalancedBrackets,
    WrongArity {
        function: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::InvalidEquationFormat => {
                write!(f, "Invalid equation format: exactly one '=' expected")
            }
            ParseError::InvalidTerm(term) => write!(f, "Invalid polynomial term: '{}'", term),
            ParseError::UnexpectedToken(tok) => write!(f, "Unexpected token: '{}'", tok),
            ParseError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            ParseError::UnknownIdentifier(name) => write!(f, "Unknown identifier: '{}'", name),
            ParseError::UnbalancedBrackets => write!(f, "Unbalanced brackets"),
            ParseError::WrongArity {
                function,
                expected,
                found,
            } => write!(
                f,
                "Function '{}' takes {} argument(s), {} given",
                function, expected, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Lexical token of the expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(val) => write!(f, "{}", val),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Op(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

////////////////////////////////////TOKENIZER////////////////////////////////////////////

/// `12`, `12.`, `12.5` or `.5`. No exponent notation: `2e` is `2*e`.
fn parse_number(input: &str) -> IResult<&str, Token> {
    let integer_first = recognize(pair(digit1, opt(pair(char('.'), digit0))));
    let fraction_first = recognize(pair(char('.'), digit1));
    let mut parser = map_res(alt((integer_first, fraction_first)), |s: &str| {
        s.parse::<f64>().map(Token::Number)
    });
    parser.parse(input)
}

/// Parses an identifier (word characters without spaces)
fn parse_identifier(input: &str) -> IResult<&str, Token> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, |s: &str| Token::Ident(s.to_string()));
    parser.parse(input)
}

fn parse_symbol(input: &str) -> IResult<&str, Token> {
    let mut parser = alt((
        map(one_of("+-*/^"), Token::Op),
        value(Token::LParen, char('(')),
        value(Token::RParen, char(')')),
        value(Token::Comma, char(',')),
    ));
    parser.parse(input)
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    let mut parser = preceded(multispace0, alt((parse_number, parse_identifier, parse_symbol)));
    parser.parse(input)
}

/// Splits the text into a typed token stream. Square and curly brackets are read as
/// round ones.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let normalized: String = normalize_symbols(input)
        .chars()
        .map(|c| match c {
            '[' | '{' => '(',
            ']' | '}' => ')',
            _ => c,
        })
        .collect();
    if normalized.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if !has_balanced_brackets(&normalized) {
        return Err(ParseError::UnbalancedBrackets);
    }
    let mut parser = many0(parse_token);
    let (rest, tokens) = parser
        .parse(normalized.as_str())
        .map_err(|e| ParseError::UnexpectedToken(e.to_string()))?;
    let rest = rest.trim_start();
    if let Some(c) = rest.chars().next() {
        return Err(ParseError::UnexpectedToken(c.to_string()));
    }
    Ok(tokens)
}

/// Splits `word` into a sequence of `names`, longest name first, backtracking when a
/// prefix leaves an unsplittable rest.
fn split_into_names(word: &str, names: &[String]) -> Option<Vec<String>> {
    if word.is_empty() {
        return Some(Vec::new());
    }
    let mut candidates: Vec<&String> = names.iter().filter(|n| word.starts_with(n.as_str())).collect();
    candidates.sort_by_key(|n| std::cmp::Reverse(n.len()));
    for name in candidates {
        if let Some(mut rest) = split_into_names(&word[name.len()..], names) {
            rest.insert(0, name.clone());
            return Some(rest);
        }
    }
    None
}

/// Breaks identifiers glued together without a separator, `xsin` -> `x sin`,
/// `pix` -> `pi x`, into the free variable, named constants and function names.
/// Identifiers that already mean something, or that can not be split completely, are
/// left alone.
pub fn split_fused_identifiers(tokens: Vec<Token>, var: &str) -> Vec<Token> {
    let mut names: Vec<String> = MathFunction::iter().map(|f| f.to_string()).collect();
    names.extend(["pi".to_string(), "e".to_string(), var.to_string()]);
    names.retain(|n| !n.is_empty());
    let mut result = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Ident(word)
                if word != var
                    && named_constant(&word).is_none()
                    && MathFunction::from_str(&word).is_err() =>
            {
                match split_into_names(&word, &names) {
                    Some(parts) => result.extend(parts.into_iter().map(Token::Ident)),
                    None => result.push(Token::Ident(word)),
                }
            }
            other => result.push(other),
        }
    }
    result
}

fn is_function_call(tokens: &[Token], i: usize) -> bool {
    match (&tokens[i], tokens.get(i + 1)) {
        (Token::Ident(name), Some(Token::LParen)) => MathFunction::from_str(name).is_ok(),
        _ => false,
    }
}

/// Makes implicit multiplication explicit: `2x`, `2(x+1)`, `(x)(x)`, `x sin(x)`, `2pi`.
pub fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len() * 2);
    for i in 0..tokens.len() {
        if i > 0 {
            let prev = &tokens[i - 1];
            let ends_operand = match prev {
                Token::Number(_) | Token::RParen => true,
                Token::Ident(_) => !is_function_call(&tokens, i - 1),
                _ => false,
            };
            let starts_operand = match &tokens[i] {
                Token::Number(_) => !matches!(prev, Token::Number(_)),
                Token::Ident(_) | Token::LParen => true,
                _ => false,
            };
            if ends_operand && starts_operand {
                result.push(Token::Op('*'));
            }
        }
        result.push(tokens[i].clone());
    }
    result
}

////////////////////////////////////RECURSIVE DESCENT/////////////////////////////////////

struct ExprParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    // free variable; None accepts any identifier that is not a constant
    variable: Option<&'a str>,
}

impl<'a> ExprParser<'a> {
    fn new(tokens: &'a [Token], variable: Option<&'a str>) -> Self {
        ExprParser {
            tokens,
            pos: 0,
            variable,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        match self.next() {
            Some(tok) if tok == expected => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken(tok.to_string())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_all(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_sum()?;
        match self.peek() {
            None => Ok(expr),
            Some(tok) => Err(ParseError::UnexpectedToken(tok.to_string())),
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_product()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.pos += 1;
            let rhs = self.parse_product()?;
            lhs = if *op == '+' { lhs + rhs } else { lhs - rhs };
        }
        Ok(lhs)
    }

    fn parse_product(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        while let Some(Token::Op(op @ ('*' | '/'))) = self.peek() {
            self.pos += 1;
            let rhs = self.parse_unary()?;
            lhs = if *op == '*' { lhs * rhs } else { lhs / rhs };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Token::Op('-')) => {
                self.pos += 1;
                Ok(-self.parse_unary()?)
            }
            Some(Token::Op('+')) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        if let Some(Token::Op('^')) = self.peek() {
            self.pos += 1;
            // right associative: 2^3^2 = 2^(3^2)
            let exponent = self.parse_unary()?;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let tok = self.next().ok_or(ParseError::UnexpectedEnd)?;
        match tok {
            Token::Number(val) => Ok(Expr::Const(*val)),
            Token::LParen => {
                let inner = self.parse_sum()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => {
                if let (Some(Token::LParen), Ok(function)) =
                    (self.peek(), MathFunction::from_str(name))
                {
                    return self.parse_call(name, function);
                }
                self.resolve_identifier(name)
            }
            other => Err(ParseError::UnexpectedToken(other.to_string())),
        }
    }

    fn parse_call(&mut self, name: &str, function: MathFunction) -> Result<Expr, ParseError> {
        self.expect(&Token::LParen)?;
        let mut args = vec![self.parse_sum()?];
        while let Some(Token::Comma) = self.peek() {
            self.pos += 1;
            args.push(self.parse_sum()?);
        }
        self.expect(&Token::RParen)?;
        if args.len() != function.arity() {
            return Err(ParseError::WrongArity {
                function: name.to_string(),
                expected: function.arity(),
                found: args.len(),
            });
        }
        Ok(function.apply(args))
    }

    fn resolve_identifier(&self, name: &str) -> Result<Expr, ParseError> {
        // the free variable shadows a constant of the same name
        if self.variable == Some(name) {
            return Ok(Expr::Var(name.to_string()));
        }
        if let Some(val) = named_constant(name) {
            return Ok(Expr::Const(val));
        }
        match self.variable {
            None => Ok(Expr::Var(name.to_string())),
            Some(_) => Err(ParseError::UnknownIdentifier(name.to_string())),
        }
    }
}

fn parse_tokens(input: &str, variable: Option<&str>) -> Result<Expr, ParseError> {
    let mut tokens = tokenize(input)?;
    // without a declared variable every unknown word is a variable of its own
    if let Some(var) = variable {
        tokens = split_fused_identifiers(tokens, var);
    }
    let tokens = insert_implicit_multiplication(tokens);
    ExprParser::new(&tokens, variable).parse_all()
}

impl Expr {
    /// Parses an expression; every identifier that is not a function or a named constant
    /// becomes a variable.
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        parse_tokens(input, None)
    }

    /// Parses an expression of the single free variable `var`; any other identifier that
    /// is not a function or a named constant is rejected.
    pub fn parse_expression_in(input: &str, var: &str) -> Result<Expr, ParseError> {
        parse_tokens(input, Some(var))
    }
}
