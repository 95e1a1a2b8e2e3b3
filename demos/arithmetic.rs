//! Tokenize arithmetic with `logos`, parse it with a recursive grammar built
//! from forward declarations, and print every parse.
//!
//! Run with `cargo run --example arithmetic -- "2 * (3 + 4)"`.

use std::env;

use logos::Logos;

use nondet::{
    combine, consume, either, emit, transform,
    common::{complete, parse_unique},
    parser::RcForward,
    Parser, ParserExt,
};


#[derive(Logos, Copy, Clone, PartialEq, Eq, Debug)]
#[logos(skip r"[ \t\n]+")]
enum Token {
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Times,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

fn token(wanted: Token) -> impl Parser<Token, Output = Token> + Clone {
    consume(move |t: &Token| *t == wanted)
}

fn number() -> impl Parser<Token, Output = i64> {
    transform(|t: &Token| matches!(t, Token::Number(_)),
              |t| if let Token::Number(n) = t { n } else { 0 })
}

/// ```text
/// expr   := term tail
/// tail   := ε | '+' term tail | '-' term tail
/// term   := factor | factor '*' term
/// factor := number | '-' factor | '(' expr ')'
/// ```
///
/// A `tail` is the sum of its signed terms, so `-` applies to the one term
/// after it and `10 - 2 - 3` is `5`, without left recursion.
fn grammar() -> nondet::Result<RcForward<'static, Token, i64>> {
    let expr = RcForward::new();
    let tail = RcForward::new();
    let term = RcForward::new();
    let factor = RcForward::new();

    let rest = |op, sign: i64, of: &RcForward<'static, Token, i64>| {
        combine(token(op), of.clone(), move |_, v| sign * v)
    };
    let signed_term = |op, sign| combine(rest(op, sign, &term), tail.clone(), |t, r: i64| t + r);

    expr.define(combine(term.clone(), tail.clone(), |t, r: i64| t + r))?;
    tail.define(emit::<Token, i64>(0)
                    .or(signed_term(Token::Plus, 1))
                    .or(signed_term(Token::Minus, -1)))?;
    term.define(either(factor.clone(),
                       combine(factor.clone(), rest(Token::Times, 1, &term), |a, b| a * b)))?;
    factor.define(number()
                      .or(rest(Token::Minus, -1, &factor))
                      .or(combine(token(Token::LParen),
                                  combine(expr.clone(), token(Token::RParen), |v, _| v),
                                  |_, v| v)))?;
    Ok(expr)
}

fn main() -> nondet::Result<()> {
    let source = env::args().nth(1).unwrap_or_else(|| "2 * (3 + 4) - -1".to_owned());

    let tokens = match Token::lexer(&source).collect::<Result<Vec<_>, _>>() {
        Ok(tokens) => tokens,
        Err(()) => {
            eprintln!("not arithmetic: {source:?}");
            return Ok(());
        }
    };
    println!("tokens: {tokens:?}");

    let expr = grammar()?;

    // Every prefix that is an expression, not just the whole input.
    for parsed in expr.parse(&tokens, 0).iter() {
        println!("  {} token(s) -> {}", parsed.end, parsed.value);
    }
    println!("complete parses: {}", complete(&expr, &tokens).len());

    match parse_unique(&expr, &tokens) {
        Ok(value) => println!("{source} = {value}"),
        Err(error) => println!("{source}: {error}"),
    }
    Ok(())
}
