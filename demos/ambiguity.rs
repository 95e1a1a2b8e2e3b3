//! Enumerate every way of splitting a numeral into groups of digits, and every
//! way of segmenting run-together letters into dictionary words.  Each is one
//! result set, produced without any backtracking by the caller.
//!
//! Run with `cargo run --example ambiguity -- 1234`.

use std::{env, rc::Rc};

use nondet::{
    combine, consume, either,
    common::complete,
    parser::{rc, RcForward},
    ParserExt,
};


/// `groups := digits | digits groups`, `digits := digit | digit digits`.
fn splittings() -> nondet::Result<RcForward<'static, char, Vec<u64>>> {
    let digit = || consume(char::is_ascii_digit).map(|c| u64::from(c.to_digit(10).unwrap_or(0)));

    // Value, and how many digits it has.
    let digits = RcForward::new();
    digits.define(either(digit().map(|d| (d, 1)),
                         combine(digit(), digits.clone(), |d, (n, width): (u64, u32)| {
                             (d * 10u64.pow(width) + n, width + 1)
                         })))?;
    let group = rc(digits.map(|(n, _)| n));

    let groups = RcForward::new();
    groups.define(either(Rc::clone(&group).map(|n| vec![n]),
                         combine(group, groups.clone(), |n, mut rest: Vec<u64>| {
                             rest.insert(0, n);
                             rest
                         })))?;
    Ok(groups)
}

/// Segment letters into words of a tiny dictionary, like text without spaces.
fn segmentations(words: &'static [&'static str])
                 -> nondet::Result<RcForward<'static, char, Vec<&'static str>>>
{
    let word = |w: &'static str| {
        w.chars()
         .map(|wanted| rc(consume(move |c: &char| *c == wanted).map(|_| ())))
         .reduce(|a, b| rc(combine(a, b, |(), ()| ())))
         .map(move |p| rc(p.map(move |()| w)))
    };
    let any_word = words.iter()
                        .copied()
                        .filter_map(word)
                        .reduce(|a, b| rc(either(a, b)));

    let sentence = RcForward::new();
    if let Some(any_word) = any_word {
        sentence.define(either(Rc::clone(&any_word).map(|w| vec![w]),
                               combine(any_word, sentence.clone(), |w, mut rest: Vec<_>| {
                                   rest.insert(0, w);
                                   rest
                               })))?;
    }
    Ok(sentence)
}

fn main() -> nondet::Result<()> {
    let numeral = env::args().nth(1).unwrap_or_else(|| "1234".to_owned());
    let tokens: Vec<char> = numeral.chars().collect();
    let all = complete(&splittings()?, &tokens);
    println!("{} has {} splittings:", numeral, all.len());
    for parsed in &all {
        println!("  {:?}", parsed.value);
    }

    let text = "godisnowhere";
    let words = &["god", "is", "no", "now", "here", "where", "nowhere"];
    let tokens: Vec<char> = text.chars().collect();
    let all = complete(&segmentations(words)?, &tokens);
    println!("{text:?} has {} readings:", all.len());
    for parsed in &all {
        println!("  {}", parsed.value.join(" "));
    }
    Ok(())
}
