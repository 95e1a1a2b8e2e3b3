use nondet::{
    compose, consume, emit, transform,
    common::{complete, longest, parse_unique},
    Error, Parser, ParserExt, ResultSet,
};
use rstest::rstest;


/// `a*`, up to three, outputting how many.
fn some_as() -> impl Parser<char, Output = usize> {
    let a = || consume(|c: &char| *c == 'a');
    emit::<char, usize>(0).or(a().map(|_| 1))
                           .or(compose(a(), a()).map(|_| 2))
                           .or(compose(a(), compose(a(), a())).map(|_| 3))
}

/// A digit read as a number, and also as a letter of the alphabet.
fn number_or_letter() -> impl Parser<char, Output = String> {
    let digit = || transform(char::is_ascii_digit, |c: char| c.to_digit(10).unwrap_or(0));
    digit().map(|d| d.to_string())
           .or(digit().map(|d| char::from(b'a' + u8::try_from(d).unwrap_or(0)).to_string()))
}


#[rstest]
#[case("", Ok(0))]
#[case("a", Ok(1))]
#[case("aaa", Ok(3))]
#[case("aaaa", Err(Error::NoCompleteParse { length: 4 }))]
#[case("ab", Err(Error::NoCompleteParse { length: 2 }))]
fn unique_count(#[case] input: &str, #[case] expected: nondet::Result<usize>) {
    let tokens: Vec<char> = input.chars().collect();
    assert_eq!(parse_unique(&some_as(), &tokens), expected);
}

#[rstest]
#[case("0", &["0", "a"])]
#[case("2", &["2", "c"])]
#[case("x", &[])]
#[case("12", &[])]
fn all_complete(#[case] input: &str, #[case] expected: &[&str]) {
    let tokens: Vec<char> = input.chars().collect();
    let expected: ResultSet<String> =
        expected.iter().map(|s| ((*s).to_owned(), tokens.len())).collect();
    assert_eq!(complete(&number_or_letter(), &tokens), expected);
}

#[test]
fn ambiguity_is_an_error_only_when_asked() {
    let tokens = ['7'];
    assert_eq!(complete(&number_or_letter(), &tokens).len(), 2);
    assert_eq!(parse_unique(&number_or_letter(), &tokens),
               Err(Error::Ambiguous { count: 2, length: 1 }));
    assert_eq!(parse_unique(&number_or_letter(), &tokens).unwrap_err().to_string(),
               "2 distinct parses consumed all 1 tokens");
}

#[rstest]
#[case("aaaa", 0, 3, 3)]
#[case("aab", 0, 2, 2)]
#[case("baa", 1, 2, 3)]
#[case("baa", 0, 0, 0)]
#[case("aa", 2, 0, 2)]
fn longest_prefix(#[case] input: &str,
                  #[case] position: usize,
                  #[case] count: usize,
                  #[case] end: usize)
{
    let tokens: Vec<char> = input.chars().collect();
    assert_eq!(longest(&some_as(), &tokens, position), ResultSet::singleton(count, end));
}

#[test]
fn longest_of_failure_is_empty() {
    let tokens = ['x'];
    assert!(longest(&number_or_letter(), &tokens, 0).is_empty());
    assert!(longest(&number_or_letter(), &tokens, 1).is_empty());
}
