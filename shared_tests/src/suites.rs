//! Suites of tests applied across multiple handle kinds


use super::*;


/// Every law suite of this module.
pub fn test_suite_laws<S: Share>() {
    test_end_positions::<S>();
    test_alternation_identity::<S>();
    test_alternation_commutes::<S>();
    test_sequencing_neutral::<S>();
    test_apply_functor::<S>();
    test_consume_boundary::<S>();
}


/// No parser reports an end behind its start or past the end of input.
pub fn test_end_positions<S: Share>() {
    check(|tokens, position| {
        for index in 0 .. SAMPLE_COUNT {
            for parsed in sample::<S>(index).parse(tokens, position) {
                prop_assert!(position <= parsed.end && parsed.end <= tokens.len(),
                             "sample {} ended at {}", index, parsed.end);
            }
        }
        Ok(())
    });
}

/// `fail` is the identity of `either`, on both sides.
pub fn test_alternation_identity<S: Share>() {
    check(|tokens, position| {
        for index in 0 .. SAMPLE_COUNT {
            let alone = sample::<S>(index).parse(tokens, position);
            prop_assert_eq!(&either(fail(), sample::<S>(index)).parse(tokens, position),
                            &alone);
            prop_assert_eq!(&either(sample::<S>(index), fail()).parse(tokens, position),
                            &alone);
        }
        Ok(())
    });
}

/// `either` is commutative.
pub fn test_alternation_commutes<S: Share>() {
    check(|tokens, position| {
        for i in 0 .. SAMPLE_COUNT {
            for j in i + 1 .. SAMPLE_COUNT {
                prop_assert_eq!(
                    either(sample::<S>(i), sample::<S>(j)).parse(tokens, position),
                    either(sample::<S>(j), sample::<S>(i)).parse(tokens, position));
            }
        }
        Ok(())
    });
}

/// `noop` on either side of `compose` only pairs the values with `()`.
pub fn test_sequencing_neutral<S: Share>() {
    check(|tokens, position| {
        for index in 0 .. SAMPLE_COUNT {
            let alone = sample::<S>(index).parse(tokens, position);

            let before: ResultSet<((), Value)> =
                alone.iter().map(|p| Parsed::new(((), p.value.clone()), p.end)).collect();
            prop_assert_eq!(compose(noop(), sample::<S>(index)).parse(tokens, position),
                            before);

            let after: ResultSet<(Value, ())> =
                alone.iter().map(|p| Parsed::new((p.value.clone(), ()), p.end)).collect();
            prop_assert_eq!(compose(sample::<S>(index), noop()).parse(tokens, position),
                            after);
        }
        Ok(())
    });
}

/// `apply` preserves identity and composition of functions.
pub fn test_apply_functor<S: Share>() {
    fn f(v: Value) -> Value {
        Value::pair(v, Value::Unit)
    }
    fn g(v: Value) -> Value {
        Value::pair(Value::Int(1), v)
    }

    check(|tokens, position| {
        for index in 0 .. SAMPLE_COUNT {
            let alone = sample::<S>(index).parse(tokens, position);
            prop_assert_eq!(&apply(|v: Value| v, sample::<S>(index)).parse(tokens, position),
                            &alone);
            prop_assert_eq!(apply(g, apply(f, sample::<S>(index))).parse(tokens, position),
                            apply(|v: Value| g(f(v)), sample::<S>(index)).parse(tokens, position));
        }
        Ok(())
    });
}

/// `consume` fails at the end of input and otherwise succeeds exactly when its
/// predicate holds on the token there, advancing by exactly one.
pub fn test_consume_boundary<S: Share>() {
    let plus = || S::share(apply(Value::Char, consume(|c: &char| *c == '+')));
    let always = || S::share(apply(Value::Char, consume(|_: &char| true)));

    assert!(plus().parse(&[], 0).is_empty());
    assert!(always().parse(&[], 0).is_empty());

    check(|tokens, position| {
        prop_assert!(plus().parse(tokens, tokens.len()).is_empty());
        prop_assert!(always().parse(tokens, tokens.len()).is_empty());

        let results = plus().parse(tokens, position);
        match tokens.get(position) {
            Some('+') =>
                prop_assert_eq!(results, ResultSet::singleton(Value::Char('+'), position + 1)),
            _ =>
                prop_assert!(results.is_empty()),
        }
        Ok(())
    });
}


/// The concrete scenarios: an unambiguous sum, and one token parsed two ways.
pub fn test_suite_scenarios<S: Share>() {
    let sum = sample::<S>(6);
    assert_eq!(sum.parse(&['1', '+', '2'], 0), ResultSet::singleton(Value::Int(3), 3));
    assert!(sum.parse(&['1', '+', '2'], 1).is_empty());
    assert!(sum.parse(&['1', '+'], 0).is_empty());

    let ambiguous = sample::<S>(4);
    let expected: ResultSet<Value> = [(Value::Int(5), 1), (Value::Text("5".into()), 1)]
                                         .into_iter().collect();
    assert_eq!(ambiguous.parse(&['5'], 0), expected);

    // One or two digits: both a short and a long parse.
    let digits = sample::<S>(9);
    let expected: ResultSet<Value> = [(Value::Int(1), 1), (Value::Int(12), 2)]
                                         .into_iter().collect();
    assert_eq!(digits.parse(&['1', '2'], 0), expected);

    // Sequencing two of those expands every combination that fits.
    let two = compose(sample::<S>(9), sample::<S>(9));
    let results = two.parse(&['1', '2', '1'], 0);
    assert_eq!(results.len(), 3);
    assert!(results.contains(&(Value::Int(1), Value::Int(2)), 2));
    assert!(results.contains(&(Value::Int(1), Value::Int(21)), 3));
    assert!(results.contains(&(Value::Int(12), Value::Int(1)), 3));
}
