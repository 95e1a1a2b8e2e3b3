use nondet_shared_tests::{
    share::RcShare,
    suites::{test_suite_laws, test_suite_scenarios},
};


#[test]
fn laws() {
    test_suite_laws::<RcShare>();
}

#[test]
fn scenarios() {
    test_suite_scenarios::<RcShare>();
}

#[test]
fn one_sub_grammar_in_many_places() {
    use std::rc::Rc;
    use nondet::{compose, either, Parser, ResultSet};
    use nondet_shared_tests::{sample, Value};

    let digits = sample::<RcShare>(9);
    let twice = compose(Rc::clone(&digits), Rc::clone(&digits));
    let or_once = either(Rc::clone(&digits), sample::<RcShare>(7));
    assert_eq!(Rc::strong_count(&digits), 4);

    assert_eq!(twice.parse(&['1', '2'], 0),
               ResultSet::singleton((Value::Int(1), Value::Int(2)), 2));
    let expected: ResultSet<Value> = [(Value::Int(0), 0), (Value::Int(2), 1)]
                                         .into_iter().collect();
    assert_eq!(or_once.parse(&['2'], 0), expected);

    drop(twice);
    drop(or_once);
    assert_eq!(Rc::strong_count(&digits), 1);
}
