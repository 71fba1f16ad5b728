//! End-to-end memoization scenarios
//!
//! The registry carries three counting functions: `A() -> 0`, `B(x) -> x`,
//! and `C(x, y) -> x + y`. The invocation counts are the binding
//! assertions; the arithmetic results follow from ordinary truncating
//! integer math.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use memocalc::{Engine, Error, EvaluationError, FunctionRegistry};
use pretty_assertions::assert_eq;

struct Counters {
    a: Arc<AtomicUsize>,
    b: Arc<AtomicUsize>,
    c: Arc<AtomicUsize>,
}

impl Counters {
    fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.a.load(Ordering::SeqCst),
            self.b.load(Ordering::SeqCst),
            self.c.load(Ordering::SeqCst),
        )
    }
}

fn counting_engine() -> (Engine, Counters) {
    let mut functions = FunctionRegistry::new();

    let a = Arc::new(AtomicUsize::new(0));
    let b = Arc::new(AtomicUsize::new(0));
    let c = Arc::new(AtomicUsize::new(0));

    {
        let a = a.clone();
        functions.register_fn("A", 0, move |_| {
            a.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        });
    }
    {
        let b = b.clone();
        functions.register_fn("B", 1, move |args| {
            b.fetch_add(1, Ordering::SeqCst);
            Ok(args[0])
        });
    }
    {
        let c = c.clone();
        functions.register_fn("C", 2, move |args| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(args[0] + args[1])
        });
    }

    (Engine::new(functions), Counters { a, b, c })
}

#[test]
fn constant_only_expression_invokes_nothing() {
    let (engine, counters) = counting_engine();

    let result = engine.evaluate("-5 + 2 * 3 - 20 / 4").unwrap();

    assert_eq!(result, -4);
    assert_eq!(counters.snapshot(), (0, 0, 0));
}

#[test]
fn one_call_for_each_function() {
    let (engine, counters) = counting_engine();

    let result = engine.evaluate("C(B(A()), 5) + 4").unwrap();

    assert_eq!(result, 9);
    assert_eq!(counters.snapshot(), (1, 1, 1));
}

#[test]
fn distinct_argument_values_invoke_separately() {
    let (engine, counters) = counting_engine();

    let result = engine
        .evaluate("A() * A() + B(10) / B(5) - C(1, 5) + C(5, 1) + -10")
        .unwrap();

    // 0*0 + 10/5 - 6 + 6 + -10
    assert_eq!(result, -8);
    assert_eq!(counters.snapshot(), (1, 2, 2));
}

#[test]
fn repeated_argument_values_invoke_once() {
    let (engine, counters) = counting_engine();

    let result = engine
        .evaluate("A() * A() + B(5) / B(5) - C(5, 1) + -C(5, 1) + -10")
        .unwrap();

    // 0*0 + 5/5 - 6 + -6 + -10
    assert_eq!(result, -21);
    assert_eq!(counters.snapshot(), (1, 1, 1));
}

#[test]
fn argument_expressions_memoize_by_reduced_value() {
    let (engine, counters) = counting_engine();

    // 2 + 3 and 5 are different trees but the same argument value.
    let result = engine.evaluate("B(2 + 3) + B(5)").unwrap();

    assert_eq!(result, 10);
    assert_eq!(counters.snapshot(), (0, 1, 0));
}

#[test]
fn separate_evaluations_never_share_cache_state() {
    let (engine, counters) = counting_engine();

    assert_eq!(engine.evaluate("B(7)").unwrap(), 7);
    assert_eq!(engine.evaluate("B(7)").unwrap(), 7);

    assert_eq!(counters.snapshot(), (0, 2, 0));
}

#[test]
fn unbound_variable_faults() {
    let (engine, counters) = counting_engine();

    let error = engine.evaluate("B(1) + x").unwrap_err();

    assert_eq!(
        error,
        Error::Evaluation(EvaluationError::UnboundVariable {
            name: "x".to_string()
        })
    );
    // The fault aborts the whole evaluation; B ran before x was reached.
    assert_eq!(counters.snapshot(), (0, 1, 0));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn division_by_zero_panics() {
    let (engine, _counters) = counting_engine();
    let _ = engine.evaluate("B(1) / (A() * 3)");
}
