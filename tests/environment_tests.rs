use dunlin::{Environment, Type, Value};

use pretty_assertions::assert_eq;

#[test]
fn lookup_on_empty_environment_finds_nothing() {
    let env = Environment::new();
    assert_eq!(None, env.lookup("x"));
}

#[test]
fn extend_then_lookup() {
    let env = Environment::new().extend("x", Value::Integer(1), Type::Integer);
    assert_eq!(Some((Value::Integer(1), Type::Integer)), env.lookup("x"));
    assert_eq!(None, env.lookup("y"));
}

#[test]
fn extension_never_touches_old_snapshots() {
    let env1 = Environment::new().extend("x", Value::Integer(1), Type::Integer);
    let env2 = env1.extend("x", Value::Integer(2), Type::Integer);
    let env3 = env2.extend("y", Value::Boolean(true), Type::Boolean);

    // every older handle still resolves exactly as it did before
    assert_eq!(Some((Value::Integer(1), Type::Integer)), env1.lookup("x"));
    assert_eq!(None, env1.lookup("y"));
    assert_eq!(Some((Value::Integer(2), Type::Integer)), env2.lookup("x"));
    assert_eq!(None, env2.lookup("y"));
    assert_eq!(Some((Value::Boolean(true), Type::Boolean)), env3.lookup("y"));
}

#[test]
fn newest_binding_shadows_older_ones() {
    let env = Environment::new()
        .extend("x", Value::Integer(1), Type::Integer)
        .extend("x", Value::Integer(2), Type::Integer);
    assert_eq!(Some((Value::Integer(2), Type::Integer)), env.lookup("x"));
}

#[test]
fn shadowing_crosses_types_at_the_chain_level() {
    // the chain itself has no type discipline, only the evaluator does
    let env = Environment::new()
        .extend("x", Value::Integer(1), Type::Integer)
        .extend("x", Value::String("one".to_string()), Type::String);
    assert_eq!(
        Some((Value::String("one".to_string()), Type::String)),
        env.lookup("x")
    );
}

#[test]
fn display_renders_bindings_newest_first() {
    let env = Environment::new()
        .extend("a", Value::Integer(1), Type::Integer)
        .extend("b", Value::Boolean(true), Type::Boolean);
    assert_eq!("b: (true, Boolean), a: (1, Integer), ", env.to_string());
}

#[test]
fn display_renders_empty_environment_as_empty_text() {
    assert_eq!("", Environment::new().to_string());
}
