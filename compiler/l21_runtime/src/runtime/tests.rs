use super::*;
use crate::{DEFAULT_STORE_CAPACITY, UnboundVariable};
use l21_env::GlobalLookup;
use l21_store::AddressError;
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Num(i64),
    Bool(bool),
}

fn unbound(name: &str) -> RuntimeError {
    RuntimeError::Unbound(UnboundVariable {
        name: name.to_string(),
    })
}

#[test]
fn test_define_global_then_lookup() {
    let mut rt = Runtime::new();
    let addr = rt.define_global("a", Value::Num(42));

    assert_eq!(addr, Address::new(0));
    assert_eq!(rt.global_env().apply("a"), Ok(Address::new(0)));
    assert_eq!(rt.store().apply(Address::new(0)), Ok(Value::Num(42)));
    assert_eq!(rt.lookup(&rt.global_scope(), "a"), Ok(Value::Num(42)));
}

#[test]
fn test_assign_is_visible_through_aliases() {
    let mut rt = Runtime::new();
    rt.define_global("counter", Value::Num(0));

    let global = rt.global_scope();
    let inner = global.extend_pairs([("other", Address::new(0))]);

    assert_eq!(rt.assign(&inner, "other", Value::Num(1)), Ok(()));
    assert_eq!(rt.lookup(&global, "counter"), Ok(Value::Num(1)));
}

#[test]
fn test_assign_unbound_changes_nothing() {
    let mut rt = Runtime::new();
    rt.define_global("x", Value::Bool(true));

    let env = rt.global_scope();
    assert_eq!(rt.assign(&env, "y", Value::Bool(false)), Err(unbound("y")));
    assert_eq!(rt.lookup(&env, "x"), Ok(Value::Bool(true)));
    assert_eq!(rt.store().len(), 1);
}

#[test]
fn test_lookup_dangling_address() {
    let rt: Runtime<Value> = Runtime::new();
    let env = rt.global_scope().extend_pairs([("ghost", Address::new(0))]);

    assert_eq!(
        rt.lookup(&env, "ghost"),
        Err(RuntimeError::Address(AddressError::OutOfRange {
            address: 0,
            len: 0
        }))
    );
}

#[test]
fn test_bind_frame_allocates_fresh_cells() {
    let mut rt = Runtime::new();
    rt.define_global("x", Value::Num(1));

    let global = rt.global_scope();
    let frame = rt
        .bind_frame(&global, ["x", "y"], [Value::Num(10), Value::Num(20)])
        .unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(rt.lookup(&frame, "x"), Ok(Value::Num(10)));
    assert_eq!(rt.lookup(&frame, "y"), Ok(Value::Num(20)));
    assert_eq!(rt.lookup(&global, "x"), Ok(Value::Num(1)));
    assert_eq!(rt.store().len(), 3);
}

#[test]
fn test_bind_frame_shape_mismatch_allocates_nothing() {
    let mut rt = Runtime::new();
    let global = rt.global_scope();

    let result = rt.bind_frame(&global, ["a", "b"], [Value::Num(1)]);
    assert!(matches!(
        result,
        Err(RuntimeError::FrameShape(FrameShapeError {
            names: 2,
            addresses: 1
        }))
    ));
    assert!(rt.store().is_empty());
}

#[test]
fn test_closure_frame_outlives_call() {
    let mut rt = Runtime::new();
    let global = rt.global_scope();

    // A closure captures its defining frame; assignments through a later
    // frame that resolves to the same cell are visible to it.
    let captured = rt
        .bind_frame(&global, ["n"], [Value::Num(0)])
        .unwrap_or_else(|err| panic!("{err}"));
    let call = captured.extend_pairs([("step", Address::new(0))]);

    assert_eq!(rt.assign(&call, "n", Value::Num(5)), Ok(()));
    assert_eq!(rt.lookup(&captured, "n"), Ok(Value::Num(5)));
}

#[test]
fn test_redefinition_first_match_by_default() {
    let mut rt = Runtime::new();
    rt.define_global("f", Value::Num(1));
    rt.define_global("f", Value::Num(2));

    assert_eq!(rt.lookup(&rt.global_scope(), "f"), Ok(Value::Num(1)));
    assert_eq!(rt.global_env().definitions("f"), 2);
}

#[test]
fn test_redefinition_last_match_configured() {
    let mut rt = Runtime::builder()
        .global_lookup(GlobalLookup::LastMatch)
        .build();
    rt.define_global("f", Value::Num(1));
    rt.define_global("f", Value::Num(2));

    assert_eq!(rt.lookup(&rt.global_scope(), "f"), Ok(Value::Num(2)));
}

#[test]
fn test_builder_adopts_existing_parts() {
    let mut store = Store::new();
    let addr = store.extend_get_address(Value::Num(7));
    let global = GlobalEnv::with_lookup(GlobalLookup::LastMatch);
    global.add_binding("seven", addr);

    let rt = Runtime::builder()
        .global_lookup(GlobalLookup::FirstMatch)
        .store(store)
        .global_env(global.clone())
        .build();

    assert_eq!(rt.config().global_lookup, GlobalLookup::LastMatch);
    assert!(rt.global_env().ptr_eq(&global));
    assert_eq!(rt.lookup(&rt.global_scope(), "seven"), Ok(Value::Num(7)));
}

#[test]
fn test_default_config() {
    let rt: Runtime<Value> = Runtime::default();
    assert_eq!(
        *rt.config(),
        RuntimeConfig {
            global_lookup: GlobalLookup::FirstMatch,
            store_capacity: DEFAULT_STORE_CAPACITY,
        }
    );
    assert!(rt.global_scope().is_global_env());
}

#[test]
fn test_runtimes_are_independent() {
    let mut first = Runtime::new();
    let second: Runtime<Value> = Runtime::new();
    first.define_global("only_here", Value::Num(1));

    assert_eq!(
        second.lookup(&second.global_scope(), "only_here"),
        Err(unbound("only_here"))
    );
}

#[test]
fn test_store_mut_direct_writes() {
    let mut rt = Runtime::new();
    let addr = rt.define_global("x", Value::Num(1));
    assert_eq!(rt.store_mut().set(addr, Value::Num(2)), Ok(()));
    assert_eq!(rt.lookup(&rt.global_scope(), "x"), Ok(Value::Num(2)));
}

#[test]
fn test_error_display_is_transparent() {
    assert_eq!(unbound("q").to_string(), "no such variable: q");
}
