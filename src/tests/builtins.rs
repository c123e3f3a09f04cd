use crate::runtime::builtins::{print, write_values, Builtins};
use crate::runtime::error::RuntimeError;
use crate::runtime::Value;

const LOC: &str = "test.q:1";

#[test]
fn write_values_format_is_exact() {
    let args = vec![
        Value::from_int(1),
        Value::from_string("x"),
        Value::NOTHING,
    ];
    let mut out = Vec::new();
    write_values(&mut out, &args).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1 x nothing \n");
}

#[test]
fn write_values_renders_every_kind() {
    let builtins = Builtins::standard();
    let args = vec![
        Value::from_float(1.5),
        Value::from_range(0, 3),
        Value::from_range(0, 3).iter(LOC).unwrap(),
        builtins.lookup("print").unwrap(),
    ];
    let mut out = Vec::new();
    write_values(&mut out, &args).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1.5 0..3 <iterator> <builtin function: print> \n"
    );
}

#[test]
fn print_returns_the_nothing_sentinel() {
    let result = print(vec![Value::from_int(1)], LOC).unwrap();
    assert_eq!(result, Value::NOTHING);
}

#[test]
fn registry_hands_out_builtin_values() {
    let builtins = Builtins::standard();
    let print_value = builtins.lookup("print").unwrap();
    assert_eq!(print_value.type_name(), "builtin function");
    assert_eq!(print_value.to_string(), "<builtin function: print>");
    assert!(builtins.lookup("no_such_builtin").is_none());
}

#[test]
fn builtins_are_callable_through_their_value() {
    let builtins = Builtins::standard();
    let Value::Builtin(len) = builtins.lookup("len").unwrap() else {
        panic!("lookup returned a non-builtin value");
    };
    let result = len.call(vec![Value::from_string("abc")], LOC).unwrap();
    assert_eq!(result, Value::from_int(3));
}

#[test]
fn len_measures_strings_only() {
    let builtins = Builtins::standard();
    assert_eq!(
        builtins
            .call("len", vec![Value::from_string("abc")], LOC)
            .unwrap()
            .unwrap(),
        Value::from_int(3)
    );
    let err = builtins
        .call("len", vec![Value::from_int(1)], LOC)
        .unwrap()
        .unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnsupportedValue {
            what: "len",
            kind: "int",
            loc: LOC.to_string(),
        }
    );
}

#[test]
fn len_enforces_arity() {
    let builtins = Builtins::standard();
    let err = builtins.call("len", Vec::new(), LOC).unwrap().unwrap_err();
    assert_eq!(
        err,
        RuntimeError::ArityMismatch {
            name: "len",
            expected: 1,
            received: 0,
            loc: LOC.to_string(),
        }
    );
}

#[test]
fn exit_rejects_bad_arguments_before_terminating() {
    let builtins = Builtins::standard();
    assert!(matches!(
        builtins
            .call("exit", vec![Value::from_string("1")], LOC)
            .unwrap()
            .unwrap_err(),
        RuntimeError::UnsupportedValue { what: "exit", .. }
    ));
    assert!(matches!(
        builtins
            .call("exit", vec![Value::from_int(0), Value::from_int(1)], LOC)
            .unwrap()
            .unwrap_err(),
        RuntimeError::ArityMismatch { name: "exit", .. }
    ));
}

#[test]
fn unknown_builtin_is_not_dispatched() {
    let builtins = Builtins::standard();
    assert!(builtins.call("no_such_builtin", Vec::new(), LOC).is_none());
}
