use crate::runtime::error::{RuntimeError, RuntimeResult};
use crate::runtime::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

/// Calling convention shared by every built-in: ordered arguments plus the
/// caller's location tag.
pub type NativeFn = fn(Vec<Value>, &str) -> RuntimeResult<Value>;

/// Immutable descriptor stored in a `Value::Builtin` payload.
#[derive(Clone, Copy)]
pub struct BuiltinValue {
    name: &'static str,
    func: NativeFn,
}

impl BuiltinValue {
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Vec<Value>, loc: &str) -> RuntimeResult<Value> {
        (self.func)(args, loc)
    }
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin function: {}>", self.name)
    }
}

impl PartialEq for BuiltinValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Name-to-callable registry, constructed once at startup by the embedding
/// runtime.
pub struct Builtins {
    entries: HashMap<&'static str, NativeFn>,
}

impl Builtins {
    pub fn standard() -> Self {
        let mut entries: HashMap<&'static str, NativeFn> = HashMap::new();
        entries.insert("print", print);
        entries.insert("len", len);
        entries.insert("exit", exit);
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        let (&name, &func) = self.entries.get_key_value(name)?;
        Some(Value::from_builtin(name, func))
    }

    pub fn call(&self, name: &str, args: Vec<Value>, loc: &str) -> Option<RuntimeResult<Value>> {
        let func = self.entries.get(name)?;
        Some(func(args, loc))
    }
}

/// Rendering core shared by `print` and the tests: every argument followed
/// by one space, one newline after the full sequence.
pub fn write_values(out: &mut impl Write, args: &[Value]) -> io::Result<()> {
    for arg in args {
        write!(out, "{arg} ")?;
    }
    writeln!(out)
}

pub fn print(args: Vec<Value>, _loc: &str) -> RuntimeResult<Value> {
    let stdout = io::stdout();
    // stdout write failures are deliberately dropped; print has no error
    // channel in its contract
    let _ = write_values(&mut stdout.lock(), &args);
    Ok(Value::NOTHING)
}

pub fn len(mut args: Vec<Value>, loc: &str) -> RuntimeResult<Value> {
    if args.len() != 1 {
        return Err(RuntimeError::ArityMismatch {
            name: "len",
            expected: 1,
            received: args.len(),
            loc: loc.to_string(),
        });
    }
    match args.remove(0) {
        Value::Str(s) => Ok(Value::Int(s.len() as i64)),
        other => Err(RuntimeError::UnsupportedValue {
            what: "len",
            kind: other.type_name(),
            loc: loc.to_string(),
        }),
    }
}

pub fn exit(args: Vec<Value>, loc: &str) -> RuntimeResult<Value> {
    if args.len() > 1 {
        return Err(RuntimeError::ArityMismatch {
            name: "exit",
            expected: 1,
            received: args.len(),
            loc: loc.to_string(),
        });
    }
    let code = match args.first() {
        None => 0,
        Some(Value::Int(code)) => i32::try_from(*code).unwrap_or(1),
        Some(other) => {
            return Err(RuntimeError::UnsupportedValue {
                what: "exit",
                kind: other.type_name(),
                loc: loc.to_string(),
            })
        }
    };
    std::process::exit(code)
}
