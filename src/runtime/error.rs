use miette::Diagnostic;
use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("invalid operands to binary `{op}` ({lhs} and {rhs})")]
    #[diagnostic(code(runtime::type_mismatch))]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
        loc: String,
    },
    #[error("value of type {kind} is not iterable")]
    #[diagnostic(code(runtime::not_iterable))]
    NotIterable { kind: &'static str, loc: String },
    #[error("{what}() does not support values of type {kind}")]
    #[diagnostic(code(runtime::unsupported_value))]
    UnsupportedValue {
        what: &'static str,
        kind: &'static str,
        loc: String,
    },
    #[error("division by zero")]
    #[diagnostic(code(runtime::divide_by_zero))]
    DivideByZero { loc: String },
    #[error("iterator is exhausted")]
    #[diagnostic(code(runtime::iterator_exhausted))]
    IteratorExhausted { loc: String },
    #[error("{name}() expected {expected} arguments but received {received}")]
    #[diagnostic(code(runtime::arity_mismatch))]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        received: usize,
        loc: String,
    },
}

impl RuntimeError {
    /// The caller-supplied location tag, used only for diagnostic attribution.
    pub fn location(&self) -> &str {
        match self {
            RuntimeError::TypeMismatch { loc, .. }
            | RuntimeError::NotIterable { loc, .. }
            | RuntimeError::UnsupportedValue { loc, .. }
            | RuntimeError::DivideByZero { loc }
            | RuntimeError::IteratorExhausted { loc }
            | RuntimeError::ArityMismatch { loc, .. } => loc,
        }
    }
}
