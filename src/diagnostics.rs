use crate::runtime::error::RuntimeError;

/// One diagnostic line per error; the location tag is whatever the generated
/// code supplied and is not interpreted here.
pub fn report_runtime_error(error: &RuntimeError) {
    eprintln!("{}: Error: {}", error.location(), error);
}

/// Default top-level policy for generated code: report and terminate. Core
/// operations themselves only ever return `RuntimeResult`.
pub fn fatal(error: &RuntimeError) -> ! {
    report_runtime_error(error);
    std::process::exit(1);
}
