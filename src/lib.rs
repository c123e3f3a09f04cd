pub mod diagnostics;
pub mod runtime;

#[cfg(test)]
mod tests;
