use crate::runtime::value::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Capability exposed by every iterable source: peek availability, then
/// produce the next element. `next` returns `None` once exhausted; there is
/// no rewind.
pub trait ValueIter {
    fn has_next(&self) -> bool;
    fn next(&mut self) -> Option<Value>;
}

/// Shared handle over an iterator cursor. Cloning the wrapping `Value`
/// shares the cursor; sequential single-owner use is assumed.
#[derive(Clone)]
pub struct IteratorValue {
    inner: Rc<RefCell<Box<dyn ValueIter>>>,
}

impl IteratorValue {
    pub fn new(iter: Box<dyn ValueIter>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(iter)),
        }
    }

    pub fn has_next(&self) -> bool {
        self.inner.borrow().has_next()
    }

    pub fn next(&self) -> Option<Value> {
        self.inner.borrow_mut().next()
    }
}

impl fmt::Debug for IteratorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<iterator>")
    }
}

impl PartialEq for IteratorValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Iterates a copied string one character at a time, yielding each as a
/// single-character string value.
pub struct StringIterator {
    text: String,
    index: usize,
}

impl StringIterator {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            index: 0,
        }
    }
}

impl ValueIter for StringIterator {
    fn has_next(&self) -> bool {
        self.index < self.text.len()
    }

    fn next(&mut self) -> Option<Value> {
        let ch = self.text[self.index..].chars().next()?;
        self.index += ch.len_utf8();
        Some(Value::from_string(ch.to_string()))
    }
}

/// Iterates the integers of a half-open range, from `start` up to but not
/// including `end`. An inverted range yields nothing.
pub struct RangeIterator {
    end: i64,
    current: i64,
}

impl RangeIterator {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            end,
            current: start,
        }
    }
}

impl ValueIter for RangeIterator {
    fn has_next(&self) -> bool {
        self.current < self.end
    }

    fn next(&mut self) -> Option<Value> {
        if self.current >= self.end {
            return None;
        }
        let value = self.current;
        self.current += 1;
        Some(Value::from_int(value))
    }
}
