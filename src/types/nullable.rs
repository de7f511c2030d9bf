use std::fmt::{self, Debug, Display};

/// A value paired with a presence flag, so "not supplied" can be told apart
/// from "supplied as zero/false".
#[derive(Clone, Copy, Default)]
pub struct Nullable<T> {
    value: T,
    valid: bool,
}

pub type Float = Nullable<f64>;
pub type Int = Nullable<i64>;
pub type Bool = Nullable<bool>;

impl<T: Copy + Default> Nullable<T> {
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    pub fn from_value(value: T) -> Self {
        Self::new(value, true)
    }

    /// Present when `value` is `Some`; an absent reference leaves the zero value behind.
    pub fn from_ptr(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::new(*v, true),
            None => Self::new(T::default(), false),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn value(&self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

// An absent value compares and prints the same whatever was left in `value`.
impl<T: Copy + Default + PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T: Copy + Default + Debug> Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.value(), f)
    }
}

impl<T: Copy + Default + Display> Nullable<T> {
    /// Query-string rendering of the value, `None` when absent.
    pub fn to_param(&self) -> Option<String> {
        self.value().map(|v| v.to_string())
    }
}

impl<T: Copy + Default> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Copy + Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_ptr(value.as_ref())
    }
}

pub fn new_float(f: f64, valid: bool) -> Float {
    Float::new(f, valid)
}

pub fn float_from(f: f64) -> Float {
    Float::from_value(f)
}

pub fn float_from_ptr(f: Option<&f64>) -> Float {
    Float::from_ptr(f)
}

pub fn new_int(i: i64, valid: bool) -> Int {
    Int::new(i, valid)
}

pub fn int_from(i: i64) -> Int {
    Int::from_value(i)
}

pub fn int_from_ptr(i: Option<&i64>) -> Int {
    Int::from_ptr(i)
}

pub fn new_bool(b: bool, valid: bool) -> Bool {
    Bool::new(b, valid)
}

pub fn bool_from(b: bool) -> Bool {
    Bool::from_value(b)
}

pub fn bool_from_ptr(b: Option<&bool>) -> Bool {
    Bool::from_ptr(b)
}
