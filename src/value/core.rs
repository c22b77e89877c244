use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::{
    distance::{edit_distance, levenshtein},
    error::{EvalResult, RuntimeError},
    set::core::Set,
    util::num::integer_equals_real,
    value::vector::Vector3,
};

/// Represents a script value.
///
/// Equality is structural: scalars compare by value, vectors by component,
/// arrays element by element and sets by membership. Two values built
/// separately are equal whenever their content is, which is what lets a
/// `Set<Value>` treat distinct instances as one member.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A three-component vector.
    Vector(Vector3),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A set of values.
    Set(Rc<Set<Self>>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Self::Vector(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<Set<Self>> for Value {
    fn from(v: Set<Self>) -> Self {
        Self::Set(Rc::new(v))
    }
}

impl Value {
    /// Builds a set value from the given items.
    ///
    /// # Example
    /// ```
    /// use semset::value::core::Value;
    ///
    /// let set = Value::set_of([Value::from(1), Value::from(1.0), Value::from("one")]);
    /// assert_eq!(set.to_string(), "{1, one}");
    /// ```
    pub fn set_of<I>(items: I) -> Self
        where I: IntoIterator<Item = Self>
    {
        Self::from(Set::from_items(items))
    }

    /// Returns the name of the value's dynamic type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Vector(_) => "vector",
            Self::Array(_) => "array",
            Self::Set(_) => "set",
        }
    }

    /// Borrows the set, or returns an error if the value is not a set.
    ///
    /// # Parameters
    /// - `operation`: The operation requesting the set, for error reporting.
    ///
    /// # Returns
    /// - `Ok(&Set<Value>)`: If the value is a set.
    /// - `Err(RuntimeError::InvalidArgumentType)`: If not a set.
    pub fn as_set(&self, operation: &'static str) -> EvalResult<&Set<Self>> {
        match self {
            Self::Set(set) => Ok(&**set),
            _ => Err(RuntimeError::InvalidArgumentType { operation,
                                                         expected: "set",
                                                         found: self.type_name() }),
        }
    }

    /// Returns the edit distance between two sequence values.
    ///
    /// Strings are compared character by character and arrays element by
    /// element, using structural equality on the elements.
    ///
    /// # Returns
    /// - `Ok(usize)`: The Levenshtein distance.
    /// - `Err(RuntimeError::InvalidArgumentType)`: If either value is not a
    ///   string or an array, or if a string is compared with an array.
    ///
    /// # Example
    /// ```
    /// use semset::value::core::Value;
    ///
    /// let a = Value::from("kitten");
    /// let b = Value::from("sitting");
    /// assert_eq!(a.edit_distance(&b).unwrap(), 3);
    ///
    /// assert!(a.edit_distance(&Value::from(7)).is_err());
    /// ```
    pub fn edit_distance(&self, other: &Self) -> EvalResult<usize> {
        const OPERATION: &str = "edit distance";

        match (self, other) {
            (Self::Str(a), Self::Str(b)) => Ok(levenshtein(a, b)),
            (Self::Array(a), Self::Array(b)) => Ok(edit_distance(a.as_slice(), b.as_slice())),
            (Self::Str(_) | Self::Array(_), _) => {
                Err(RuntimeError::InvalidArgumentType { operation: OPERATION,
                                                        expected:  self.type_name(),
                                                        found:     other.type_name(), })
            },
            _ => Err(RuntimeError::InvalidArgumentType { operation: OPERATION,
                                                         expected:  "string or array",
                                                         found:     self.type_name(), }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::{Array, Bool, Integer, Nil, Real, Set, Str, Vector};

        match (self, other) {
            (Nil, Nil) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Real(a), Real(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Integer(i), Real(r)) | (Real(r), Integer(i)) => integer_equals_real(*i, *r),
            (Str(a), Str(b)) => a == b,
            (Vector(a), Vector(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Set(a), Set(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Vector(v) => write!(f, "{v}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Set(s) => write!(f, "{s}"),
        }
    }
}
