/*!
Single nullable scalars ([Element](enum.Element.html)), their logical types
([DType](enum.DType.html)), and the [Coerce](trait.Coerce.html) conversion protocol that turns
native Rust values into elements of any logical type.

Conversion rules between logical types:

| source | to string | to int | to float | to bool |
|---|---|---|---|---|
| string | identity | parse decimal | parse float | `true`/`t`/`1`, `false`/`f`/`0` (any case) |
| int | decimal | identity | widen | `1` / `0` |
| float | six decimals | truncate if finite | identity | `1.0` / `0.0` |
| bool | `true` / `false` | `1` / `0` | `1.0` / `0.0` | identity |

Anything else is NA. The string `"NaN"` is NA for every target type.
*/

use std::cmp::Ordering;
use std::fmt;

use value::Value;

/// Canonical string for NA elements.
pub const NA_STRING: &str = "NaN";

/// Logical type of an element or series.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DType {
    /// Text (string) values.
    Str,
    /// Signed integer values.
    Int,
    /// 64-bit floating-point values.
    Float,
    /// Boolean values.
    Bool,
}
impl DType {
    /// Common type of two logical types: string, then float, then int, then bool.
    pub fn promote(self, other: DType) -> DType {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }
    /// Returns `true` for integer and floating-point types.
    pub fn is_numeric(self) -> bool {
        self == DType::Int || self == DType::Float
    }
    fn rank(self) -> u8 {
        match self {
            DType::Bool => 0,
            DType::Int => 1,
            DType::Float => 2,
            DType::Str => 3,
        }
    }
}
impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            DType::Str => "string",
            DType::Int => "int",
            DType::Float => "float",
            DType::Bool => "bool",
        };
        write!(f, "{}", s)
    }
}

/// Conversion protocol from native values into the four logical types. Every conversion may yield
/// NA.
pub trait Coerce {
    /// Convert into a string value.
    fn to_str_value(&self) -> Value<String>;
    /// Convert into an integer value.
    fn to_int_value(&self) -> Value<i64>;
    /// Convert into a floating-point value.
    fn to_float_value(&self) -> Value<f64>;
    /// Convert into a boolean value.
    fn to_bool_value(&self) -> Value<bool>;
    /// Convert into an element of the value's own logical type. NA values without a type of their
    /// own become string NAs.
    fn to_element(&self) -> Element;

    /// Convert into an element of logical type `dtype`.
    fn coerce(&self, dtype: DType) -> Element {
        match dtype {
            DType::Str => Element::Str(self.to_str_value()),
            DType::Int => Element::Int(self.to_int_value()),
            DType::Float => Element::Float(self.to_float_value()),
            DType::Bool => Element::Bool(self.to_bool_value()),
        }
    }
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn format_float(f: f64) -> String {
    format!("{:.6}", f)
}

impl Coerce for str {
    fn to_str_value(&self) -> Value<String> {
        if self == NA_STRING {
            Value::Na
        } else {
            Value::Exists(self.to_string())
        }
    }
    fn to_int_value(&self) -> Value<i64> {
        self.parse::<i64>().ok().into()
    }
    fn to_float_value(&self) -> Value<f64> {
        if self == NA_STRING {
            return Value::Na;
        }
        self.parse::<f64>().ok().into()
    }
    fn to_bool_value(&self) -> Value<bool> {
        parse_bool(self).into()
    }
    fn to_element(&self) -> Element {
        Element::Str(self.to_str_value())
    }
}
impl Coerce for String {
    fn to_str_value(&self) -> Value<String> {
        self.as_str().to_str_value()
    }
    fn to_int_value(&self) -> Value<i64> {
        self.as_str().to_int_value()
    }
    fn to_float_value(&self) -> Value<f64> {
        self.as_str().to_float_value()
    }
    fn to_bool_value(&self) -> Value<bool> {
        self.as_str().to_bool_value()
    }
    fn to_element(&self) -> Element {
        self.as_str().to_element()
    }
}

impl Coerce for i64 {
    fn to_str_value(&self) -> Value<String> {
        Value::Exists(self.to_string())
    }
    fn to_int_value(&self) -> Value<i64> {
        Value::Exists(*self)
    }
    fn to_float_value(&self) -> Value<f64> {
        Value::Exists(*self as f64)
    }
    fn to_bool_value(&self) -> Value<bool> {
        match *self {
            1 => Value::Exists(true),
            0 => Value::Exists(false),
            _ => Value::Na,
        }
    }
    fn to_element(&self) -> Element {
        Element::Int(Value::Exists(*self))
    }
}

macro_rules! impl_coerce_via_i64 {
    ($($t:ty)*) => {$(
        impl Coerce for $t {
            fn to_str_value(&self) -> Value<String> {
                (*self as i64).to_str_value()
            }
            fn to_int_value(&self) -> Value<i64> {
                (*self as i64).to_int_value()
            }
            fn to_float_value(&self) -> Value<f64> {
                (*self as i64).to_float_value()
            }
            fn to_bool_value(&self) -> Value<bool> {
                (*self as i64).to_bool_value()
            }
            fn to_element(&self) -> Element {
                (*self as i64).to_element()
            }
        }
    )*}
}
impl_coerce_via_i64![i32 u32 usize];

impl Coerce for f64 {
    fn to_str_value(&self) -> Value<String> {
        if self.is_nan() {
            Value::Na
        } else {
            Value::Exists(format_float(*self))
        }
    }
    fn to_int_value(&self) -> Value<i64> {
        if self.is_finite() {
            Value::Exists(*self as i64)
        } else {
            Value::Na
        }
    }
    fn to_float_value(&self) -> Value<f64> {
        // NaN is the floating-point spelling of NA
        if self.is_nan() {
            Value::Na
        } else {
            Value::Exists(*self)
        }
    }
    fn to_bool_value(&self) -> Value<bool> {
        if *self == 1.0 {
            Value::Exists(true)
        } else if *self == 0.0 {
            Value::Exists(false)
        } else {
            Value::Na
        }
    }
    fn to_element(&self) -> Element {
        Element::Float(self.to_float_value())
    }
}
impl Coerce for f32 {
    fn to_str_value(&self) -> Value<String> {
        (*self as f64).to_str_value()
    }
    fn to_int_value(&self) -> Value<i64> {
        (*self as f64).to_int_value()
    }
    fn to_float_value(&self) -> Value<f64> {
        (*self as f64).to_float_value()
    }
    fn to_bool_value(&self) -> Value<bool> {
        (*self as f64).to_bool_value()
    }
    fn to_element(&self) -> Element {
        (*self as f64).to_element()
    }
}

impl Coerce for bool {
    fn to_str_value(&self) -> Value<String> {
        Value::Exists(if *self { "true" } else { "false" }.to_string())
    }
    fn to_int_value(&self) -> Value<i64> {
        Value::Exists(if *self { 1 } else { 0 })
    }
    fn to_float_value(&self) -> Value<f64> {
        Value::Exists(if *self { 1.0 } else { 0.0 })
    }
    fn to_bool_value(&self) -> Value<bool> {
        Value::Exists(*self)
    }
    fn to_element(&self) -> Element {
        Element::Bool(Value::Exists(*self))
    }
}

impl<T: Coerce> Coerce for Value<T> {
    fn to_str_value(&self) -> Value<String> {
        match *self {
            Value::Exists(ref v) => v.to_str_value(),
            Value::Na => Value::Na,
        }
    }
    fn to_int_value(&self) -> Value<i64> {
        match *self {
            Value::Exists(ref v) => v.to_int_value(),
            Value::Na => Value::Na,
        }
    }
    fn to_float_value(&self) -> Value<f64> {
        match *self {
            Value::Exists(ref v) => v.to_float_value(),
            Value::Na => Value::Na,
        }
    }
    fn to_bool_value(&self) -> Value<bool> {
        match *self {
            Value::Exists(ref v) => v.to_bool_value(),
            Value::Na => Value::Na,
        }
    }
    fn to_element(&self) -> Element {
        match *self {
            Value::Exists(ref v) => v.to_element(),
            Value::Na => Element::Str(Value::Na),
        }
    }
}
impl<T: Coerce> Coerce for Option<T> {
    fn to_str_value(&self) -> Value<String> {
        self.as_ref().map_or(Value::Na, |v| v.to_str_value())
    }
    fn to_int_value(&self) -> Value<i64> {
        self.as_ref().map_or(Value::Na, |v| v.to_int_value())
    }
    fn to_float_value(&self) -> Value<f64> {
        self.as_ref().map_or(Value::Na, |v| v.to_float_value())
    }
    fn to_bool_value(&self) -> Value<bool> {
        self.as_ref().map_or(Value::Na, |v| v.to_bool_value())
    }
    fn to_element(&self) -> Element {
        self.as_ref()
            .map_or(Element::Str(Value::Na), |v| v.to_element())
    }
}
impl<'a, T: Coerce + ?Sized> Coerce for &'a T {
    fn to_str_value(&self) -> Value<String> {
        (**self).to_str_value()
    }
    fn to_int_value(&self) -> Value<i64> {
        (**self).to_int_value()
    }
    fn to_float_value(&self) -> Value<f64> {
        (**self).to_float_value()
    }
    fn to_bool_value(&self) -> Value<bool> {
        (**self).to_bool_value()
    }
    fn to_element(&self) -> Element {
        (**self).to_element()
    }
}

/// A single nullable scalar. The variant is the element's logical type; an NA element still
/// carries its type.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// String element.
    Str(Value<String>),
    /// Integer element.
    Int(Value<i64>),
    /// Floating-point element.
    Float(Value<f64>),
    /// Boolean element.
    Bool(Value<bool>),
}

impl Element {
    /// Creates an element of type `dtype` from `value`, converting as necessary.
    pub fn new<C: Coerce + ?Sized>(value: &C, dtype: DType) -> Element {
        value.coerce(dtype)
    }
    /// Creates an NA element of type `dtype`.
    pub fn na(dtype: DType) -> Element {
        match dtype {
            DType::Str => Element::Str(Value::Na),
            DType::Int => Element::Int(Value::Na),
            DType::Float => Element::Float(Value::Na),
            DType::Bool => Element::Bool(Value::Na),
        }
    }
    /// Logical type of this element.
    pub fn dtype(&self) -> DType {
        match *self {
            Element::Str(_) => DType::Str,
            Element::Int(_) => DType::Int,
            Element::Float(_) => DType::Float,
            Element::Bool(_) => DType::Bool,
        }
    }
    /// Returns `true` if this element is NA.
    pub fn is_na(&self) -> bool {
        match *self {
            Element::Str(ref v) => v.is_na(),
            Element::Int(ref v) => v.is_na(),
            Element::Float(ref v) => v.is_na(),
            Element::Bool(ref v) => v.is_na(),
        }
    }
    /// Replaces the content of this element with `value`, keeping the element's type. Invalid
    /// conversions leave an NA.
    pub fn set<C: Coerce + ?Sized>(&mut self, value: &C) {
        *self = value.coerce(self.dtype());
    }
    /// Returns a converted copy of this element with type `dtype`.
    pub fn as_type(&self, dtype: DType) -> Element {
        self.coerce(dtype)
    }
    /// String projection (NA if absent or unconvertible).
    pub fn string_value(&self) -> Value<String> {
        self.to_str_value()
    }
    /// Integer projection (NA if absent or unconvertible).
    pub fn int_value(&self) -> Value<i64> {
        self.to_int_value()
    }
    /// Floating-point projection; NA and unconvertible elements are `NaN`.
    pub fn float_value(&self) -> f64 {
        self.to_float_value().unwrap_or(::std::f64::NAN)
    }
    /// Boolean projection (NA if absent or unconvertible).
    pub fn bool_value(&self) -> Value<bool> {
        self.to_bool_value()
    }
    /// Canonical string form of this element; NA is `"NaN"`.
    pub fn records(&self) -> String {
        self.to_str_value()
            .unwrap_or_else(|| NA_STRING.to_string())
    }

    /// Compares this element to `other`, after converting `other` to this element's type. `None`
    /// if either side is NA or the values are unordered.
    pub fn partial_compare(&self, other: &Element) -> Option<Ordering> {
        let other = other.as_type(self.dtype());
        match (self, &other) {
            (&Element::Str(Value::Exists(ref l)), &Element::Str(Value::Exists(ref r))) => {
                Some(l.cmp(r))
            }
            (&Element::Int(Value::Exists(l)), &Element::Int(Value::Exists(r))) => Some(l.cmp(&r)),
            (&Element::Float(Value::Exists(l)), &Element::Float(Value::Exists(r))) => {
                l.partial_cmp(&r)
            }
            (&Element::Bool(Value::Exists(l)), &Element::Bool(Value::Exists(r))) => {
                Some(l.cmp(&r))
            }
            _ => None,
        }
    }
    /// Equality after conversion; `false` if either side is NA.
    pub fn eq(&self, other: &Element) -> bool {
        self.partial_compare(other) == Some(Ordering::Equal)
    }
    /// Inequality after conversion; `false` if either side is NA.
    pub fn neq(&self, other: &Element) -> bool {
        match self.partial_compare(other) {
            Some(Ordering::Less) | Some(Ordering::Greater) => true,
            _ => false,
        }
    }
    /// Strictly less than; `false` if either side is NA.
    pub fn lt(&self, other: &Element) -> bool {
        self.partial_compare(other) == Some(Ordering::Less)
    }
    /// Less than or equal; `false` if either side is NA.
    pub fn le(&self, other: &Element) -> bool {
        match self.partial_compare(other) {
            Some(Ordering::Less) | Some(Ordering::Equal) => true,
            _ => false,
        }
    }
    /// Strictly greater than; `false` if either side is NA.
    pub fn gt(&self, other: &Element) -> bool {
        self.partial_compare(other) == Some(Ordering::Greater)
    }
    /// Greater than or equal; `false` if either side is NA.
    pub fn ge(&self, other: &Element) -> bool {
        match self.partial_compare(other) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => true,
            _ => false,
        }
    }
}

impl Coerce for Element {
    fn to_str_value(&self) -> Value<String> {
        match *self {
            Element::Str(ref v) => v.clone(),
            Element::Int(ref v) => v.to_str_value(),
            Element::Float(ref v) => v.to_str_value(),
            Element::Bool(ref v) => v.to_str_value(),
        }
    }
    fn to_int_value(&self) -> Value<i64> {
        match *self {
            Element::Str(ref v) => v.to_int_value(),
            Element::Int(ref v) => *v,
            Element::Float(ref v) => v.to_int_value(),
            Element::Bool(ref v) => v.to_int_value(),
        }
    }
    fn to_float_value(&self) -> Value<f64> {
        match *self {
            Element::Str(ref v) => v.to_float_value(),
            Element::Int(ref v) => v.to_float_value(),
            Element::Float(ref v) => *v,
            Element::Bool(ref v) => v.to_float_value(),
        }
    }
    fn to_bool_value(&self) -> Value<bool> {
        match *self {
            Element::Str(ref v) => v.to_bool_value(),
            Element::Int(ref v) => v.to_bool_value(),
            Element::Float(ref v) => v.to_bool_value(),
            Element::Bool(ref v) => *v,
        }
    }
    fn to_element(&self) -> Element {
        self.clone()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.records())
    }
}

macro_rules! impl_element_from {
    ($($t:ty => $dtype:expr)*) => {$(
        impl From<$t> for Element {
            fn from(orig: $t) -> Element {
                orig.coerce($dtype)
            }
        }
    )*}
}
impl_element_from![
    i64 => DType::Int
    i32 => DType::Int
    usize => DType::Int
    f64 => DType::Float
    bool => DType::Bool
    String => DType::Str
];
impl<'a> From<&'a str> for Element {
    fn from(orig: &'a str) -> Element {
        orig.coerce(DType::Str)
    }
}
