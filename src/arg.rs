use std::fmt::{Display, Write};

/// A single formatting token of a log call.
///
/// Call sites convert their values up front, so the serializer never inspects
/// argument types itself. Floats stay unformatted until emission so a
/// [`Precision`](Arg::Precision) token earlier in the same call can apply.
pub enum Arg {
    /// A pre-formatted value.
    Text(String),
    /// A floating value, rendered per the active precision.
    Float(f64),
    /// Pseudo-argument: fixed-point digits for the floats that follow it in
    /// the same call. Emits nothing itself.
    Precision(usize),
}

impl Arg {
    /// Token for any displayable value, covering user-defined types.
    pub fn display<T: Display + ?Sized>(value: &T) -> Self {
        Arg::Text(value.to_string())
    }
}

/// Sets the fixed-point precision for subsequent floats in the same call.
pub fn precision(digits: usize) -> Arg {
    Arg::Precision(digits)
}

macro_rules! arg_from_to_string {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Arg::Text(value.to_string())
            }
        }
    )*};
}

arg_from_to_string!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, &str, String
);

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

/// Serializes one call's tokens. Every emitted token gets a single leading
/// space; precision state does not survive past the call.
pub(crate) fn render_args(args: &[Arg]) -> String {
    let mut out = String::new();
    let mut precision = None;
    for arg in args {
        match arg {
            Arg::Precision(digits) => precision = Some(*digits),
            Arg::Text(text) => {
                out.push(' ');
                out.push_str(text);
            }
            Arg::Float(value) => {
                out.push(' ');
                match precision {
                    Some(digits) => write!(out, "{value:.digits$}").ok(),
                    None => write!(out, "{value}").ok(),
                };
            }
        }
    }
    out
}

#[test]
fn test_bools_render_as_words() {
    assert_eq!(render_args(&[Arg::from(true), Arg::from(false)]), " true false");
}

#[test]
fn test_precision_applies_to_following_floats() {
    let args = [
        precision(2),
        Arg::from(3.14159),
        precision(6),
        Arg::from(3.14159),
    ];
    assert_eq!(render_args(&args), " 3.14 3.141590");
}

#[test]
fn test_float_without_precision_uses_natural_form() {
    assert_eq!(render_args(&[Arg::from(3.5)]), " 3.5");
}

#[test]
fn test_precision_token_emits_nothing() {
    assert_eq!(render_args(&[precision(4)]), "");
}

#[test]
fn test_display_token_covers_user_types() {
    struct Point(i32, i32);
    impl Display for Point {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "({},{})", self.0, self.1)
        }
    }
    assert_eq!(render_args(&[Arg::display(&Point(1, -2))]), " (1,-2)");
}
