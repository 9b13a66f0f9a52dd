use core::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

/// Closed set of the element types the containers are offered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `i32`
    Integer,
    /// `f32`
    Float,
    /// `char`
    Character,
    /// `String`
    Text,
}

impl ElementKind {
    /// All element kinds in the order they are offered.
    pub const ALL: [ElementKind; 4] = [Self::Integer, Self::Float, Self::Character, Self::Text];

    /// Short name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::Character => "char",
            Self::Text => "string",
        }
    }

    /// Parses the short name of a kind, such as "int" or "string".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.name() == name)
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An element which can be stored, searched, sorted and printed by the containers.
pub trait Element: Clone + PartialEq + Display + Debug {
    /// Kind of the element type.
    const KIND: ElementKind;

    /// Total order of the elements used by the default ascending sort.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline(always)]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float;

    /// IEEE-754 total order; `-0.0` precedes `0.0`, NaNs are placed at the ends.
    #[inline(always)]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Element for char {
    const KIND: ElementKind = ElementKind::Character;

    #[inline(always)]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Text;

    #[inline(always)]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// The default comparator of the `sort` methods of all containers: ascending order
/// with respect to [`Element::compare`].
///
/// `container.sort()` is equivalent to `container.sort_by(ascending)`.
#[inline(always)]
pub fn ascending<T: Element>(a: &T, b: &T) -> Ordering {
    a.compare(b)
}

/// Reverse of [`ascending`].
#[inline(always)]
pub fn descending<T: Element>(a: &T, b: &T) -> Ordering {
    b.compare(a)
}

/// Writes the elements separated by a single space.
pub(crate) fn write_separated<I>(f: &mut core::fmt::Formatter<'_>, iter: I) -> core::fmt::Result
where
    I: Iterator,
    I::Item: Display,
{
    for (i, x) in iter.enumerate() {
        match i {
            0 => write!(f, "{x}")?,
            _ => write!(f, " {x}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ElementKind::from_name("double"), None);
    }

    #[test]
    fn float_order_is_total() {
        let mut values = [2.5f32, f32::NAN, -1.0, 0.0, -0.0];
        values.sort_by(ascending);
        assert_eq!(values[0], -1.0);
        assert!(values[1].is_sign_negative() && values[1] == 0.0);
        assert!(values[4].is_nan());
    }

    #[test]
    fn descending_reverses() {
        let mut values = vec!['b', 'c', 'a'];
        values.sort_by(descending);
        assert_eq!(values, vec!['c', 'b', 'a']);
    }
}
