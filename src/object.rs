use std::fmt::Display;

#[derive(Debug, Clone)]
pub enum Object {
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            // Values of different types are never equal
            _ => false,
        }
    }
}

impl Object {
    pub fn number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Truthiness for conditional contexts: only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{}", b),
            // Rust's default float formatting already drops the ".0" of
            // integral values, which is exactly the display rule we want.
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_without_decimal_point() {
        assert_eq!(format!("{}", Object::Number(3.0)), "3");
        assert_eq!(format!("{}", Object::Number(2.5)), "2.5");
        assert_eq!(format!("{}", Object::Number(-0.5)), "-0.5");
    }

    #[test]
    fn nil_prints_as_nil() {
        assert_eq!(format!("{}", Object::Nil), "nil");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Object::Nil, Object::Nil);
        assert_ne!(Object::Nil, Object::Boolean(false));
        assert_ne!(Object::Number(0.0), Object::Boolean(false));
        assert_ne!(Object::String("1".into()), Object::Number(1.0));
        assert_eq!(Object::Number(10.0), Object::Number(10.0));
    }

    #[test]
    fn truthiness() {
        assert!(!Object::Nil.is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(Object::Boolean(true).is_truthy());
        assert!(Object::Number(0.0).is_truthy());
        assert!(Object::String(String::new()).is_truthy());
    }
}
