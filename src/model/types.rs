use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

/// Elements a skeleton graph may label its nodes with.
///
/// Skeleton nodes default to [`Element::C`]; synthesized atoms are always
/// [`Element::H`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Element {
    H = 1,
    #[default]
    C = 6,
    N = 7,
    O = 8,
    S = 16,
}

impl Element {
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::S => "S",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Element::H),
            "C" => Ok(Element::C),
            "N" => Ok(Element::N),
            "O" => Ok(Element::O),
            "S" => Ok(Element::S),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("C").unwrap(), Element::C);
        assert_eq!(Element::from_str("S").unwrap(), Element::S);
    }

    #[test]
    fn element_from_str_invalid_case() {
        let err = Element::from_str("c").unwrap_err();
        assert_eq!(err.to_string(), "invalid or unsupported element symbol: 'c'");
    }

    #[test]
    fn element_symbol_display_and_atomic_number() {
        assert_eq!(Element::O.symbol(), "O");
        assert_eq!(Element::N.to_string(), "N");
        assert_eq!(Element::C.atomic_number(), 6u8);
        assert_eq!(Element::H.atomic_number(), 1u8);
    }

    #[test]
    fn skeleton_default_is_carbon() {
        assert_eq!(Element::default(), Element::C);
    }
}
