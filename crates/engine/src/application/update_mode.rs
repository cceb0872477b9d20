//! How a PUT body is applied to the stored record.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every mutable field is overwritten, empty or not.
    #[default]
    Replace,
    /// Only non-empty incoming fields overwrite the stored ones.
    Merge,
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            other => Err(format!("unknown update mode '{other}' (expected replace or merge)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("replace".parse(), Ok(UpdateMode::Replace));
        assert_eq!(" Merge ".parse(), Ok(UpdateMode::Merge));
        assert!("patch".parse::<UpdateMode>().is_err());
    }
}
