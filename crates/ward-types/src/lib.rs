/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Primary key of a bed object on the ontology platform (e.g. `bed_3`).
///
/// Bed identifiers are opaque to this system. Blank input is rejected, and anything else is
/// stored exactly as given, surrounding whitespace included, so a lookup only matches the
/// platform's own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct BedId(String);

impl BedId {
    /// Returns `Err(TextError::Empty)` if the input is empty or only whitespace.
    pub fn parse(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BedId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'de> serde::Deserialize<'de> for BedId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BedId::parse(s).map_err(serde::de::Error::custom)
    }
}
