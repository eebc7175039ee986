use std::fmt;

/// Phone number of an organization.
///
/// Numbers are stored verbatim; the directory does not normalize or
/// validate numbering plans.
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for PhoneNumber {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for PhoneNumber {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<PhoneNumber> for String {
    fn from(from: PhoneNumber) -> Self {
        from.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
