use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Fatal,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Fatal => "FATAL",
        }
    }
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
    pub fn from_string(string: &str) -> Option<Self> {
        match string.to_ascii_lowercase().as_str() {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "fatal" => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
