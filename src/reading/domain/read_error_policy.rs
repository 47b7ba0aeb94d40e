/// What to do with a read failure other than "file does not exist".
///
/// A missing file always yields absence; this policy only governs
/// permission errors, directories, invalid UTF-8 and oversize files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Return the failure to the caller as a `ReadError`
    #[default]
    Surface,
    /// Log the failure and return absence instead
    Absent,
}

impl std::str::FromStr for ReadErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "surface" => Ok(ReadErrorPolicy::Surface),
            "absent" => Ok(ReadErrorPolicy::Absent),
            _ => Err(format!(
                "Invalid read error policy: {}. Please specify 'surface' or 'absent'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReadErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadErrorPolicy::Surface => write!(f, "surface"),
            ReadErrorPolicy::Absent => write!(f, "absent"),
        }
    }
}
