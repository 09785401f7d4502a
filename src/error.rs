use thiserror::Error;

/// Assembly failures. Blank fields never error (they degrade to placeholder
/// text); the only hard failure is a profile that needs a field the record
/// cannot default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// The Compact profile renders a license badge unconditionally, so the
    /// caller must supply a license before rendering with it.
    #[error("the compact template requires a license, but none was selected")]
    MissingLicense,
}
