/// Line the assembler writes where a header would be.
pub const TRANSCRIPT_VERSION_MARKER: &str = "# StringTie version";
pub const TRANSCRIPT_FEATURE: &str = "transcript";
