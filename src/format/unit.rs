//! Binary byte units

use std::fmt;

/// Binary multiple of 1024 bytes
pub const UNIT_STEP: f64 = 1024.0;

/// Unit a formatted size is expressed in.
///
/// Every step is a factor of 1024; there is no unit above `TB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteUnit {
    B,
    KB,
    MB,
    GB,
    TB,
}

impl ByteUnit {
    /// All units in ascending order
    pub const ALL: [ByteUnit; 5] = [
        ByteUnit::B,
        ByteUnit::KB,
        ByteUnit::MB,
        ByteUnit::GB,
        ByteUnit::TB,
    ];

    /// The next larger unit, or `None` at `TB`
    pub fn next(self) -> Option<ByteUnit> {
        match self {
            ByteUnit::B => Some(ByteUnit::KB),
            ByteUnit::KB => Some(ByteUnit::MB),
            ByteUnit::MB => Some(ByteUnit::GB),
            ByteUnit::GB => Some(ByteUnit::TB),
            ByteUnit::TB => None,
        }
    }

    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> u64 {
        1024u64.pow(self as u32)
    }

    /// Label used when rendering
    pub fn label(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::KB => "KB",
            ByteUnit::MB => "MB",
            ByteUnit::GB => "GB",
            ByteUnit::TB => "TB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
