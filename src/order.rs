use std::fmt;

/// How element order participates when two wrappers are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderMode {
    /// Compare position by position.
    ///
    /// Only honored when the other operand is also `Consider` and both
    /// containers are sequenced.
    Consider,
    /// Compare as multisets: position is irrelevant, duplicate counts are not.
    Ignore,
}

impl OrderMode {
    #[inline]
    pub const fn is_considered(self) -> bool {
        matches!(self, OrderMode::Consider)
    }

    /// The mode two operands agree on. Any `Ignore` wins.
    #[inline]
    pub const fn shared(self, other: OrderMode) -> OrderMode {
        if self.is_considered() && other.is_considered() {
            OrderMode::Consider
        } else {
            OrderMode::Ignore
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderMode::Consider => f.write_str("Consider"),
            OrderMode::Ignore => f.write_str("Ignore"),
        }
    }
}
