/// Glyph placed in front of an entry, showing its position among siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `├── ` — more siblings follow.
    Tee,
    /// `└── ` — last sibling.
    Elbow,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::Elbow
        } else {
            Connector::Tee
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Tee => "\u{251c}\u{2500}\u{2500} ",   // ├──
            Connector::Elbow => "\u{2514}\u{2500}\u{2500} ", // └──
        }
    }
}

/// Prefix handed down to the children of an entry.
pub(super) fn child_prefix(prefix: &str, is_last: bool) -> String {
    let mut next = String::with_capacity(prefix.len() + 6);
    next.push_str(prefix);
    if is_last {
        next.push_str("    ");
    } else {
        next.push_str("\u{2502}   "); // │
    }
    next
}
