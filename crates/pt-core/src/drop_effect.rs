use serde::{Deserialize, Serialize};

/// Operations a drag source permits on its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
    CopyMove,
    All,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
            Self::CopyMove => "copyMove",
            Self::All => "all",
        }
    }

    /// Whether a move is among the permitted operations
    pub fn allows_move(&self) -> bool {
        matches!(self, Self::Move | Self::CopyMove | Self::All)
    }
}

impl std::fmt::Display for DropEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
