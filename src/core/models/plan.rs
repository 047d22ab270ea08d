use std::fmt;

/// What applying a configuration to the current state will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Create,
    /// In-place update of the listed attributes.
    Update { changed: Vec<&'static str> },
    /// Destroy and recreate because force-new attributes changed.
    Replace { reasons: Vec<&'static str> },
    NoOp,
}

impl Plan {
    pub fn has_changes(&self) -> bool {
        !matches!(self, Plan::NoOp)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Create => write!(f, "create"),
            Plan::Update { changed } => write!(f, "update in-place ({})", changed.join(", ")),
            Plan::Replace { reasons } => {
                write!(f, "destroy and recreate ({} forces replacement)", reasons.join(", "))
            }
            Plan::NoOp => write!(f, "no changes"),
        }
    }
}
