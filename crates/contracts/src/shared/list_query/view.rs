/// Key of the preset that applies no server-side filtering
pub const DEFAULT_VIEW: &str = "all";

/// Named server-side filter preset ("Complete", "Cancelled", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListView {
    pub label: &'static str,
    pub value: &'static str,
}

impl ListView {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}
