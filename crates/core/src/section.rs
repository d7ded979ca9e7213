use std::fmt;

use serde::Serialize;

/// Stable anchor id of a content section.
///
/// Ids are defined once at startup, in document order, and compared by
/// value, so they are cheap to copy into per-frame state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SectionId(pub &'static str);

impl SectionId {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One entry of the navigation registry.
///
/// Order in the registry is document order is navigation order. An id
/// that no rendered block reports geometry for is silently skipped by
/// telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    /// Short label shown in the navigation bar.
    pub label: &'static str,
}

impl SectionDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id: SectionId(id),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_and_eq() {
        let a = SectionId("cover");
        assert_eq!(a.to_string(), "cover");
        assert_eq!(a, SectionId("cover"));
        assert_ne!(a, SectionId("contact"));
    }

    #[test]
    fn descriptor_construction() {
        let d = SectionDescriptor::new("skills", "Skills");
        assert_eq!(d.id.as_str(), "skills");
        assert_eq!(d.label, "Skills");
    }
}
