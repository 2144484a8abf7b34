use std::fmt;

/// A numeric citation of a document section: `8`, `8.14` or `8.14-16`.
///
/// `minor` and `range` are alternative refinements of `major`; at most one
/// of them is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRef {
    pub major: u32,
    pub minor: Option<u32>,
    pub range: Option<(u32, u32)>,
}

impl SectionRef {
    pub fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            range: None,
        }
    }

    pub fn with_minor(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            range: None,
        }
    }

    pub fn with_range(major: u32, start: u32, end: u32) -> Self {
        Self {
            major,
            minor: None,
            range: Some((start, end)),
        }
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        } else if let Some((start, end)) = self.range {
            write!(f, ".{start}-{end}")?;
        }
        Ok(())
    }
}

/// A bracketed citation list such as `[10.4, 23.18]`.
///
/// The first reference is the defining section, the second (if any) the
/// supplementary one. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionDef {
    refs: Vec<SectionRef>,
}

impl SectionDef {
    pub fn new(defining: SectionRef, rest: impl IntoIterator<Item = SectionRef>) -> Self {
        let mut refs = vec![defining];
        refs.extend(rest);
        Self { refs }
    }

    /// The section that defines the cited item
    pub fn defining(&self) -> &SectionRef {
        &self.refs[0]
    }

    /// The section cited alongside the defining one
    pub fn supplementary(&self) -> Option<&SectionRef> {
        self.refs.get(1)
    }

    pub fn refs(&self) -> &[SectionRef] {
        &self.refs
    }

    pub fn into_refs(self) -> Vec<SectionRef> {
        self.refs
    }
}

impl fmt::Display for SectionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, section) in self.refs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{section}")?;
        }
        f.write_str("]")
    }
}

/// A section heading line: `Buffer Object Queries [6, 6.7]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionHeading {
    pub title: String,
    pub section: SectionDef,
}

impl fmt::Display for SectionHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, self.section)
    }
}
