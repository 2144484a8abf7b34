use crate::base::Ident;
use indexmap::IndexSet;
use std::fmt;

/// The concrete members of an identifier family, or a description of them
/// when the member count depends on an implementation limit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expansion {
    Literal(IndexSet<Ident>),
    Range(SymbolicRange),
}

impl Expansion {
    pub fn literal<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self::Literal(members.into_iter().map(Into::into).collect())
    }

    pub fn as_literal(&self) -> Option<&IndexSet<Ident>> {
        match self {
            Self::Literal(members) => Some(members),
            Self::Range(_) => None,
        }
    }

    pub fn as_range(&self) -> Option<&SymbolicRange> {
        match self {
            Self::Range(range) => Some(range),
            Self::Literal(_) => None,
        }
    }

    /// Concrete members, resolving range bounds through `resolve`.
    pub fn materialize(&self, resolve: impl Fn(&str) -> Option<u32>) -> Option<Vec<Ident>> {
        match self {
            Self::Literal(members) => Some(members.iter().cloned().collect()),
            Self::Range(range) => range.materialize(resolve),
        }
    }
}

/// `prefix` followed by an index running from `start` to `end` inclusive,
/// e.g. `CLIP_DISTANCEi, i = [0..MAX_CLIP_DISTANCES-1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolicRange {
    pub prefix: Ident,
    pub placeholder: char,
    pub start: u32,
    pub end: Bound,
}

impl SymbolicRange {
    pub fn new(prefix: impl Into<Ident>, placeholder: char, start: u32, end: Bound) -> Self {
        Self {
            prefix: prefix.into(),
            placeholder,
            start,
            end,
        }
    }

    /// The templated identifier this range describes (`CLIP_DISTANCEi`)
    pub fn signature(&self) -> Ident {
        format!("{}{}", self.prefix, self.placeholder).into()
    }

    /// Returns `None` if a limit named by the bound cannot be resolved.
    pub fn materialize(&self, resolve: impl Fn(&str) -> Option<u32>) -> Option<Vec<Ident>> {
        let end = self.end.evaluate(resolve)?;
        if end < i64::from(self.start) {
            return Some(Vec::new());
        }
        Some(
            (i64::from(self.start)..=end)
                .map(|index| Ident::from(format!("{}{}", self.prefix, index)))
                .collect(),
        )
    }
}

impl fmt::Display for SymbolicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{p}, {p} = [{}..{}]",
            self.prefix,
            self.start,
            self.end,
            p = self.placeholder
        )
    }
}

/// Upper bound of a [`SymbolicRange`]: `max(limits...) + offset`, or just
/// `offset` when no limit is named.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    pub limits: Vec<Ident>,
    pub offset: i64,
}

impl Bound {
    pub fn constant(value: i64) -> Self {
        Self {
            limits: Vec::new(),
            offset: value,
        }
    }

    /// `limit - 1`, the usual "last valid index" bound
    pub fn last_index_of(limit: impl Into<Ident>) -> Self {
        Self {
            limits: vec![limit.into()],
            offset: -1,
        }
    }

    /// `max(limits...) - 1`
    pub fn last_index_of_max<I, S>(limits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Ident>,
    {
        Self {
            limits: limits.into_iter().map(Into::into).collect(),
            offset: -1,
        }
    }

    pub fn evaluate(&self, resolve: impl Fn(&str) -> Option<u32>) -> Option<i64> {
        let mut largest: Option<i64> = None;
        for limit in &self.limits {
            let value = i64::from(resolve(limit)?);
            largest = Some(largest.map_or(value, |current| current.max(value)));
        }
        Some(largest.unwrap_or(0) + self.offset)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limits.as_slice() {
            [] => return write!(f, "{}", self.offset),
            [limit] => f.write_str(limit)?,
            limits => {
                let names: Vec<&str> = limits.iter().map(Ident::as_str).collect();
                write!(f, "max({})", names.join(", "))?;
            }
        }
        match self.offset {
            0 => Ok(()),
            offset if offset > 0 => write!(f, "+{offset}"),
            offset => write!(f, "{offset}"),
        }
    }
}
