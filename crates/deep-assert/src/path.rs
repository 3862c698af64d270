//! Diagnostic path segments for nested failure messages.
//!
//! Comparison threads an explicit segment list while it descends; the path
//! is rendered into a display string only when a failure is constructed.

/// One step of descent into a structured value.
///
/// Index segments keep the original key text so rendering reproduces the
/// caller's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(String),
}

/// A key counts as an index when it coerces to a non-negative number.
pub(crate) fn segment_for(key: &str) -> Segment {
    let numeric = key.parse::<f64>().map(|n| n >= 0.0).unwrap_or(false);
    if numeric {
        Segment::Index(key.to_string())
    } else {
        Segment::Key(key.to_string())
    }
}

/// Ordered descent path from the comparison root to the failing leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this path extended by one segment.
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the path onto `base`, which already ends with the message
    /// separator.
    ///
    /// `Key(k)` appends `k.`; `Index(i)` swallows the preceding character
    /// (the trailing `.` of the path so far, or the trailing space of the
    /// base message) and appends `[i].`.
    pub fn render(&self, base: &str) -> String {
        let mut out = String::from(base);
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    out.push_str(key);
                    out.push('.');
                }
                Segment::Index(index) => {
                    out.pop();
                    out.push('[');
                    out.push_str(index);
                    out.push_str("].");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dotted_keys() {
        let path = Path::new()
            .child(Segment::Key("propB".to_string()))
            .child(Segment::Key("propA".to_string()));
        assert_eq!(path.render("Expected "), "Expected propB.propA.");
    }

    #[test]
    fn index_rewrites_trailing_dot() {
        let path = Path::new()
            .child(Segment::Key("propA".to_string()))
            .child(Segment::Index("1".to_string()));
        assert_eq!(path.render("Expected "), "Expected propA[1].");
    }

    #[test]
    fn leading_index_swallows_base_separator() {
        let path = Path::new().child(Segment::Index("1".to_string()));
        assert_eq!(path.render("Expected "), "Expected[1].");
    }

    #[test]
    fn empty_path_is_base() {
        assert_eq!(Path::new().render("Test: Expected "), "Test: Expected ");
    }

    #[test]
    fn numeric_keys_become_indices() {
        assert_eq!(segment_for("0"), Segment::Index("0".to_string()));
        assert_eq!(segment_for("12"), Segment::Index("12".to_string()));
        assert_eq!(segment_for("propA"), Segment::Key("propA".to_string()));
        assert_eq!(segment_for("-1"), Segment::Key("-1".to_string()));
    }
}
