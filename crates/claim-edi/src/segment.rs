use std::fmt;

/// Separates elements within a segment.
pub const ELEMENT_SEPARATOR: char = '*';
/// Ends every segment except `ISA`.
pub const SEGMENT_TERMINATOR: char = '~';
/// Separates components inside a composite element.
pub const COMPONENT_SEPARATOR: char = ':';
/// Repetition separator declared in `ISA`.
pub const REPETITION_SEPARATOR: char = '^';

/// Characters with structural meaning in the output.
pub const RESERVED_DELIMITERS: [char; 4] = [
    ELEMENT_SEPARATOR,
    SEGMENT_TERMINATOR,
    COMPONENT_SEPARATOR,
    REPETITION_SEPARATOR,
];

/// One delimited line of an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tag: &'static str,
    pub elements: Vec<String>,
    /// `None` for a segment whose last element doubles as its terminator.
    pub terminator: Option<char>,
}

impl Segment {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            elements: Vec::new(),
            terminator: Some(SEGMENT_TERMINATOR),
        }
    }

    /// Append one element.
    #[must_use]
    pub fn element(mut self, value: impl Into<String>) -> Self {
        self.elements.push(value.into());
        self
    }

    /// Append `count` empty elements.
    #[must_use]
    pub fn empty(mut self, count: usize) -> Self {
        self.elements
            .extend(std::iter::repeat_n(String::new(), count));
        self
    }

    #[must_use]
    pub fn unterminated(mut self) -> Self {
        self.terminator = None;
        self
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)?;
        for element in &self.elements {
            write!(f, "{ELEMENT_SEPARATOR}{element}")?;
        }
        if let Some(terminator) = self.terminator {
            write!(f, "{terminator}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_elements_and_terminator() {
        let segment = Segment::new("N4").element("Springfield").element("IL").element("62701");
        assert_eq!(segment.to_string(), "N4*Springfield*IL*62701~");
    }

    #[test]
    fn renders_empty_elements() {
        let segment = Segment::new("NM1").element("PR").empty(2).element("PI");
        assert_eq!(segment.to_string(), "NM1*PR***PI~");
    }

    #[test]
    fn unterminated_segment_has_no_tilde() {
        let segment = Segment::new("ISA").element(":").unterminated();
        assert_eq!(segment.to_string(), "ISA*:");
    }
}
