/// Upper bound on a segment's length in characters. Keeps a single slide's
/// body legible; boundaries are presentation hints, not semantic units.
pub const MAX_SEGMENT_CHARS: usize = 250;

const TRUNCATION_MARKER: &str = "...";

/// Read-only view over a generated script: the untouched full text plus the
/// blank-line segments the slide and narration exporters consume.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedOutput {
    pub full_text: String,
    pub segments: Vec<String>,
}

impl PartitionedOutput {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Total over arbitrary text: splits on blank lines, drops whitespace-only
/// segments, collapses internal newlines to spaces, and truncates anything
/// past [`MAX_SEGMENT_CHARS`] to 247 characters plus the marker. Order of
/// surviving segments matches the input.
pub fn partition(text: &str) -> PartitionedOutput {
    let segments = text
        .split("\n\n")
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .map(|block| truncate_segment(block.replace('\n', " ")))
        .collect();

    PartitionedOutput {
        full_text: text.to_string(),
        segments,
    }
}

fn truncate_segment(segment: String) -> String {
    if segment.chars().count() <= MAX_SEGMENT_CHARS {
        return segment;
    }

    let keep = MAX_SEGMENT_CHARS - TRUNCATION_MARKER.chars().count();
    let mut cut: String = segment.chars().take(keep).collect();
    cut.push_str(TRUNCATION_MARKER);
    cut
}

#[cfg(test)]
mod tests {
    use super::{MAX_SEGMENT_CHARS, partition};

    #[test]
    fn splits_on_blank_lines() {
        let output = partition("Hola mundo\n\nEsta es la segunda parte.");
        assert_eq!(output.segments, vec!["Hola mundo", "Esta es la segunda parte."]);
    }

    #[test]
    fn preserves_full_text_unchanged() {
        let text = "uno\n\n  dos  \n\ntres";
        assert_eq!(partition(text).full_text, text);
    }

    #[test]
    fn drops_whitespace_only_segments() {
        let output = partition("uno\n\n   \n\n\t\n\ndos");
        assert_eq!(output.segments, vec!["uno", "dos"]);
    }

    #[test]
    fn entirely_blank_input_yields_empty_sequence() {
        assert!(partition("").is_empty());
        assert!(partition("\n\n\n\n").is_empty());
        assert!(partition("   \n\n   ").is_empty());
    }

    #[test]
    fn no_separator_yields_single_segment() {
        let output = partition("una sola línea sin separadores");
        assert_eq!(output.segments, vec!["una sola línea sin separadores"]);
    }

    #[test]
    fn collapses_internal_newlines_to_spaces() {
        let output = partition("primera línea\nsegunda línea\ntercera");
        assert_eq!(output.segments, vec!["primera línea segunda línea tercera"]);
    }

    #[test]
    fn long_segment_truncated_to_exactly_250_with_marker() {
        let long = "a".repeat(400);
        let output = partition(&long);
        assert_eq!(output.segments.len(), 1);
        let segment = &output.segments[0];
        assert_eq!(segment.chars().count(), MAX_SEGMENT_CHARS);
        assert!(segment.ends_with("..."));
        assert!(segment.starts_with(&"a".repeat(247)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "á".repeat(300);
        let output = partition(&long);
        assert_eq!(output.segments[0].chars().count(), MAX_SEGMENT_CHARS);
        assert!(output.segments[0].ends_with("..."));
    }

    #[test]
    fn short_segments_pass_through() {
        let exact = "b".repeat(MAX_SEGMENT_CHARS);
        let output = partition(&exact);
        assert_eq!(output.segments, vec![exact]);
    }

    #[test]
    fn order_is_preserved_with_no_loss_or_duplication() {
        let blocks: Vec<String> = (0..12).map(|i| format!("bloque {i}")).collect();
        let text = blocks.join("\n\n");
        let output = partition(&text);
        assert_eq!(output.segments, blocks);
    }

    #[test]
    fn repartitioning_a_segment_is_a_fixed_point() {
        let output = partition("un párrafo\ncon saltos internos\n\notro párrafo");
        for segment in &output.segments {
            let again = partition(segment);
            assert_eq!(again.segments, vec![segment.clone()]);
        }
    }
}
