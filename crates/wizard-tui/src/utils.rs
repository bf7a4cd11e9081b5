use base64::Engine as _;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Helper function to create a centered rect using up certain percentage of the available rect `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

/// Build an OSC 52 escape sequence that places `text` on the system
/// clipboard of any terminal that supports it. The sequence is written
/// straight to the terminal; the store is never involved.
pub fn osc52_copy_sequence(text: &str) -> Vec<u8> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let mut buffer = Vec::with_capacity(encoded.len() + 16);
    buffer.extend_from_slice(b"\x1b]52;c;");
    buffer.extend_from_slice(encoded.as_bytes());
    buffer.extend_from_slice(b"\x07");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_sequence_wraps_base64_payload() {
        let seq = osc52_copy_sequence("hi");
        assert!(seq.starts_with(b"\x1b]52;c;"));
        assert!(seq.ends_with(b"\x07"));
        // "hi" -> aGk=
        assert!(seq.windows(4).any(|w| w == b"aGk="));
    }
}
