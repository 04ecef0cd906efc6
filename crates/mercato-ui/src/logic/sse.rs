//! Incremental parser for the server-push event stream.
//!
//! # Design
//! - Accept partial chunks and emit complete frames when a blank line lands.
//! - Keep this module DOM-free so framing runs in host tests.
//! - Decode failures carry the raw data back to the caller, which logs and
//!   drops them; a malformed payload must never propagate as a crash.

use mercato_events::Notification;

/// Parsed push frame: an optional event name plus the joined data payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SseFrame {
    /// Event name, when the frame carried one.
    pub event: Option<String>,
    /// Concatenated data payload.
    pub data: String,
}

impl SseFrame {
    fn is_empty(&self) -> bool {
        self.event.is_none() && self.data.is_empty()
    }
}

/// Incremental parser for streamed chunks.
#[derive(Default)]
pub struct SseParser {
    line: String,
    pending_cr: bool,
    builder: FrameBuilder,
}

impl SseParser {
    /// Feed a chunk, returning every frame completed by it.
    pub fn push(&mut self, chunk: &str) -> Vec<SseFrame> {
        let mut frames = Vec::new();
        for ch in chunk.chars() {
            if self.pending_cr {
                self.pending_cr = false;
                if ch == '\n' {
                    continue;
                }
            }
            match ch {
                '\n' => self.finish_line(&mut frames),
                '\r' => {
                    self.pending_cr = true;
                    self.finish_line(&mut frames);
                }
                _ => self.line.push(ch),
            }
        }
        frames
    }

    /// Flush any partial frame once the stream ends.
    pub fn finish(&mut self) -> Option<SseFrame> {
        if !self.line.is_empty() {
            self.finish_line(&mut Vec::new());
        }
        self.builder.take_frame()
    }

    fn finish_line(&mut self, frames: &mut Vec<SseFrame>) {
        let line = std::mem::take(&mut self.line);
        if line.is_empty() {
            if let Some(frame) = self.builder.take_frame() {
                frames.push(frame);
            }
            return;
        }
        if line.starts_with(':') {
            return;
        }
        let (field, value) = line
            .split_once(':')
            .map(|(field, value)| (field, value.strip_prefix(' ').unwrap_or(value)))
            .unwrap_or((line.as_str(), ""));
        self.builder.apply_field(field, value);
    }
}

#[derive(Default)]
struct FrameBuilder {
    event: Option<String>,
    data: String,
}

impl FrameBuilder {
    fn apply_field(&mut self, field: &str, value: &str) {
        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => {
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                self.data.push_str(value);
            }
            _ => {}
        }
    }

    fn take_frame(&mut self) -> Option<SseFrame> {
        let frame = SseFrame {
            event: self.event.take(),
            data: std::mem::take(&mut self.data),
        };
        if frame.is_empty() { None } else { Some(frame) }
    }
}

/// Raw data of a frame that failed to decode into a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamDecodeError {
    /// Event name of the offending frame.
    pub event: Option<String>,
    /// Raw payload data.
    pub data: String,
}

/// Decode a `notification` frame payload.
///
/// # Errors
///
/// Returns the raw frame data when the payload is empty or not valid JSON of
/// the notification shape.
pub fn decode_notification(frame: &SseFrame) -> Result<Notification, StreamDecodeError> {
    let data = frame.data.trim();
    if data.is_empty() {
        return Err(StreamDecodeError {
            event: frame.event.clone(),
            data: String::new(),
        });
    }
    serde_json::from_str::<Notification>(data).map_err(|_| StreamDecodeError {
        event: frame.event.clone(),
        data: frame.data.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::{SseParser, decode_notification};
    use mercato_events::NotificationKind;

    #[test]
    fn parser_emits_frames_on_blank_lines() {
        let mut parser = SseParser::default();
        let input = "event: connected\ndata: ready\n\nevent: notification\ndata: {}\n\n";
        let frames = parser.push(input);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].event.as_deref(), Some("connected"));
        assert_eq!(frames[0].data, "ready");
        assert_eq!(frames[1].event.as_deref(), Some("notification"));
    }

    #[test]
    fn parser_joins_multi_line_data() {
        let mut parser = SseParser::default();
        let frames = parser.push("data: line1\ndata: line2\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "line1\nline2");
    }

    #[test]
    fn parser_handles_crlf_and_split_chunks() {
        let mut parser = SseParser::default();
        assert!(parser.push("event: notif").is_empty());
        let frames = parser.push("ication\r\ndata: {}\r\n\r\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].event.as_deref(), Some("notification"));
    }

    #[test]
    fn comments_and_unknown_fields_are_ignored() {
        let mut parser = SseParser::default();
        let frames = parser.push(": keep-alive\nid: 12\nretry: 5000\ndata: x\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].data, "x");
        assert_eq!(frames[0].event, None);
    }

    #[test]
    fn finish_flushes_a_trailing_frame() {
        let mut parser = SseParser::default();
        assert!(parser.push("event: connected\ndata: ok").is_empty());
        let frame = parser.finish().expect("trailing frame");
        assert_eq!(frame.event.as_deref(), Some("connected"));
        assert_eq!(frame.data, "ok");
    }

    #[test]
    fn well_formed_payloads_decode() {
        let mut parser = SseParser::default();
        let frames = parser.push(
            "event: notification\ndata: {\"title\":\"New order\",\"message\":\"#1209\",\"type\":\"new-order\"}\n\n",
        );
        let parsed = decode_notification(&frames[0]).expect("valid notification");
        assert_eq!(parsed.kind, NotificationKind::NewOrder);
        assert_eq!(parsed.title, "New order");
    }

    #[test]
    fn malformed_payloads_surface_the_raw_data() {
        let mut parser = SseParser::default();
        let frames = parser.push("event: notification\ndata: not-json\n\n");
        let error = decode_notification(&frames[0]).expect_err("invalid payload");
        assert_eq!(error.data, "not-json");
        assert_eq!(error.event.as_deref(), Some("notification"));
    }
}
