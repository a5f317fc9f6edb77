//! mpv JSON IPC codec
//!
//! Requests are written as newline-delimited `{"command": [...], "request_id": n}`
//! objects. Events come back on the same socket as objects carrying an
//! `event` field; command replies (which carry `error` instead) are ignored.

use serde::Deserialize;
use serde_json::{json, Value};

/// Property id used when observing `pause`
pub const PAUSE_OBSERVER_ID: u64 = 1;

/// Commands the player sends to the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum RendererRequest {
    /// Replace whatever is playing with `url`
    Load { url: String, user_agent: String },
    TogglePause,
    /// Relative seek in seconds
    SeekRelative(i64),
    AttachSubtitle {
        url: String,
        label: String,
        lang: String,
    },
    SetSubtitleVisibility(bool),
    SetFullscreen(bool),
    Stop,
}

/// Callbacks the renderer reports back
#[derive(Debug, Clone, PartialEq)]
pub enum RendererEvent {
    LoadStarted,
    LoadFinished,
    LoadFailed(String),
    /// The stream played to its end
    Finished,
    PauseChanged(bool),
    Exited,
}

impl RendererRequest {
    /// mpv command arrays for this request, in send order
    pub fn commands(&self) -> Vec<Value> {
        match self {
            RendererRequest::Load { url, user_agent } => vec![
                json!(["set_property", "user-agent", user_agent]),
                json!(["loadfile", url, "replace"]),
            ],
            RendererRequest::TogglePause => vec![json!(["cycle", "pause"])],
            RendererRequest::SeekRelative(secs) => {
                vec![json!(["seek", secs.to_string(), "relative"])]
            }
            RendererRequest::AttachSubtitle { url, label, lang } => {
                vec![json!(["sub-add", url, "select", label, lang])]
            }
            RendererRequest::SetSubtitleVisibility(visible) => vec![
                json!(["set_property", "sid", 1]),
                json!(["set_property", "sub-visibility", visible]),
            ],
            RendererRequest::SetFullscreen(on) => {
                vec![json!(["set_property", "fullscreen", on])]
            }
            RendererRequest::Stop => vec![json!(["quit"])],
        }
    }
}

/// Command sent once after connecting so pause changes are reported
pub fn observe_pause() -> Value {
    json!(["observe_property", PAUSE_OBSERVER_ID, "pause"])
}

/// Serialize one command array as an IPC line (newline included)
pub fn encode_command(command: Value, request_id: u64) -> String {
    let mut line = json!({ "command": command, "request_id": request_id }).to_string();
    line.push('\n');
    line
}

/// Tracks request ids across a connection
#[derive(Debug, Default)]
pub struct Encoder {
    next_id: u64,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a request into one or more IPC lines
    pub fn encode(&mut self, request: &RendererRequest) -> Vec<String> {
        request
            .commands()
            .into_iter()
            .map(|cmd| self.encode_raw(cmd))
            .collect()
    }

    pub fn encode_raw(&mut self, command: Value) -> String {
        self.next_id += 1;
        encode_command(command, self.next_id)
    }
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    event: String,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    file_error: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Decode one line from the socket; `None` for replies and unrelated events
pub fn decode_event(line: &str) -> Option<RendererEvent> {
    let raw: RawEvent = serde_json::from_str(line.trim()).ok()?;
    match raw.event.as_str() {
        "start-file" => Some(RendererEvent::LoadStarted),
        "file-loaded" => Some(RendererEvent::LoadFinished),
        "end-file" if raw.reason.as_deref() == Some("error") => Some(RendererEvent::LoadFailed(
            raw.file_error.unwrap_or_else(|| "unknown error".to_string()),
        )),
        "end-file" if raw.reason.as_deref() == Some("eof") => Some(RendererEvent::Finished),
        "property-change" if raw.name.as_deref() == Some("pause") => raw
            .data
            .and_then(|v| v.as_bool())
            .map(RendererEvent::PauseChanged),
        "shutdown" => Some(RendererEvent::Exited),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let mut enc = Encoder::new();
        let a = enc.encode(&RendererRequest::TogglePause);
        let b = enc.encode(&RendererRequest::Stop);
        assert_eq!(a, vec!["{\"command\":[\"cycle\",\"pause\"],\"request_id\":1}\n"]);
        assert_eq!(b, vec!["{\"command\":[\"quit\"],\"request_id\":2}\n"]);
    }

    #[test]
    fn test_reply_is_not_an_event() {
        assert_eq!(
            decode_event(r#"{"data":null,"error":"success","request_id":3}"#),
            None
        );
    }

    #[test]
    fn test_end_file_reasons() {
        assert_eq!(
            decode_event(r#"{"event":"end-file","reason":"eof"}"#),
            Some(RendererEvent::Finished)
        );
        // replaced by the next loadfile
        assert_eq!(decode_event(r#"{"event":"end-file","reason":"stop"}"#), None);
    }
}
