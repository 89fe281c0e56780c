//! JSON messages exchanged with the browser over the presentation socket.

use serde::{Deserialize, Serialize};

use super::fullscreen::FullScreenError;
use super::keys::{Command, Key};
use super::shell::NoticeLevel;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Key { key: String },
    Next,
    Previous,
    First,
    Last,
    JumpTo { index: usize },
    ToggleAutoPlay,
    ToggleFullScreen,
    Reset,
    Exit,
    #[serde(rename = "fullscreen_changed")]
    FullScreenChanged { active: bool },
    #[serde(rename = "fullscreen_error")]
    FullScreenError {
        #[serde(default)]
        message: String,
    },
}

/// A client message after interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Key(Key),
    Command(Command),
    FullScreenChanged(bool),
    FullScreenFailed(FullScreenError),
    /// A key the presentation does not know about.
    Ignored,
}

impl From<ClientMessage> for ClientEvent {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::Key { key } => Key::parse(&key).map_or(ClientEvent::Ignored, ClientEvent::Key),
            ClientMessage::Next => ClientEvent::Command(Command::Next),
            ClientMessage::Previous => ClientEvent::Command(Command::Previous),
            ClientMessage::First => ClientEvent::Command(Command::First),
            ClientMessage::Last => ClientEvent::Command(Command::Last),
            ClientMessage::JumpTo { index } => ClientEvent::Command(Command::JumpTo(index)),
            ClientMessage::ToggleAutoPlay => ClientEvent::Command(Command::ToggleAutoPlay),
            ClientMessage::ToggleFullScreen => ClientEvent::Command(Command::ToggleFullScreen),
            ClientMessage::Reset => ClientEvent::Command(Command::Reset),
            ClientMessage::Exit => ClientEvent::Command(Command::Exit),
            ClientMessage::FullScreenChanged { active } => ClientEvent::FullScreenChanged(active),
            ClientMessage::FullScreenError { message } => {
                ClientEvent::FullScreenFailed(FullScreenError::Denied(message))
            }
        }
    }
}

/// One rendered slide plus the state snapshot that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub total: usize,
    pub percent: u8,
    pub is_auto_play: bool,
    pub is_full_screen: bool,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Hello {
        total: usize,
        prevent_default: Vec<&'static str>,
    },
    Frame(Frame),
    #[serde(rename = "request_fullscreen")]
    RequestFullScreen,
    #[serde(rename = "exit_fullscreen")]
    ExitFullScreen,
    Navigate { to: String },
    Notice { level: NoticeLevel, message: String },
}

impl ServerMessage {
    pub fn to_json(&self) -> String {
        // every variant is plain data; serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Failed to encode server message: {e}");
            String::from("{}")
        })
    }
}
