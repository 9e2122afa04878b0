use axum::body::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use std::io;

use crate::routes;

pub const HEALTH_MESSAGE: &str = "I'm doing great!";
pub const ACKNOWLEDGEMENT_MESSAGE: &str = "I got your data";
pub const DEFAULT_MESSAGE_PREFIX: &str =
    "Hello there. This is a default server response. Try valid URLs: ";

/// Body shape shared by every fixed response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// JSON formatter that separates members with `", "` and keys from values
/// with `": "`, matching the bodies clients of this fixture compare against.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` with the spaced separators
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn render_message(message: impl Into<String>) -> serde_json::Result<Bytes> {
    let body = to_spaced_json(&MessageResponse {
        message: message.into(),
    })?;
    Ok(Bytes::from(body))
}

/// Fixed response bodies, rendered once at startup
#[derive(Debug, Clone)]
pub struct ResponseTemplates {
    pub health: Bytes,
    pub default: Bytes,
    pub acknowledgement: Bytes,
}

impl ResponseTemplates {
    /// Render the templates, advertising `known_routes` in the default body
    pub fn new(known_routes: &[&str]) -> serde_json::Result<Self> {
        Ok(ResponseTemplates {
            health: render_message(HEALTH_MESSAGE)?,
            default: render_message(format!(
                "{}{}",
                DEFAULT_MESSAGE_PREFIX,
                routes::format_route_list(known_routes)
            ))?,
            acknowledgement: render_message(ACKNOWLEDGEMENT_MESSAGE)?,
        })
    }
}
