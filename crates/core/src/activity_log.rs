//! Activity log shown to the user, newest line first

use chrono::{DateTime, Local, TimeZone};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Cumulative log text. Every entry is prepended and the whole text is
/// handed to the surface again; nothing is ever dropped.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    text: String,
    entries: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Prepend `message` stamped with the current local time
    pub fn log(&mut self, message: &str) -> &str {
        self.log_at(Local::now(), message)
    }
    
    pub fn log_at<Tz>(&mut self, at: DateTime<Tz>, message: &str) -> &str
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let line = format!("{}: {}\n", at.format(TIME_FORMAT), message);
        self.text = format!("{} {}", line, self.text);
        self.entries += 1;
        &self.text
    }
    
    pub fn text(&self) -> &str {
        &self.text
    }
    
    /// The most recent line, without its timestamp
    pub fn latest_message(&self) -> Option<&str> {
        let line = self.text.lines().next()?;
        line.split_once(": ").map(|(_, message)| message)
    }
    
    pub fn len(&self) -> usize {
        self.entries
    }
    
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}
