//! Object key derivation
//!
//! Pure helpers that derive storage object keys from user-supplied file
//! names. Centralizing these keeps the upload side and the report side
//! agreeing on where artifacts live.

use chrono::{DateTime, Utc};

/// Folder prefix for uploaded audio recordings
pub const AUDIO_PREFIX: &str = "audio";

/// Folder prefix for compliance report artifacts
pub const REPORT_PREFIX: &str = "audits";

/// Audio extensions stripped when deriving the report key
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "m4a", "flac", "ogg"];

/// Sanitize a user-supplied file name into a storage-safe form.
///
/// Removes characters that are unsafe in object keys or file systems,
/// collapses whitespace runs, and replaces spaces with underscores.
/// Always returns a non-empty name; degenerate inputs become "untitled".
pub fn sanitize_file_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => {}
            c if (c as u32) < 0x20 => {}
            c => cleaned.push(c),
        }
    }

    let mut result = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for word in cleaned.split_whitespace() {
        for c in word.chars() {
            if c == '_' {
                if !prev_underscore {
                    result.push('_');
                    prev_underscore = true;
                }
            } else {
                result.push(c);
                prev_underscore = false;
            }
        }
        if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }

    let trimmed = result.trim_matches('_').to_string();
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed
    }
}

/// Derive the object key for an uploaded recording.
///
/// The key is prefixed with the issue timestamp in epoch milliseconds so
/// repeated uploads of the same file name never collide.
pub fn upload_object_key(file_name: &str, issued_at: DateTime<Utc>) -> String {
    let sanitized = sanitize_file_name(file_name);
    format!(
        "{}/{}-{}",
        AUDIO_PREFIX,
        issued_at.timestamp_millis(),
        sanitized
    )
}

/// Base name of an uploaded object, after the folder prefix.
///
/// This is the name clients register in the meeting registry.
pub fn stored_file_name(object_key: &str) -> &str {
    object_key
        .rsplit_once('/')
        .map(|(_, base)| base)
        .unwrap_or(object_key)
}

/// Derive the object key where the compliance report for a recording is
/// expected to appear.
///
/// One trailing audio extension is stripped case-insensitively; anything
/// else is kept as-is, so "notes.txt" maps to "audits/notes.txt.json".
pub fn report_object_key(source_file_name: &str) -> String {
    let base = strip_audio_extension(source_file_name);
    format!("{}/{}.json", REPORT_PREFIX, base)
}

fn strip_audio_extension(name: &str) -> &str {
    if let Some(dot) = name.rfind('.') {
        let ext = &name[dot + 1..];
        if AUDIO_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            return &name[..dot];
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_removes_unsafe_characters() {
        assert_eq!(sanitize_file_name("call<1>:*.mp3"), "call1.mp3");
        assert_eq!(sanitize_file_name("a/b\\c|d?e"), "abcde");
    }

    #[test]
    fn test_sanitize_removes_control_characters() {
        assert_eq!(sanitize_file_name("call\x00\x1frecord.wav"), "callrecord.wav");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_and_underscores() {
        assert_eq!(sanitize_file_name("team   sync  call.mp3"), "team_sync_call.mp3");
        assert_eq!(sanitize_file_name("a___b _ c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_trims_edges() {
        assert_eq!(sanitize_file_name("  call.mp3  "), "call.mp3");
        assert_eq!(sanitize_file_name("_call_"), "call");
    }

    #[test]
    fn test_sanitize_degenerate_input_falls_back() {
        assert_eq!(sanitize_file_name(""), "untitled");
        assert_eq!(sanitize_file_name("   "), "untitled");
        assert_eq!(sanitize_file_name("///***"), "untitled");
    }

    #[test]
    fn test_upload_object_key_shape() {
        let issued_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let key = upload_object_key("team call.mp3", issued_at);
        assert_eq!(
            key,
            format!("audio/{}-team_call.mp3", issued_at.timestamp_millis())
        );
    }

    #[test]
    fn test_upload_object_key_distinct_per_timestamp() {
        let first = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let second = first + chrono::Duration::milliseconds(1);
        assert_ne!(
            upload_object_key("call.mp3", first),
            upload_object_key("call.mp3", second)
        );
    }

    #[test]
    fn test_stored_file_name_strips_folder_prefix() {
        assert_eq!(stored_file_name("audio/1748779200000-call.mp3"), "1748779200000-call.mp3");
        assert_eq!(stored_file_name("no_prefix.mp3"), "no_prefix.mp3");
    }

    #[test]
    fn test_report_object_key_strips_audio_extension() {
        assert_eq!(report_object_key("call_01.mp3"), "audits/call_01.json");
        assert_eq!(report_object_key("MEETING.WAV"), "audits/MEETING.json");
        assert_eq!(report_object_key("voice.m4a"), "audits/voice.json");
    }

    #[test]
    fn test_report_object_key_keeps_unknown_extension() {
        assert_eq!(report_object_key("notes.txt"), "audits/notes.txt.json");
        assert_eq!(report_object_key("archive.tar.gz"), "audits/archive.tar.gz.json");
    }

    #[test]
    fn test_report_object_key_strips_only_last_extension() {
        assert_eq!(report_object_key("backup.mp3.mp3"), "audits/backup.mp3.json");
    }

    #[test]
    fn test_report_object_key_total_on_degenerate_input() {
        assert_eq!(report_object_key(""), "audits/.json");
        assert_eq!(report_object_key(".mp3"), "audits/.json");
    }
}
