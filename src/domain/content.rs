//! Content sources for comment and description text
//!
//! Several flags can feed the same piece of text (inline argument, a file,
//! the user's editor, appended command output). The variants here make the
//! combination rules explicit; actually reading files and spawning editors
//! is the handler's business.

use std::path::PathBuf;

/// Where the text of a bug comment comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Text given on the command line.
    Inline(String),
    /// Text read from a file.
    FromFile(PathBuf),
    /// Text composed in the user's editor. When `prefill` is set the editor
    /// is opened with that file's contents.
    Editor { prefill: Option<PathBuf> },
}

impl ContentSource {
    /// Combine the three comment flags into one source.
    ///
    /// `--comment-editor` wins and is pre-filled from `--comment-from` when
    /// both are given; otherwise the file wins over inline text. Returns
    /// `None` when no flag was given.
    pub fn from_flags(
        inline: Option<String>,
        from_file: Option<PathBuf>,
        editor: bool,
    ) -> Option<Self> {
        if editor {
            return Some(Self::Editor { prefill: from_file });
        }
        if let Some(path) = from_file {
            return Some(Self::FromFile(path));
        }
        inline.map(Self::Inline)
    }
}

/// Sources for a new bug's description, applied in field order: the inline
/// text first, then the contents of `from_file`, then the output of
/// `append_command`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub inline: Option<String>,
    pub from_file: Option<PathBuf>,
    pub append_command: Option<String>,
}

impl Description {
    pub fn is_empty(&self) -> bool {
        self.inline.is_none() && self.from_file.is_none() && self.append_command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_flags_when_combined_then_none() {
        assert_eq!(ContentSource::from_flags(None, None, false), None);
    }

    #[test]
    fn given_inline_only_when_combined_then_inline() {
        let source = ContentSource::from_flags(Some("text".into()), None, false);
        assert_eq!(source, Some(ContentSource::Inline("text".into())));
    }

    #[test]
    fn given_file_and_editor_when_combined_then_editor_prefilled() {
        let source =
            ContentSource::from_flags(None, Some(PathBuf::from("notes.txt")), true);
        assert_eq!(
            source,
            Some(ContentSource::Editor {
                prefill: Some(PathBuf::from("notes.txt"))
            })
        );
    }

    #[test]
    fn given_file_and_inline_when_combined_then_file_wins() {
        let source = ContentSource::from_flags(
            Some("text".into()),
            Some(PathBuf::from("notes.txt")),
            false,
        );
        assert_eq!(source, Some(ContentSource::FromFile("notes.txt".into())));
    }
}
