//! Theme name validation and the overwrite policy

use std::path::Path;

use crate::error::{Result, ThemeError};
use crate::fs::FileSystem;
use crate::theme::Theme;

/// User-facing notices and confirmation used by [`can_generate`]
pub trait Reporter {
    /// Show a warning.
    fn warn(&self, message: &str);

    /// Show an error.
    fn error(&self, message: &str);

    /// Ask a yes/no question. Non-interactive implementations answer `false`.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Whether `c` may appear in a theme name.
///
/// Only ASCII whitespace is accepted, vertical tab included.
#[must_use]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || is_name_whitespace(c)
}

const fn is_name_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Validate a theme name.
///
/// Checks run in order and the first failure is returned:
/// empty name, disallowed characters, then an existing theme directory
/// (skipped when `allow_existing` is set so the overwrite policy can decide).
pub fn validate_name<F: FileSystem>(
    name: &str,
    themes_dir: &Path,
    fs: &F,
    allow_existing: bool,
) -> Result<()> {
    if name.chars().all(is_name_whitespace) {
        return Err(ThemeError::EmptyName);
    }

    if !name.chars().all(is_allowed_char) {
        return Err(ThemeError::InvalidCharacters(name.to_string()));
    }

    if !allow_existing && fs.is_dir(Theme::new(name, themes_dir).root_directory_path()) {
        return Err(ThemeError::AlreadyExists(name.to_string()));
    }

    Ok(())
}

/// Decide whether generation may proceed for `theme`.
///
/// No existing root means there is nothing to protect. Otherwise the user is
/// told about the conflict and generation proceeds only when `force` is set
/// or the reporter confirms. Callers must not write anything on `false`.
pub fn can_generate<F: FileSystem, R: Reporter + ?Sized>(
    theme: &Theme,
    force: bool,
    fs: &F,
    reporter: &R,
) -> bool {
    if !fs.is_dir(theme.root_directory_path()) {
        return true;
    }

    let name = theme.name();
    reporter.error(&format!("Theme \"{name}\" already exists."));

    let proceed =
        force || reporter.confirm(&format!("Are you sure want to override \"{name}\" theme folder?"));

    if proceed {
        tracing::warn!(theme = name, force, "overriding existing theme");
        reporter.warn(&format!("Overriding Theme \"{name}\"."));
    } else {
        reporter.error(&format!("Generation of Theme \"{name}\" has been canceled."));
    }

    proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFs;
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingReporter {
        answer: bool,
        messages: RefCell<Vec<String>>,
        asked: RefCell<usize>,
    }

    impl Reporter for RecordingReporter {
        fn warn(&self, message: &str) {
            self.messages.borrow_mut().push(format!("warn: {message}"));
        }

        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("error: {message}"));
        }

        fn confirm(&self, _prompt: &str) -> bool {
            *self.asked.borrow_mut() += 1;
            self.answer
        }
    }

    #[test]
    fn empty_name_is_rejected_first() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        assert!(matches!(
            validate_name("", dir.path(), &fs, false),
            Err(ThemeError::EmptyName)
        ));
        assert!(matches!(
            validate_name("  \t", dir.path(), &fs, false),
            Err(ThemeError::EmptyName)
        ));
    }

    #[test]
    fn invalid_characters_win_over_existence() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("bad.name")).unwrap();
        let fs = LocalFs::new();

        let err = validate_name("bad.name", dir.path(), &fs, false).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidCharacters(name) if name == "bad.name"));
    }

    #[test]
    fn existing_directory_is_rejected_unless_allowed() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("aurora")).unwrap();
        let fs = LocalFs::new();

        assert!(matches!(
            validate_name("aurora", dir.path(), &fs, false),
            Err(ThemeError::AlreadyExists(name)) if name == "aurora"
        ));
        assert!(validate_name("aurora", dir.path(), &fs, true).is_ok());
    }

    #[test]
    fn existing_file_is_not_a_collision() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("aurora"), "").unwrap();
        assert!(validate_name("aurora", dir.path(), &LocalFs::new(), false).is_ok());
    }

    #[test]
    fn unicode_whitespace_is_invalid() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        for name in ["a\u{3000}b", "a\u{a0}b", "a\u{2028}b", "\u{85}x", "\u{3000}"] {
            assert!(
                matches!(
                    validate_name(name, dir.path(), &fs, false),
                    Err(ThemeError::InvalidCharacters(_))
                ),
                "{name:?}"
            );
        }
    }

    #[test]
    fn vertical_tab_is_whitespace() {
        let dir = TempDir::new().unwrap();
        assert!(validate_name("a\x0bb", dir.path(), &LocalFs::new(), false).is_ok());
    }

    #[test]
    fn accepted_names() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        for name in ["default", "my-theme", "my_theme", "My Theme 2", "a"] {
            assert!(validate_name(name, dir.path(), &fs, false).is_ok(), "{name}");
        }
    }

    #[test]
    fn can_generate_without_existing_root() {
        let dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::default();
        let theme = Theme::new("aurora", dir.path());

        assert!(can_generate(&theme, false, &LocalFs::new(), &reporter));
        assert!(reporter.messages.borrow().is_empty());
        assert_eq!(*reporter.asked.borrow(), 0);
    }

    #[test]
    fn can_generate_with_force_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("aurora")).unwrap();
        let reporter = RecordingReporter::default();
        let theme = Theme::new("aurora", dir.path());

        assert!(can_generate(&theme, true, &LocalFs::new(), &reporter));
        assert_eq!(*reporter.asked.borrow(), 0);
        assert_eq!(
            *reporter.messages.borrow(),
            vec![
                "error: Theme \"aurora\" already exists.".to_string(),
                "warn: Overriding Theme \"aurora\".".to_string(),
            ]
        );
    }

    #[test]
    fn can_generate_asks_and_respects_decline() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("aurora")).unwrap();
        let reporter = RecordingReporter::default();
        let theme = Theme::new("aurora", dir.path());

        assert!(!can_generate(&theme, false, &LocalFs::new(), &reporter));
        assert_eq!(*reporter.asked.borrow(), 1);
        assert_eq!(
            reporter.messages.borrow().last().map(String::as_str),
            Some("error: Generation of Theme \"aurora\" has been canceled.")
        );
    }

    #[test]
    fn can_generate_asks_and_respects_confirmation() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("aurora")).unwrap();
        let reporter = RecordingReporter {
            answer: true,
            ..RecordingReporter::default()
        };
        let theme = Theme::new("aurora", dir.path());

        assert!(can_generate(&theme, false, &LocalFs::new(), &reporter));
        assert_eq!(*reporter.asked.borrow(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn names_from_allowed_class_validate(name in "[A-Za-z0-9_-][A-Za-z0-9_ -]{0,40}") {
                let dir = TempDir::new().unwrap();
                prop_assert!(validate_name(&name, dir.path(), &LocalFs::new(), false).is_ok());
            }

            #[test]
            fn any_disallowed_char_is_rejected(
                prefix in "[A-Za-z0-9_-]{0,20}",
                bad in r"[^A-Za-z0-9_\-\t\n\x0B\x0C\r ]|[\u{85}\u{A0}\u{2028}\u{3000}]",
                suffix in "[A-Za-z0-9_ -]{0,20}",
            ) {
                let name = format!("{prefix}{bad}{suffix}");
                let dir = TempDir::new().unwrap();
                let result = validate_name(&name, dir.path(), &LocalFs::new(), false);
                prop_assert!(matches!(result, Err(ThemeError::InvalidCharacters(_))));
            }
        }
    }
}
