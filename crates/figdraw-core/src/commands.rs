//! Editor commands and their keyboard shortcuts.

/// Actions reachable from menus and shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Clear,
    Quit,
    CancelGesture,
    About,
}

/// What the presentation should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
    /// Text to show to the user.
    Info(String),
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub command: Command,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool, command: Command) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.key.eq_ignore_ascii_case(key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, Command::Undo),
            Shortcut::new("D", true, false, Command::Clear),
            Shortcut::new("Q", true, false, Command::Quit),
            Shortcut::new("Escape", false, false, Command::CancelGesture),
        ]
    }

    /// Resolve a key press. Letter keys match case-insensitively.
    pub fn lookup(key: &str, ctrl: bool, shift: bool) -> Option<Command> {
        Self::all()
            .into_iter()
            .find(|s| s.matches(key, ctrl, shift))
            .map(|s| s.command)
    }

    /// Shortcut bound to a command, if any.
    pub fn shortcut_for(command: Command) -> Option<Shortcut> {
        Self::all().into_iter().find(|s| s.command == command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(ShortcutRegistry::lookup("z", true, false), Some(Command::Undo));
        assert_eq!(ShortcutRegistry::lookup("D", true, false), Some(Command::Clear));
        assert_eq!(ShortcutRegistry::lookup("Q", true, false), Some(Command::Quit));
        assert_eq!(
            ShortcutRegistry::lookup("Escape", false, false),
            Some(Command::CancelGesture)
        );
    }

    #[test]
    fn test_modifiers_must_match() {
        assert_eq!(ShortcutRegistry::lookup("Z", false, false), None);
        assert_eq!(ShortcutRegistry::lookup("Z", true, true), None);
    }

    #[test]
    fn test_format() {
        let shortcut = ShortcutRegistry::shortcut_for(Command::Quit).unwrap();
        assert_eq!(shortcut.format(), "Ctrl+Q");
        assert!(ShortcutRegistry::shortcut_for(Command::About).is_none());
    }
}
