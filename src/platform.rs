//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit and switch-screen shortcuts
/// - macOS: SUPER (Cmd key), Ctrl is accepted too
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reveal password shortcut display
pub const REVEAL_SHORTCUT: &str = "Ctrl+R";

/// Switch between sign-in and registration
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const SWITCH_SCREEN_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const SWITCH_SCREEN_SHORTCUT: &str = "Ctrl+N";

/// Sign out from the home screen
#[cfg(target_os = "macos")]
pub const SIGN_OUT_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const SIGN_OUT_SHORTCUT: &str = "Ctrl+L";

/// True when `modifiers` carries Ctrl or the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SHORTCUT_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_always_a_shortcut() {
        assert!(is_shortcut(KeyModifiers::CONTROL));
        assert!(is_shortcut(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert!(!is_shortcut(KeyModifiers::NONE));
        assert!(!is_shortcut(KeyModifiers::SHIFT));
    }
}
