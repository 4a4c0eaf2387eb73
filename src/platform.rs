//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for builder shortcuts (add menu, delete, add option)
pub const COMMAND_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Modifier for moving the selected field up or down
/// - macOS: SHIFT (Option+arrow is remapped by most terminals)
/// - Linux/Windows: ALT
#[cfg(target_os = "macos")]
pub const MOVE_MODIFIER: KeyModifiers = KeyModifiers::SHIFT;

#[cfg(not(target_os = "macos"))]
pub const MOVE_MODIFIER: KeyModifiers = KeyModifiers::ALT;

/// Move shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const MOVE_SHORTCUT: &str = "Shift+↑↓";

#[cfg(not(target_os = "macos"))]
pub const MOVE_SHORTCUT: &str = "Alt+↑↓";
