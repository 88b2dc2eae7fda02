//! Platform path rules.
//!
//! Everything that differs between OS families when building a path lives
//! behind [`PathRules`]: which names count as absolute and which byte joins
//! the home directory to a relative name.

use std::fmt;

pub trait PathRules: Send + Sync + fmt::Debug {
    fn is_absolute(&self, name: &[u8]) -> bool;
    fn separator(&self) -> u8;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PosixRules;

impl PathRules for PosixRules {
    fn is_absolute(&self, name: &[u8]) -> bool {
        name.first() == Some(&b'/')
    }

    fn separator(&self) -> u8 {
        b'/'
    }
}

/// Rooted names (`\x`, `/x`) and drive designators (`C:`) are absolute.
///
/// A drive-relative name such as `d:rel` counts as absolute too: it names a
/// location on another volume and is never joined onto the home directory.
/// No separator is required after the colon.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRules;

impl PathRules for WindowsRules {
    fn is_absolute(&self, name: &[u8]) -> bool {
        match name {
            [b'\\' | b'/', ..] => true,
            [drive, b':', ..] => drive.is_ascii_alphabetic(),
            _ => false,
        }
    }

    fn separator(&self) -> u8 {
        b'\\'
    }
}

#[cfg(windows)]
pub type NativeRules = WindowsRules;
#[cfg(not(windows))]
pub type NativeRules = PosixRules;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_absolute() {
        assert!(PosixRules.is_absolute(b"/var/data/x"));
        assert!(!PosixRules.is_absolute(b"table1.wt"));
        assert!(!PosixRules.is_absolute(b""));
        assert!(!PosixRules.is_absolute(b"C:\\data"));
        assert_eq!(PosixRules.separator(), b'/');
    }

    #[test]
    fn windows_absolute() {
        assert!(WindowsRules.is_absolute(b"C:\\data\\x"));
        assert!(WindowsRules.is_absolute(b"d:rel"));
        assert!(WindowsRules.is_absolute(b"\\\\server\\share"));
        assert!(WindowsRules.is_absolute(b"/data"));
        assert!(!WindowsRules.is_absolute(b"1:x"));
        assert!(!WindowsRules.is_absolute(b"table1.wt"));
        assert!(!WindowsRules.is_absolute(b"C"));
        assert_eq!(WindowsRules.separator(), b'\\');
    }
}
