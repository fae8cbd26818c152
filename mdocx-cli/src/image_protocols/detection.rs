// ABOUTME: Terminal capability detection for Sixel image support
// ABOUTME: Decides from environment variables alone, without probing the terminal

use crate::constants::env::FORCE_IMAGES;
use std::env;

/// Raw environment values the detector looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSignals {
    pub wt_session: String,
    pub term_program: String,
    pub term: String,
}

impl EnvSignals {
    pub fn from_env() -> Self {
        Self {
            wt_session: env::var("WT_SESSION").unwrap_or_default(),
            term_program: env::var("TERM_PROGRAM").unwrap_or_default(),
            term: env::var("TERM").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_sixel: bool,
    pub terminal_name: String,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        // Check for user override first
        if let Ok(forced) = env::var(FORCE_IMAGES) {
            if let Some(caps) = Self::from_forced(&forced) {
                return caps;
            }
            log::warn!(
                "Unknown value '{}' in {}. Valid values: sixel, on, none, off",
                forced,
                FORCE_IMAGES
            );
        }

        let caps = Self::from_signals(&EnvSignals::from_env());
        log::debug!(
            "Detected terminal '{}', sixel support: {}",
            caps.terminal_name,
            caps.supports_sixel
        );
        caps
    }

    /// Capabilities implied by a forced override value, if it is recognised
    fn from_forced(value: &str) -> Option<Self> {
        let supports_sixel = match value.to_lowercase().as_str() {
            "sixel" | "on" => true,
            "none" | "off" => false,
            _ => return None,
        };

        Some(Self {
            supports_sixel,
            terminal_name: format!("forced-{}", value),
        })
    }

    pub fn from_signals(signals: &EnvSignals) -> Self {
        let term_program = signals.term_program.trim();
        let term = signals.term.trim();
        Self {
            supports_sixel: detect_sixel_support(&signals.wt_session, term_program, term),
            terminal_name: determine_terminal_name(term_program, term),
        }
    }

    pub fn supports_inline_images(&self) -> bool {
        self.supports_sixel
    }
}

fn detect_sixel_support(wt_session: &str, term_program: &str, term: &str) -> bool {
    // Windows Terminal
    if !wt_session.is_empty() {
        return true;
    }

    let term_program = term_program.to_lowercase();
    if ["iterm", "wezterm", "mintty", "contour"]
        .iter()
        .any(|name| term_program.contains(name))
    {
        return true;
    }

    let term = term.to_lowercase();
    ["sixel", "xterm", "mlterm", "foot"]
        .iter()
        .any(|name| term.contains(name))
}

fn determine_terminal_name(term_program: &str, term: &str) -> String {
    if !term_program.is_empty() {
        term_program.to_string()
    } else if !term.is_empty() {
        term.to_string()
    } else {
        "unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn signals(wt_session: &str, term_program: &str, term: &str) -> EnvSignals {
        EnvSignals {
            wt_session: wt_session.to_string(),
            term_program: term_program.to_string(),
            term: term.to_string(),
        }
    }

    #[test]
    fn test_signal_detection() {
        let cases = [
            ("windows terminal", signals("abc-123", "", ""), true),
            ("iterm2", signals("", "iTerm2", ""), true),
            ("iterm app", signals("", "iTerm.app", "xterm-256color"), true),
            ("wezterm", signals("", "WezTerm", ""), true),
            ("mintty", signals("", "mintty", ""), true),
            ("contour", signals("", "contour", ""), true),
            ("xterm", signals("", "", "xterm-256color"), true),
            ("foot", signals("", "", "foot"), true),
            ("mlterm", signals("", "", "mlterm"), true),
            ("explicit sixel", signals("", "", "vt340-sixel"), true),
            ("none", signals("", "", ""), false),
            ("dumb", signals("", "Apple_Terminal", "dumb"), false),
        ];

        for (name, env, expected) in cases {
            let caps = TerminalCapabilities::from_signals(&env);
            assert_eq!(caps.supports_sixel, expected, "case {}", name);
            assert_eq!(caps.supports_inline_images(), expected, "case {}", name);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let caps = TerminalCapabilities::from_signals(&signals("", " WezTerm\n", ""));
        assert!(caps.supports_sixel);
        assert_eq!(caps.terminal_name, "WezTerm");

        let caps = TerminalCapabilities::from_signals(&signals("", "  ", " foot "));
        assert!(caps.supports_sixel);
        assert_eq!(caps.terminal_name, "foot");

        let caps = TerminalCapabilities::from_signals(&signals("", " ", "\t"));
        assert!(!caps.supports_sixel);
        assert_eq!(caps.terminal_name, "unknown");
    }

    #[test]
    fn test_terminal_name() {
        assert_eq!(
            TerminalCapabilities::from_signals(&signals("", "WezTerm", "xterm")).terminal_name,
            "WezTerm"
        );
        assert_eq!(
            TerminalCapabilities::from_signals(&signals("", "", "foot")).terminal_name,
            "foot"
        );
        assert_eq!(
            TerminalCapabilities::from_signals(&signals("", "", "")).terminal_name,
            "unknown"
        );
    }

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let saved: Vec<_> = vars
            .iter()
            .map(|(key, _)| (key.to_string(), env::var(key).ok()))
            .collect();

        unsafe {
            for (key, value) in vars {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }

        f();

        unsafe {
            for (key, value) in saved {
                match value {
                    Some(v) => env::set_var(&key, v),
                    None => env::remove_var(&key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_detect_reads_environment() {
        with_env(
            &[
                ("MDOCX_FORCE_IMAGES", None),
                ("WT_SESSION", None),
                ("TERM_PROGRAM", Some("iTerm2")),
                ("TERM", Some("dumb")),
            ],
            || {
                let caps = TerminalCapabilities::detect();
                assert!(caps.supports_sixel);
                assert_eq!(caps.terminal_name, "iTerm2");
            },
        );
    }

    #[test]
    #[serial]
    fn test_detect_without_signals() {
        with_env(
            &[
                ("MDOCX_FORCE_IMAGES", None),
                ("WT_SESSION", None),
                ("TERM_PROGRAM", None),
                ("TERM", None),
            ],
            || {
                let caps = TerminalCapabilities::detect();
                assert!(!caps.supports_sixel);
                assert_eq!(caps.terminal_name, "unknown");
            },
        );
    }

    #[test]
    #[serial]
    fn test_force_images_on() {
        with_env(
            &[
                ("MDOCX_FORCE_IMAGES", Some("sixel")),
                ("WT_SESSION", None),
                ("TERM_PROGRAM", Some("unsupported")),
                ("TERM", Some("dumb")),
            ],
            || {
                let caps = TerminalCapabilities::detect();
                assert!(caps.supports_sixel);
                assert_eq!(caps.terminal_name, "forced-sixel");
            },
        );
    }

    #[test]
    #[serial]
    fn test_force_images_off() {
        with_env(
            &[
                ("MDOCX_FORCE_IMAGES", Some("off")),
                ("TERM", Some("xterm-256color")),
            ],
            || {
                let caps = TerminalCapabilities::detect();
                assert!(!caps.supports_sixel);
                assert_eq!(caps.terminal_name, "forced-off");
            },
        );
    }

    #[test]
    #[serial]
    fn test_unknown_force_value_falls_back() {
        with_env(
            &[
                ("MDOCX_FORCE_IMAGES", Some("kitty")),
                ("WT_SESSION", None),
                ("TERM_PROGRAM", None),
                ("TERM", Some("foot")),
            ],
            || {
                let caps = TerminalCapabilities::detect();
                assert!(caps.supports_sixel);
                assert_eq!(caps.terminal_name, "foot");
            },
        );
    }
}
