// Keyboard event handling
//
// This module contains the keyboard event handler that processes
// user input and updates the dashboard accordingly.

use super::{Dashboard, Period};
use crossterm::event::KeyCode;

/// Handle keyboard events and update dashboard state
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - Quit the application
/// - `1`..`4` - Select reporting period (7d, 30d, 90d, 1y)
/// - `Left` / `Right` - Cycle reporting period
/// - `r`, `R` - Refresh metrics now
/// - `a`, `A`, `Space` - Stop / resume the particle animation
pub fn handle_key_event(app: &mut Dashboard, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        // Period buttons: each press refreshes, even on the active period
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(period) = Period::from_digit(c) {
                app.select_period(period);
            }
            true
        }
        KeyCode::Right => {
            app.select_next_period();
            true
        }
        KeyCode::Left => {
            app.select_previous_period();
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh();
            true
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char(' ') => {
            app.toggle_animation();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FieldConfig, RefreshConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn dashboard() -> Dashboard {
        Dashboard::with_parts(
            100,
            30,
            FieldConfig::default(),
            RefreshConfig::default(),
            StdRng::seed_from_u64(1),
            Instant::now(),
        )
    }

    #[test]
    fn test_quit_keys() {
        let mut app = dashboard();

        // Test 'q' key
        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        // Reset and test 'Q' key
        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        // Reset and test Esc key
        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_digit_keys_select_period_and_refresh() {
        let mut app = dashboard();

        assert!(handle_key_event(&mut app, KeyCode::Char('1')));
        assert_eq!(app.period(), Period::Week);
        assert_eq!(app.metrics().refresh_count(), 1);

        handle_key_event(&mut app, KeyCode::Char('4'));
        assert_eq!(app.period(), Period::Year);

        // Same button again: still a refresh
        handle_key_event(&mut app, KeyCode::Char('4'));
        assert_eq!(app.metrics().refresh_count(), 3);
    }

    #[test]
    fn test_arrow_keys_cycle_period() {
        let mut app = dashboard();
        handle_key_event(&mut app, KeyCode::Right);
        assert_eq!(app.period(), Period::Quarter);
        handle_key_event(&mut app, KeyCode::Left);
        handle_key_event(&mut app, KeyCode::Left);
        assert_eq!(app.period(), Period::Week);
    }

    #[test]
    fn test_refresh_key() {
        let mut app = dashboard();
        handle_key_event(&mut app, KeyCode::Char('r'));
        handle_key_event(&mut app, KeyCode::Char('R'));
        assert_eq!(app.metrics().refresh_count(), 2);
        assert_eq!(app.period(), Period::Month);
    }

    #[test]
    fn test_toggle_animation() {
        let mut app = dashboard();

        // Default: animation running
        assert!(app.field().is_running());

        // Toggle off
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert!(!app.field().is_running());

        // Toggle on
        handle_key_event(&mut app, KeyCode::Char(' '));
        assert!(app.field().is_running());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = dashboard();
        assert!(handle_key_event(&mut app, KeyCode::Char('5')));
        assert!(handle_key_event(&mut app, KeyCode::Tab));
        assert_eq!(app.metrics().refresh_count(), 0);
        assert!(app.running);
    }
}
