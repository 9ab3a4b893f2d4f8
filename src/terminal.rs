//! Terminal setup and restore
//!
//! `TerminalGuard` owns raw mode and the alternate screen. Each setup step
//! that succeeded is undone on restore, on drop, and from the panic hook.

use std::io::{self, stdout};

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

type Step = Box<dyn FnOnce() -> io::Result<()>>;

/// Raw mode plus alternate screen, undone on drop
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        let mut guard = Self {
            raw_mode: false,
            alternate_screen: false,
        };
        enable_raw_mode()?;
        guard.raw_mode = true;
        // On failure the guard drops here and leaves raw mode
        stdout().execute(EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    /// Undo every setup step still in effect; reports the first failure
    pub fn restore(&mut self) -> io::Result<()> {
        let mut steps: Vec<Step> = Vec::new();
        if std::mem::take(&mut self.raw_mode) {
            steps.push(Box::new(disable_raw_mode));
        }
        if std::mem::take(&mut self.alternate_screen) {
            steps.push(Box::new(|| stdout().execute(LeaveAlternateScreen).map(|_| ())));
        }
        run_all(steps)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

/// Run every step even after one fails; return the first error
fn run_all(steps: Vec<Step>) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step() {
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, fail: bool) -> Step {
        let log = Rc::clone(log);
        Box::new(move || {
            log.borrow_mut().push(name);
            if fail {
                Err(io::Error::other(name))
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn test_run_all_attempts_every_step_after_failure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let result = run_all(vec![
            recording(&log, "raw", true),
            recording(&log, "screen", false),
        ]);
        assert_eq!(*log.borrow(), vec!["raw", "screen"]);
        assert_eq!(result.unwrap_err().to_string(), "raw");
    }

    #[test]
    fn test_run_all_reports_first_error() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let result = run_all(vec![
            recording(&log, "raw", false),
            recording(&log, "screen", true),
            recording(&log, "cursor", true),
        ]);
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(result.unwrap_err().to_string(), "screen");
    }

    #[test]
    fn test_restore_skips_steps_that_never_ran() {
        let mut guard = TerminalGuard {
            raw_mode: false,
            alternate_screen: false,
        };
        assert!(guard.restore().is_ok());
        // Restoring twice is a no-op
        assert!(guard.restore().is_ok());
    }
}
