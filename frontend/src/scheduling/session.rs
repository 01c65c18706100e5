/// Bookkeeping for one popup: whether it is shown and whether the widget has
/// already been initialized during the current showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetSession {
    shown: bool,
    initialized: bool,
}

impl WidgetSession {
    pub fn show(&mut self) {
        if !self.shown {
            self.shown = true;
            self.initialized = false;
        }
    }

    pub fn hide(&mut self) {
        self.shown = false;
        self.initialized = false;
    }

    /// Returns true exactly once per showing, the first time the provider is ready.
    pub fn try_initialize(&mut self, provider_ready: bool) -> bool {
        if self.shown && provider_ready && !self.initialized {
            self.initialized = true;
            return true;
        }
        false
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_session_never_initializes() {
        let mut session = WidgetSession::default();
        assert!(!session.try_initialize(true));
        assert!(!session.is_initialized());
    }

    #[test]
    fn initializes_once_per_showing() {
        let mut session = WidgetSession::default();
        session.show();
        assert!(session.try_initialize(true));
        assert!(!session.try_initialize(true));

        // Repeated show while already shown is not a new transition.
        session.show();
        assert!(!session.try_initialize(true));

        session.hide();
        session.show();
        assert!(session.try_initialize(true));
    }

    #[test]
    fn waits_for_provider() {
        let mut session = WidgetSession::default();
        session.show();
        assert!(!session.try_initialize(false));
        assert!(session.is_shown());
        assert!(session.try_initialize(true));
    }

    #[test]
    fn hide_clears_state() {
        let mut session = WidgetSession::default();
        session.show();
        session.try_initialize(true);
        session.hide();
        assert_eq!(session, WidgetSession::default());
    }
}
