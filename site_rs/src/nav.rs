use serde::{Deserialize, Serialize};

/// Visibility of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Open,
    #[default]
    Closed,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    /// Flip the menu; the only user-driven transition.
    pub fn toggle(&mut self) {
        *self = match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        };
    }

    /// Following a link from the mobile menu closes it.
    pub fn close(&mut self) {
        *self = NavState::Closed;
    }

    /// Accessible label for the toggle button in the current state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            NavState::Open => "Close menu",
            NavState::Closed => "Open menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(NavState::default(), NavState::Closed);
        assert!(!NavState::default().is_open());
    }

    #[test]
    fn toggle_flips_unconditionally() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavState::Open;
        nav.close();
        nav.close();
        assert_eq!(nav, NavState::Closed);
    }

    #[test]
    fn label_follows_state() {
        assert_eq!(NavState::Closed.toggle_label(), "Open menu");
        assert_eq!(NavState::Open.toggle_label(), "Close menu");
    }
}
