/// The UI panels a player can be looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Idle,
    Playing,
    Results,
}

impl View {
    pub const ALL: [View; 3] = [View::Idle, View::Playing, View::Results];

    /// Resolve a panel by name. `game` is accepted as an alias for `playing`.
    pub fn from_name(name: &str) -> Option<View> {
        match name.trim().to_ascii_lowercase().as_str() {
            "idle" => Some(View::Idle),
            "playing" | "game" => Some(View::Playing),
            "results" => Some(View::Results),
            _ => None,
        }
    }
}

/// Holds the single active view. There is no way to have two views active.
#[derive(Debug, Clone, Default)]
pub struct ViewSwitcher {
    active: View,
}

impl ViewSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active == view
    }

    pub fn activate_view(&mut self, view: View) {
        if self.active != view {
            tracing::debug!(from = %self.active, to = %view, "switching view");
        }
        self.active = view;
    }

    /// Switch by name. Unknown names leave the current view in place and
    /// return false.
    pub fn activate(&mut self, name: &str) -> bool {
        match View::from_name(name) {
            Some(view) => {
                self.activate_view(view);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let switcher = ViewSwitcher::new();
        assert_eq!(switcher.active(), View::Idle);
    }

    #[test]
    fn exactly_one_view_is_active() {
        let mut switcher = ViewSwitcher::new();

        for view in View::ALL {
            switcher.activate_view(view);
            let active: Vec<View> = View::ALL
                .into_iter()
                .filter(|v| switcher.is_active(*v))
                .collect();
            assert_eq!(active, vec![view]);
        }
    }

    #[test]
    fn activate_by_name() {
        let mut switcher = ViewSwitcher::new();

        assert!(switcher.activate("playing"));
        assert_eq!(switcher.active(), View::Playing);

        assert!(switcher.activate("Results"));
        assert_eq!(switcher.active(), View::Results);

        assert!(switcher.activate("game"));
        assert_eq!(switcher.active(), View::Playing);
    }

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut switcher = ViewSwitcher::new();
        switcher.activate_view(View::Results);

        assert!(!switcher.activate("scoreboard"));
        assert_eq!(switcher.active(), View::Results);
    }

    #[test]
    fn display_matches_names() {
        for view in View::ALL {
            assert_eq!(View::from_name(&view.to_string()), Some(view));
        }
    }
}
