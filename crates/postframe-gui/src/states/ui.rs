use std::fmt;
use std::path::PathBuf;

/// Which editor the window is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Poster,
    Grade,
}

impl fmt::Display for EditorTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorTab::Poster => write!(f, "Poster"),
            EditorTab::Grade => write!(f, "Grade"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub tab: EditorTab,

    /// Decodes in flight, per tab.
    pub poster_loading: bool,
    pub grade_loading: bool,

    pub font_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn is_loading(&self, tab: EditorTab) -> bool {
        match tab {
            EditorTab::Poster => self.poster_loading,
            EditorTab::Grade => self.grade_loading,
        }
    }

    pub fn set_loading(&mut self, tab: EditorTab, loading: bool) {
        match tab {
            EditorTab::Poster => self.poster_loading = loading,
            EditorTab::Grade => self.grade_loading = loading,
        }
    }
}
