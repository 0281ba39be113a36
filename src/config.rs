//! Fixed picker settings, built once per process

use std::sync::OnceLock;

static CONFIG: OnceLock<PickerConfig> = OnceLock::new();

/// Constants that shape the picker and its external commands
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Heading shown above the list
    pub title: &'static str,
    /// Total rows the list view occupies, including its chrome
    pub list_height: u16,
    /// Width used until the terminal reports its size
    pub default_width: u16,
    /// Binary looked up on PATH
    pub kubectl: &'static str,
    /// Message printed when the user quits without choosing
    pub farewell: &'static str,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: "Which Context to load?",
            list_height: 14,
            default_width: 20,
            kubectl: "kubectl",
            farewell: "Good bye",
        }
    }
}

/// Rows taken by the title, its spacer, the status line, pagination and help
const CHROME_ROWS: u16 = 5;

impl PickerConfig {
    /// Number of entries shown on one page
    pub fn per_page(&self) -> usize {
        usize::from(self.list_height.saturating_sub(CHROME_ROWS).max(1))
    }
}

/// Picker settings (initialized on first use)
pub fn load() -> &'static PickerConfig {
    CONFIG.get_or_init(PickerConfig::default)
}
