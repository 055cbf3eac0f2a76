/// User-facing message catalog.
///
/// Built once in `main` and passed by reference to display code. The
/// catalog is plain text; styling (color, emphasis) is applied by the
/// terminal console, not stored here.
use crate::countdown::Stage;

/// Every fixed string the program prints.
#[derive(Debug, Clone)]
pub struct Messages {
    pub header_title: &'static str,
    pub header_subtitle: &'static str,
    pub header_primary: &'static str,
    pub header_secondary: &'static str,
    pub no_timers: &'static str,
    pub kettle_prompt: &'static str,
    pub brew_prompt: &'static str,
    pub kettle_task: &'static str,
    pub brew_task: &'static str,
    pub kettle_boiled: &'static str,
    pub brew_confirm: &'static str,
    pub tea_brewed: &'static str,
    pub brew_cancelled: &'static str,
    pub invalid_kettle_format: &'static str,
    pub invalid_brew_format: &'static str,
}

impl Messages {
    /// The fixed "invalid format" line for the stage that failed to parse.
    #[must_use]
    pub fn invalid_format(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Kettle => self.invalid_kettle_format,
            Stage::Brew => self.invalid_brew_format,
        }
    }

    /// Progress-bar task description for a stage.
    #[must_use]
    pub fn task(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Kettle => self.kettle_task,
            Stage::Brew => self.brew_task,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            header_title: "TEA TIME",
            header_subtitle: "Lovingly crafted for tea drinkers",
            header_primary: "It's time to brew some tea!",
            header_secondary: "Get your kettle boiling and press Enter to continue the process!",
            no_timers: "No timers were provided...\n\nPress Enter to set timers:",
            kettle_prompt: "How long would you like to set your kettle timer for? (3m)",
            brew_prompt: "How long would you like to brew your tea for? (Leave blank if you don't want to brew)",
            kettle_task: "Kettle boiling...",
            brew_task: "Tea brewing...",
            kettle_boiled: "Kettle has now boiled (hopefully)!",
            brew_confirm: "Are you ready to brew?",
            tea_brewed: "Your tea has brewed!\nPress Enter once more and then enjoy your beverage!",
            brew_cancelled: "Tea brewing cancelled. Press Enter to close the program.",
            invalid_kettle_format: "Invalid time specified! Use \"-k 1m\" format",
            invalid_brew_format: "Invalid time specified! Use \"-b 1m\" format",
        }
    }
}
