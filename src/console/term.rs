/// Real terminal console: `colored` styling, hand-drawn header panel,
/// `indicatif` progress bars, buffered stdin prompts.
use std::io::{self, Write};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::{Console, Progress};
use crate::countdown::Stage;
use crate::messages::Messages;

/// Horizontal padding inside the header panel.
const PANEL_PAD: usize = 1;

/// Terminal-backed `Console` implementation.
pub struct TermConsole;

impl TermConsole {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> io::Result<String> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_owned())
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn clear(&self) {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\x1b[2J\x1b[1;1H");
        let _ = out.flush();
        println!();
    }

    fn header(&self, messages: &Messages) {
        self.clear();
        let body = [messages.header_primary, messages.header_secondary];
        let content_w = body
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let inner_w = content_w + PANEL_PAD * 2;

        let title = messages.header_title;
        let subtitle = messages.header_subtitle;
        let top = border_with(inner_w, &title.bold().to_string(), title.chars().count(), '╭', '╮');
        let bottom = border_with(
            inner_w,
            &subtitle.italic().dimmed().to_string(),
            subtitle.chars().count(),
            '╰',
            '╯',
        );

        println!("{top}");
        println!("│{}│", " ".repeat(inner_w));
        for line in body {
            let fill = " ".repeat(content_w - line.chars().count());
            println!(
                "│{pad}{}{fill}{pad}│",
                line.italic(),
                pad = " ".repeat(PANEL_PAD)
            );
        }
        println!("│{}│", " ".repeat(inner_w));
        println!("{bottom}");
    }

    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn note(&self, text: &str) {
        println!("{}", text.italic());
    }

    fn success(&self, text: &str) {
        println!("{}", text.green().bold());
    }

    fn error(&self, text: &str) {
        eprintln!("{} {}", "✗".red().bold(), text.red());
    }

    fn blank(&self) {
        println!();
    }

    fn summary(&self, kettle: Option<&str>, brew: Option<&str>) {
        println!("{} {}", "Kettle Timer:".bold(), kettle.unwrap_or("none"));
        println!("{} {}", "Brew Timer:".bold(), brew.unwrap_or("none"));
    }

    fn wait_for_enter(&self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }

    fn ask_text(&self, prompt: &str) -> io::Result<String> {
        {
            let mut out = io::stdout().lock();
            let _ = write!(out, "{} ", prompt.bold());
            let _ = out.flush();
        }
        self.read_line()
    }

    fn ask_confirm(&self, prompt: &str, default_yes: bool) -> io::Result<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        {
            let mut out = io::stdout().lock();
            let _ = write!(out, "{} {} ", prompt.bold(), hint.dimmed());
            let _ = out.flush();
        }
        let answer = self.read_line()?.to_lowercase();
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer == "y" || answer == "yes")
    }

    fn progress(&self, stage: Stage, task: &str, total_secs: u64) -> Box<dyn Progress> {
        let color = match stage {
            Stage::Kettle => "red",
            Stage::Brew => "green",
        };
        let template =
            format!("{{spinner}} {{prefix}} [{{bar:40.{color}}}] {{pos}}/{{len}}s ({{percent}}%)");
        let style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_chars("🕐🕑🕒🕓🕔🕕🕖🕗🕘🕙🕚🕛")
            .progress_chars("█░");

        let bar = ProgressBar::new(total_secs);
        bar.set_style(style);
        bar.set_prefix(task.color(color).to_string());
        Box::new(TermProgress { bar })
    }
}

/// Top or bottom panel border with a centered styled label, as in
/// `╭── TEA TIME ──╮`. `label_w` is the label's display width (the styled
/// string carries escape codes that must not count).
fn border_with(inner_w: usize, styled_label: &str, label_w: usize, left: char, right: char) -> String {
    let deco = inner_w.saturating_sub(label_w + 2);
    let lead = deco / 2;
    format!(
        "{left}{} {styled_label} {}{right}",
        "─".repeat(lead),
        "─".repeat(deco - lead)
    )
}

/// `indicatif`-backed progress handle. Transient: `clear` removes the bar
/// from the screen instead of leaving a completed bar behind.
struct TermProgress {
    bar: ProgressBar,
}

impl Progress for TermProgress {
    fn set_elapsed(&self, secs: u64) {
        let capped = self.bar.length().map_or(secs, |len| secs.min(len));
        self.bar.set_position(capped);
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}
