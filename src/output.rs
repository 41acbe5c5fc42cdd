use owo_colors::OwoColorize;

/// コマンド結果のサマリー表示
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(installed: usize, skipped_files: usize) -> Self {
        match (installed, skipped_files) {
            (0, _) => Self {
                prefix: "•".yellow().to_string(),
                message: "No components installed".to_string(),
            },
            (n, 0) => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} component(s) installed", n.green()),
            },
            (n, s) => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} component(s) installed, {} existing file(s) skipped",
                    n.green(),
                    s.dimmed()
                ),
            },
        }
    }
}
