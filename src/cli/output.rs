//! CLI output formatting utilities.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one matching segment.
    pub fn segment(timestamp: &str, score: f64, text: &str, link: Option<&str>) {
        println!(
            "\n{} {} (score: {}%)",
            style(">>").green(),
            style(timestamp).cyan(),
            score
        );
        if !text.is_empty() {
            println!("   {}", text.replace('\n', " "));
        }
        if let Some(link) = link {
            println!("   {}", style(link).dim());
        }
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Build a YouTube watch link that jumps to `start_seconds`, when the source
/// URL is recognizably a YouTube video.
pub fn youtube_watch_link(url: &str, start_seconds: u32) -> Option<String> {
    let re = Regex::new(
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})",
    )
    .expect("Invalid regex");

    let video_id = re.captures(url.trim())?.get(1)?.as_str();
    Some(format!(
        "https://www.youtube.com/watch?v={video_id}&t={start_seconds}s"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_link() {
        assert_eq!(
            youtube_watch_link("https://www.youtube.com/watch?v=fNk_zzaMoSs", 95),
            Some("https://www.youtube.com/watch?v=fNk_zzaMoSs&t=95s".to_string())
        );
        assert_eq!(
            youtube_watch_link("https://youtu.be/fNk_zzaMoSs", 0),
            Some("https://www.youtube.com/watch?v=fNk_zzaMoSs&t=0s".to_string())
        );
        assert_eq!(youtube_watch_link("https://vimeo.com/12345", 10), None);
    }
}
