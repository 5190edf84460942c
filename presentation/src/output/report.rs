//! Console formatter for the failed read log

use colored::Colorize;

const RULE: &str = ".............................................................";

/// Formats failed read log lines for an operator
pub struct FailedReadReport {
    color: bool,
}

impl FailedReadReport {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the report, or `None` when there is nothing to show.
    ///
    /// Entries are printed verbatim, each framed by blank lines. With
    /// `pause` set, a reminder of the lookup syntax follows.
    pub fn render(&self, lines: &[String], pause: bool) -> Option<String> {
        if lines.is_empty() {
            return None;
        }

        let count = lines.len();
        let mut output = String::new();

        // Header
        output.push_str(&self.rule());
        output.push('\n');
        output.push_str(&self.header(&format!(
            "..({count}) Failed Reads DictWrapper..eg: ~g = DictWrapper::new(map, log)~"
        )));
        output.push('\n');
        output.push_str(&self.rule());
        output.push('\n');

        for line in lines {
            output.push('\n');
            output.push_str(line);
            output.push_str("\n\n");
        }

        output.push_str(&self.rule());
        output.push_str("\n\n");

        if pause {
            output.push_str(&self.header(&format!(
                "......ERROR: {count} use ~field!(g.name)~ ~glog~ or ~glog --no-pause~.........."
            )));
            output.push('\n');
            output.push_str(&self.header(
                "................. No quotes on field name! ..................",
            ));
            output.push_str("\n\n");
        }

        Some(output)
    }

    fn rule(&self) -> String {
        if self.color {
            RULE.dimmed().to_string()
        } else {
            RULE.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("-->> key{i} <<-  LINE:{i} main.rs Mon 10:00"))
            .collect()
    }

    #[test]
    fn test_empty_log_renders_nothing() {
        assert!(FailedReadReport::new(false).render(&[], true).is_none());
    }

    #[test]
    fn test_render_has_count_and_every_entry() {
        let lines = lines(3);
        let output = FailedReadReport::new(false).render(&lines, false).unwrap();

        assert!(output.contains("..(3) Failed Reads DictWrapper.."));
        for line in &lines {
            assert!(output.contains(&format!("\n{line}\n\n")));
        }
        assert!(!output.contains("No quotes on field name!"));
    }

    #[test]
    fn test_entries_keep_order() {
        let lines = lines(3);
        let output = FailedReadReport::new(false).render(&lines, false).unwrap();
        let first = output.find("key0").unwrap();
        let second = output.find("key1").unwrap();
        let third = output.find("key2").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_each_entry_framed_by_blank_lines() {
        let lines = lines(2);
        let output = FailedReadReport::new(false).render(&lines, false).unwrap();
        let body = format!("\n{}\n\n\n{}\n\n{RULE}", lines[0], lines[1]);
        assert!(output.contains(&body), "unexpected layout:\n{output}");
    }

    #[test]
    fn test_pause_adds_reminder() {
        let output = FailedReadReport::new(false).render(&lines(2), true).unwrap();
        assert!(output.contains("ERROR: 2 use ~field!(g.name)~"));
        assert!(output.contains("No quotes on field name!"));
    }

    #[test]
    fn test_colored_output_still_contains_entries() {
        let lines = lines(1);
        let output = FailedReadReport::new(true).render(&lines, true).unwrap();
        assert!(output.contains(&lines[0]));
        assert!(output.contains("Failed Reads DictWrapper"));
    }
}
