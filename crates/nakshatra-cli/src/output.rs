//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::report::{ComparisonReport, Explanation, RankingRow, ScoreReport};
use colored::*;
use nakshatra_catalog::records::question_to_record;
use nakshatra_catalog::ValidationResult;
use nakshatra_domain::Question;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a scored response set.
    pub fn format_score(&self, report: &ScoreReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.token.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Axis", "Score", "Label"]);
                for axis in &report.axes {
                    builder.push_record([axis.name.clone(), format!("{:+.2}", axis.value), axis.label.clone()]);
                }

                let mut out = self.table(builder);
                out.push('\n');
                out.push_str(&format!("Lean: {}\n", self.colorize(&report.lean, "cyan")));
                out.push_str(&format!(
                    "Answered: {}/{} ({}%)\n",
                    report.answered, report.total, report.completion
                ));
                if !report.complete {
                    out.push_str(&self.warning("Incomplete: unanswered axes score as neutral"));
                    out.push('\n');
                }
                out.push_str(&format!("Share: {}", report.token));
                Ok(out)
            }
        }
    }

    /// Format a ranked comparison.
    pub fn format_ranking(&self, rows: &[RankingRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No entities to compare.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Name", "Short", "Distance", "Match", "Verdict"]);
                for row in rows {
                    builder.push_record([
                        row.rank.to_string(),
                        row.name.clone(),
                        row.short_name.clone().unwrap_or_default(),
                        format!("{:.3}", row.distance),
                        format!("{}%", row.match_score),
                        row.band.clone(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a detailed comparison against one target.
    pub fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(format!("{} {}", report.id, report.match_score)),
            OutputFormat::Table => Ok(self.comparison_table("Compared with:", report)),
        }
    }

    /// Format a full explanation.
    pub fn format_explanation(&self, explanation: &Explanation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(explanation)?),
            OutputFormat::Quiet => Ok(explanation
                .axes
                .iter()
                .map(|a| a.label.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut out = format!(
                    "{} {}\n",
                    self.colorize("Political lean:", "cyan"),
                    explanation.lean
                );

                for axis in &explanation.axes {
                    out.push('\n');
                    out.push_str(&format!(
                        "{} {:+.2}  {}\n",
                        self.colorize(&axis.name, "magenta"),
                        axis.value,
                        axis.label
                    ));
                    out.push_str(&format!("  {}\n", axis.description));
                    for example in &axis.examples {
                        out.push_str(&format!("  • {}\n", example));
                    }
                    if let Some(party) = &axis.closest_party {
                        out.push_str(&format!("  Closest party: {} ({:+.2})\n", party.name, party.value));
                    }
                    if let Some(leader) = &axis.closest_leader {
                        out.push_str(&format!("  Closest leader: {} ({:+.2})\n", leader.name, leader.value));
                    }
                    if let Some(spread) = &axis.party_spread {
                        out.push_str(&format!(
                            "  Party range: {} ({:+.2}) to {} ({:+.2})\n",
                            spread.min.name, spread.min.value, spread.max.name, spread.max.value
                        ));
                    }
                }

                if let Some(report) = &explanation.closest_party {
                    out.push('\n');
                    out.push_str(&self.comparison_table("Closest match:", report));
                    out.push('\n');
                }
                out.push_str(&format!("\nShare: {}", explanation.token));
                Ok(out)
            }
        }
    }

    /// Format the question catalog.
    pub fn format_questions(&self, questions: &[&Question]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<_> = questions.iter().map(|q| question_to_record(q)).collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            OutputFormat::Quiet => Ok(questions
                .iter()
                .map(|q| q.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if questions.is_empty() {
                    return Ok(self.colorize("No questions found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Axis", "Rev", "Weight", "Statement"]);
                for q in questions {
                    builder.push_record([
                        q.id.to_string(),
                        q.axis.to_string(),
                        if q.reverse { "yes".to_string() } else { String::new() },
                        format!("{}", q.weight),
                        q.text.clone().unwrap_or_default(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a validation result.
    pub fn format_validation(&self, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "accepted": result.is_accepted(),
                    "rejections": result.reasons.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    "warnings": result.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(if result.is_accepted() { "ok" } else { "rejected" }.to_string()),
            OutputFormat::Table => {
                let mut lines = Vec::new();
                for reason in &result.reasons {
                    lines.push(self.error(&reason.to_string()));
                }
                for warning in &result.warnings {
                    lines.push(self.warning(&warning.to_string()));
                }
                lines.push(if result.is_accepted() {
                    self.success("Catalog accepted")
                } else {
                    self.error(&format!("Catalog rejected ({} problem(s))", result.reasons.len()))
                });
                Ok(lines.join("\n"))
            }
        }
    }

    fn comparison_table(&self, heading: &str, report: &ComparisonReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Axis", "You", report.name.as_str(), "", "Alignment", "Match"]);
        for row in &report.alignments {
            builder.push_record([
                row.name.clone(),
                format!("{:+.2}", row.user),
                format!("{:+.2}", row.target),
                self.symbol(row.symbol),
                row.level.clone(),
                format!("{}%", row.match_percent),
            ]);
        }

        let mut out = format!(
            "{} {} ({}%, {})\n",
            self.colorize(heading, "cyan"),
            report.name,
            report.match_score,
            report.verdict
        );
        if !report.ideology.is_empty() {
            out.push_str(&format!("Ideology: {}\n", report.ideology.join(" · ")));
        }
        if let Some(party) = &report.party {
            out.push_str(&format!("Party: {}\n", party));
        }
        if !report.leaders.is_empty() {
            out.push_str(&format!("Leaders: {}\n", report.leaders.join(", ")));
        }
        out.push_str(&self.table(builder));
        for row in &report.alignments {
            out.push_str(&format!("\n  {}", row.sentence));
        }
        if !report.key_policies.is_empty() {
            out.push_str("\n\nKey policies:");
            for policy in &report.key_policies {
                out.push_str(&format!("\n  • {}", policy));
            }
        }
        out
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn symbol(&self, symbol: &str) -> String {
        match symbol {
            "✓" => self.colorize(symbol, "green"),
            "~" => self.colorize(symbol, "yellow"),
            _ => self.colorize(symbol, "red"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}
