//! Spot-check report over a part-number listing

use std::fmt;

use crate::api::PartNumberEntry;

/// Longest model text shown in the sample before it is cut
pub const MODEL_DISPLAY_LIMIT: usize = 50;

/// Placeholder for a missing model or description
pub const MISSING: &str = "N/A";

/// One line of the sample listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleLine {
    pub part_number: String,
    pub model: String,
}

/// What the verifier found
#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub total: usize,
    /// Requested sample size; the sample itself may be shorter
    pub sample_size: usize,
    pub sample: Vec<SampleLine>,
    pub target: String,
    pub found: Option<PartNumberEntry>,
}

impl VerificationReport {
    /// Build the report from a full listing
    pub fn build(entries: &[PartNumberEntry], sample_size: usize, target: &str) -> Self {
        let sample = entries
            .iter()
            .take(sample_size)
            .map(|entry| SampleLine {
                part_number: entry.part_number.clone(),
                model: format_model(entry.model.as_deref()),
            })
            .collect();

        Self {
            total: entries.len(),
            sample_size,
            sample,
            target: target.to_string(),
            found: find_part_number(entries, target).cloned(),
        }
    }

    pub fn exists(&self) -> bool {
        self.found.is_some()
    }
}

/// Model text for the sample: placeholder when missing, cut past the limit
pub fn format_model(model: Option<&str>) -> String {
    match model {
        None | Some("") => MISSING.to_string(),
        Some(model) if model.chars().count() > MODEL_DISPLAY_LIMIT => {
            let cut: String = model.chars().take(MODEL_DISPLAY_LIMIT).collect();
            format!("{}...", cut)
        }
        Some(model) => model.to_string(),
    }
}

/// First entry whose part number matches exactly
pub fn find_part_number<'a>(
    entries: &'a [PartNumberEntry],
    target: &str,
) -> Option<&'a PartNumberEntry> {
    entries.iter().find(|entry| entry.part_number == target)
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total records: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "First {} part numbers:", self.sample_size)?;
        for line in &self.sample {
            writeln!(f, "  - {}: {}", line.part_number, line.model)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Does {} exist? {}",
            self.target,
            if self.exists() { "Yes" } else { "No" }
        )?;
        if let Some(entry) = &self.found {
            writeln!(
                f,
                "  Description: {}",
                entry.description.as_deref().unwrap_or(MISSING)
            )?;
            writeln!(f, "  Model: {}", entry.model.as_deref().unwrap_or(MISSING))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<PartNumberEntry> {
        vec![
            PartNumberEntry::new("ABQ74480101").with_model("32LM570BPUA"),
            PartNumberEntry::new("EBR80757417")
                .with_model("OLED65C1PUB")
                .with_description("MAIN BOARD"),
            PartNumberEntry::new("EAX69083603"),
        ]
    }

    #[test]
    fn test_format_model() {
        assert_eq!(format_model(None), "N/A");
        assert_eq!(format_model(Some("")), "N/A");
        assert_eq!(format_model(Some("43UN7000PUB")), "43UN7000PUB");

        let exact = "M".repeat(50);
        assert_eq!(format_model(Some(&exact)), exact);

        let long = format!("{}{}", "A".repeat(50), "TAIL");
        assert_eq!(format_model(Some(&long)), format!("{}...", "A".repeat(50)));
    }

    #[test]
    fn test_format_model_counts_characters() {
        let long = "é".repeat(51);
        assert_eq!(format_model(Some(&long)), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn test_report_with_target() {
        let report = VerificationReport::build(&entries(), 10, "EBR80757417");

        assert_eq!(report.total, 3);
        assert_eq!(report.sample.len(), 3);
        assert_eq!(report.sample_size, 10);
        assert_eq!(report.sample[2].model, "N/A");
        assert!(report.exists());

        let text = report.to_string();
        assert!(text.contains("First 10 part numbers:"));
        assert!(text.contains("Does EBR80757417 exist? Yes"));
        assert!(text.contains("  Description: MAIN BOARD"));
        assert!(text.contains("  Model: OLED65C1PUB"));
    }

    #[test]
    fn test_report_without_target() {
        let listing: Vec<_> = entries()
            .into_iter()
            .filter(|e| e.part_number != "EBR80757417")
            .collect();

        let report = VerificationReport::build(&listing, 10, "EBR80757417");

        assert!(!report.exists());
        let text = report.to_string();
        assert!(text.contains("Does EBR80757417 exist? No"));
        assert!(!text.contains("Description:"));
        assert!(!text.contains("Model:"));
    }

    #[test]
    fn test_sample_is_bounded() {
        let listing: Vec<_> = (0..25)
            .map(|i| PartNumberEntry::new(format!("PN{:03}", i)))
            .collect();

        let report = VerificationReport::build(&listing, 10, "EBR80757417");

        assert_eq!(report.total, 25);
        assert_eq!(report.sample.len(), 10);
        assert_eq!(report.sample[9].part_number, "PN009");
        assert!(report.to_string().contains("First 10 part numbers:"));
    }
}
