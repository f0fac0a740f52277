use std::io::{self, Write};

/// Exit status when every tracked file is text or in LFS.
pub const EXIT_CLEAN: i32 = 0;

/// Exit status when at least one untracked binary was found.
pub const EXIT_VIOLATIONS: i32 = 1;

/// Outcome of a scan: the untracked binaries, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<String>,
}

impl Report {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_CLEAN
        } else {
            EXIT_VIOLATIONS
        }
    }

    pub fn write_success(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "✅ All committed files are either plain text or tracked by LFS."
        )
    }

    /// Violation list followed by instructions for fixing it
    pub fn write_failure(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "❌ ERROR: Found binary files not tracked by LFS:")?;
        for path in &self.violations {
            writeln!(out, "  • {}", path)?;
        }

        writeln!(out, "\n👉 To fix each file individually, run:")?;
        writeln!(out, "    git lfs track \"<file>\"")?;
        writeln!(out, "    git add .gitattributes \"<file>\"")?;
        writeln!(out, "    git commit -m \"Track <file> with Git LFS\"")?;

        writeln!(out, "\n👉 To track all files by extension (e.g. PNG), run:")?;
        writeln!(out, "    git lfs track \"*.png\"")?;

        Ok(())
    }

    /// Print to stdout on success or stderr on failure, and return the exit code.
    pub fn emit(&self) -> io::Result<i32> {
        if self.is_clean() {
            self.write_success(&mut io::stdout().lock())?;
        } else {
            self.write_failure(&mut io::stderr().lock())?;
        }
        Ok(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_failure(report: &Report) -> String {
        let mut buf = Vec::new();
        report.write_failure(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_clean_report() {
        let report = Report::default();
        assert!(report.is_clean());
        assert_eq!(report.exit_code(), EXIT_CLEAN);

        let mut buf = Vec::new();
        report.write_success(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "✅ All committed files are either plain text or tracked by LFS.\n"
        );
    }

    #[test]
    fn test_failure_output() {
        let report = Report::new(vec!["logo.png".into(), "docs/diagram.pdf".into()]);
        assert_eq!(report.exit_code(), EXIT_VIOLATIONS);

        let expected = "\
❌ ERROR: Found binary files not tracked by LFS:
  • logo.png
  • docs/diagram.pdf

👉 To fix each file individually, run:
    git lfs track \"<file>\"
    git add .gitattributes \"<file>\"
    git commit -m \"Track <file> with Git LFS\"

👉 To track all files by extension (e.g. PNG), run:
    git lfs track \"*.png\"
";
        assert_eq!(render_failure(&report), expected);
    }

    #[test]
    fn test_failure_keeps_order() {
        let report = Report::new(vec!["z.bin".into(), "a.bin".into()]);
        let output = render_failure(&report);

        let z = output.find("• z.bin").unwrap();
        let a = output.find("• a.bin").unwrap();
        assert!(z < a);
    }
}
