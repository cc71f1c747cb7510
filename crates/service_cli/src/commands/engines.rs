//! Engines command implementation
//!
//! Lists the selectable engines.

use std::io::Write;

use crate::engine::EngineKind;
use crate::Result;

/// Run the engines command
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<20} {:>4}  {:<8}  DESCRIPTION", "ENGINE", "BITS", "SEEDABLE")?;
    for kind in EngineKind::ALL {
        writeln!(
            out,
            "{:<20} {:>4}  {:<8}  {}",
            kind.name(),
            kind.word_bits(),
            if kind.is_seedable() { "yes" } else { "no" },
            kind.description()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::capture;

    #[test]
    fn test_lists_every_engine() {
        let lines = capture(|out| run(out));
        assert_eq!(lines.len(), EngineKind::ALL.len() + 1);
        assert!(lines[0].starts_with("ENGINE"));
        assert!(lines.iter().any(|l| l.starts_with("lcg32") && l.contains(" 32 ")));
        assert!(lines.iter().any(|l| l.starts_with("entropy") && l.contains(" no ")));
    }
}
