//! Word list command
//!
//! Prints the entries of the active word list.

use crate::console::Console;
use crate::core::WordEntry;
use colored::Colorize;
use std::io;

/// Print every entry as `word - hint`
///
/// # Errors
/// Returns any I/O error from the console.
pub fn list_words<C: Console + ?Sized>(console: &mut C, words: &[WordEntry]) -> io::Result<()> {
    console.write_line(
        &format!("{} words available", words.len())
            .bright_cyan()
            .bold()
            .to_string(),
    )?;
    for entry in words {
        console.write_line(&format!("  {} - {}", entry.word(), entry.hint()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn lists_each_entry() {
        let words = vec![
            WordEntry::new("lion", "Big cat").unwrap(),
            WordEntry::new("owl", "Hoots at night").unwrap(),
        ];
        let mut console = ScriptedConsole::default();
        list_words(&mut console, &words).unwrap();

        let output = console.output();
        assert_eq!(output.len(), 3);
        assert!(output[0].contains("2 words available"));
        assert_eq!(output[1], "  lion - Big cat");
        assert_eq!(output[2], "  owl - Hoots at night");
    }
}
