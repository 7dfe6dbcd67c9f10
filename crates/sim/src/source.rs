//! Reading DNA from text and FASTA files.
//!
//! A source file is either plain text (one or more lines of bases) or FASTA.
//! Lines starting with `>` and blank lines are skipped; all other lines are
//! trimmed and concatenated. Every remaining character must be a base
//! (case-insensitive), otherwise the read fails with `InvalidSymbol` at the
//! offending position within the concatenated bases.

use crate::base::{Nucleotide, Sequence};
use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse DNA from any buffered reader.
pub fn read_dna_from<R: BufRead>(reader: R) -> Result<Vec<Nucleotide>> {
    let mut bases = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('>') {
            continue;
        }

        for c in line.chars() {
            let base = u8::try_from(c)
                .ok()
                .and_then(Nucleotide::from_ascii)
                .ok_or(Error::InvalidSymbol {
                    symbol: c,
                    position: bases.len(),
                })?;
            bases.push(base);
        }
    }

    Ok(bases)
}

/// Parse DNA held in memory.
pub fn parse_dna(text: &str) -> Result<Vec<Nucleotide>> {
    read_dna_from(text.as_bytes())
}

/// Read the DNA stored at `path`.
pub fn read_dna(path: impl AsRef<Path>) -> Result<Vec<Nucleotide>> {
    let file = File::open(path)?;
    read_dna_from(BufReader::new(file))
}

/// Read the DNA stored at `path` and terminate it with the sentinel, ready
/// for the repeat-length engine.
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Sequence> {
    read_dna(path).map(Sequence::terminated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_plain_lines() {
        let bases = parse_dna("ACG\nTT\n\nga\n").unwrap();
        let text: String = bases.iter().map(|b| b.to_char()).collect();
        assert_eq!(text, "ACGTTGA");
    }

    #[test]
    fn test_parse_skips_fasta_headers() {
        let bases = parse_dna(">chr1 test\nAC\n>chr2\nGT\r\n").unwrap();
        assert_eq!(bases.len(), 4);
    }

    #[test]
    fn test_parse_rejects_ambiguity_code() {
        let err = parse_dna("ACGT\nACNT\n").unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol { symbol: 'N', position: 6 }));
    }

    #[test]
    fn test_parse_rejects_sentinel_in_source() {
        let err = parse_dna("AC$").unwrap_err();
        assert!(matches!(err, Error::InvalidSymbol { symbol: '$', position: 2 }));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_dna("").unwrap().is_empty());
    }

    #[test]
    fn test_read_sequence_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">sample\nACGG\nCGGC\nTTC\n").unwrap();
        let seq = read_sequence(file.path()).unwrap();
        assert_eq!(seq.to_string(), "ACGGCGGCTTC$");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_dna("/nonexistent/dna.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
