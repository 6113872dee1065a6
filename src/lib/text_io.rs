//! Newline-delimited integer I/O.
//!
//! Sources and sinks for the pipeline: one integer per line, blank lines ignored,
//! surrounding whitespace trimmed. Also covers the directory side of batch mode:
//! enumerating `.txt` inputs and naming the sibling output directory.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{ChunkSortError, Result};

/// Extension (compared case-insensitively) of files picked up in batch mode.
pub const TEXT_EXTENSION: &str = "txt";

/// Buffer size for reading and writing integer files.
const IO_BUFFER_SIZE: usize = 64 * 1024;

/// Parses one integer per non-blank line from `reader`.
///
/// Parsing stops at the first malformed line; no partial result is returned.
///
/// # Errors
///
/// Returns [`ChunkSortError::MalformedInput`] naming `source_name` and the 1-based
/// line number of the first line that is not an integer, or
/// [`ChunkSortError::ResourceAccess`] if reading fails.
///
/// # Examples
///
/// ```
/// use chunksort_lib::text_io::parse_ints;
///
/// let values = parse_ints("3\n\n -1 \n+7\n".as_bytes(), "inline").unwrap();
/// assert_eq!(values, vec![3, -1, 7]);
///
/// assert!(parse_ints("1\nabc\n".as_bytes(), "inline").is_err());
/// ```
pub fn parse_ints<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ChunkSortError::io(source_name, "reading failed", e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<i64>().map_err(|_| ChunkSortError::MalformedInput {
            source_name: source_name.to_string(),
            line: idx + 1,
            text: trimmed.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Reads one integer per non-blank line from the file at `path`.
///
/// # Errors
///
/// Returns [`ChunkSortError::ResourceAccess`] if the file cannot be opened or read
/// and [`ChunkSortError::MalformedInput`] for the first non-integer line.
pub fn read_ints_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChunkSortError::io(path, "cannot open file", e))?;
    parse_ints(BufReader::with_capacity(IO_BUFFER_SIZE, file), &path.display().to_string())
}

/// Writes one integer per line to `writer`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_ints<W: Write>(writer: &mut W, values: &[i64]) -> std::io::Result<()> {
    for value in values {
        writeln!(writer, "{value}")?;
    }
    writer.flush()
}

/// Writes one integer per line to a new (or truncated) file at `path`.
///
/// # Errors
///
/// Returns [`ChunkSortError::ResourceAccess`] if the file cannot be created or
/// written.
pub fn write_ints_to_file<P: AsRef<Path>>(path: P, values: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ChunkSortError::io(path, "cannot create file", e))?;
    let mut writer = BufWriter::with_capacity(IO_BUFFER_SIZE, file);
    write_ints(&mut writer, values).map_err(|e| ChunkSortError::io(path, "write failed", e))
}

/// Lists the `.txt` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into and other extensions are skipped.
///
/// # Errors
///
/// Returns [`ChunkSortError::ResourceAccess`] if the directory cannot be read.
pub fn list_text_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries =
        fs::read_dir(dir).map_err(|e| ChunkSortError::io(dir, "cannot read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ChunkSortError::io(dir, "cannot read directory", e))?;
        let file_type =
            entry.file_type().map_err(|e| ChunkSortError::io(entry.path(), "cannot stat", e))?;
        if file_type.is_dir() {
            continue;
        }
        let path = entry.path();
        if has_text_extension(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_text_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case(TEXT_EXTENSION))
}

/// Identity fields baked into the batch-mode output directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputIdentity {
    /// First name; lowercased in the directory name.
    pub first_name: String,
    /// Surname; lowercased in the directory name.
    pub surname: String,
    /// Identifier, used verbatim.
    pub id: String,
}

impl OutputIdentity {
    /// Suffix appended to the input directory name, e.g. `sorted_ada_lovelace_42`.
    #[must_use]
    pub fn dir_suffix(&self) -> String {
        format!(
            "sorted_{}_{}_{}",
            self.first_name.to_lowercase(),
            self.surname.to_lowercase(),
            self.id
        )
    }
}

/// Path of the output directory for batch-sorting `input_dir`.
///
/// The directory is a sibling of `input_dir` named
/// `<input name>_sorted_<first>_<surname>_<id>`. Paths without a final component
/// (such as `.`) are resolved against the filesystem first.
///
/// # Errors
///
/// Returns [`ChunkSortError::ResourceAccess`] if `input_dir` has no name and cannot
/// be canonicalized, or names the filesystem root.
///
/// # Examples
///
/// ```
/// use chunksort_lib::text_io::{OutputIdentity, sorted_output_dir};
/// use std::path::Path;
///
/// let identity = OutputIdentity {
///     first_name: "Ada".to_string(),
///     surname: "Lovelace".to_string(),
///     id: "42".to_string(),
/// };
/// let out = sorted_output_dir(Path::new("data/incoming/"), &identity).unwrap();
/// assert_eq!(out, Path::new("data/incoming_sorted_ada_lovelace_42"));
/// ```
pub fn sorted_output_dir(input_dir: &Path, identity: &OutputIdentity) -> Result<PathBuf> {
    let resolved;
    let dir = if input_dir.file_name().is_some() {
        input_dir
    } else {
        resolved = fs::canonicalize(input_dir)
            .map_err(|e| ChunkSortError::io(input_dir, "cannot resolve directory", e))?;
        resolved.as_path()
    };

    let name = dir.file_name().ok_or_else(|| ChunkSortError::ResourceAccess {
        path: input_dir.to_path_buf(),
        reason: "directory has no name".to_string(),
        source: None,
    })?;
    let out_name = format!("{}_{}", name.to_string_lossy(), identity.dir_suffix());
    Ok(dir.parent().unwrap_or_else(|| Path::new("")).join(out_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn identity() -> OutputIdentity {
        OutputIdentity {
            first_name: "Grace".to_string(),
            surname: "HOPPER".to_string(),
            id: "ID7".to_string(),
        }
    }

    #[rstest]
    #[case("1\n2\n3\n", vec![1, 2, 3])]
    #[case("  10 \n\n\t-4\n", vec![10, -4])]
    #[case("+5\n", vec![5])]
    #[case("", vec![])]
    #[case("\n\n   \n", vec![])]
    #[case("7\r\n8\r\n", vec![7, 8])]
    fn test_parse_ints_valid(#[case] input: &str, #[case] expected: Vec<i64>) {
        assert_eq!(parse_ints(input.as_bytes(), "test").unwrap(), expected);
    }

    #[rstest]
    #[case("1\nabc\n3\n", 2, "abc")]
    #[case("1.5\n", 1, "1.5")]
    #[case("\n\n 4 4\n", 3, "4 4")]
    #[case("99999999999999999999\n", 1, "99999999999999999999")]
    fn test_parse_ints_malformed(
        #[case] input: &str,
        #[case] expected_line: usize,
        #[case] expected_text: &str,
    ) {
        match parse_ints(input.as_bytes(), "test") {
            Err(ChunkSortError::MalformedInput { source_name, line, text }) => {
                assert_eq!(source_name, "test");
                assert_eq!(line, expected_line);
                assert_eq!(text, expected_text);
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_ints_from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ChunkSortError::ResourceAccess { .. }));
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_ints_to_file(&path, &[-3, 0, 12]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "-3\n0\n12\n");
        assert_eq!(read_ints_from_file(&path).unwrap(), vec![-3, 0, 12]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let err = write_ints_to_file(dir.path().join("nope/out.txt"), &[1]).unwrap_err();
        assert!(matches!(err, ChunkSortError::ResourceAccess { .. }));
    }

    #[test]
    fn test_list_text_files() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.TXT", "notes.md", "c.txt.bak", "noext"] {
            fs::write(dir.path().join(name), "1\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("nested.txt").join("inner.txt"), "1\n").unwrap();

        let names: Vec<String> = list_text_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_list_text_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_text_files(dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_dir_suffix() {
        assert_eq!(identity().dir_suffix(), "sorted_grace_hopper_ID7");
    }

    #[rstest]
    #[case("incoming", "incoming_sorted_grace_hopper_ID7")]
    #[case("incoming/", "incoming_sorted_grace_hopper_ID7")]
    #[case("data/incoming", "data/incoming_sorted_grace_hopper_ID7")]
    #[case("/tmp/data/in", "/tmp/data/in_sorted_grace_hopper_ID7")]
    fn test_sorted_output_dir(#[case] input: &str, #[case] expected: &str) {
        let out = sorted_output_dir(Path::new(input), &identity()).unwrap();
        assert_eq!(out, PathBuf::from(expected));
    }

    #[test]
    fn test_sorted_output_dir_resolves_dot() {
        let out = sorted_output_dir(Path::new("."), &identity()).unwrap();
        let cwd = fs::canonicalize(".").unwrap();
        let expected = cwd.parent().unwrap().join(format!(
            "{}_sorted_grace_hopper_ID7",
            cwd.file_name().unwrap().to_string_lossy()
        ));
        assert_eq!(out, expected);
    }
}
