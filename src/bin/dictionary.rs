//! Interactive dictionary lookup.
//!
//! Loads a word list into a `CharTrie` and reads the terminal one key at a
//! time, reporting after every key whether the text typed so far is a word and
//! whether it can still grow into one. Text that cannot is dropped and typing
//! starts over. Any control character exits.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flate2::read::GzDecoder;
use prefixtrie::CharTrie;

#[derive(Parser)]
#[command(name = "dictionary")]
#[command(about = "Type a word and watch the trie follow along", long_about = None)]
struct Cli {
    /// Word list, one word per line; gzip-compressed if it ends in `.gz`
    #[arg(long, default_value = "words_alpha.txt.gz")]
    words: PathBuf,

    /// Only report complete words
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

/// Source of single key presses.
trait KeySource {
    /// Reads one character, or `None` at end of input.
    fn read_key(&mut self) -> io::Result<Option<char>>;
}

/// Reads keys from standard input, switching the terminal to raw mode for
/// the duration of each read.
struct Terminal {
    stdin: io::Stdin,
}

impl Terminal {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        let _raw = raw_mode::RawMode::enter()?;
        match self.stdin.lock().read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

impl KeySource for Terminal {
    fn read_key(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(first);
        let mut buf = vec![first];
        while buf.len() < width {
            match self.read_byte()? {
                Some(byte) => buf.push(byte),
                None => break,
            }
        }
        Ok(std::str::from_utf8(&buf).ok().and_then(|s| s.chars().next()))
    }
}

/// Number of bytes in the UTF-8 sequence that starts with `first`.
fn utf8_width(first: u8) -> usize {
    match first {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        // ASCII, or a byte that can not start a character.
        _ => 1,
    }
}

#[cfg(unix)]
mod raw_mode {
    use std::io;
    use std::mem::MaybeUninit;

    /// Raw terminal mode on standard input, restored on drop.
    pub struct RawMode {
        saved: Option<libc::termios>,
    }

    impl RawMode {
        pub fn enter() -> io::Result<Self> {
            let mut attrs = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: `attrs` is a valid out-pointer for `tcgetattr`.
            if unsafe { libc::tcgetattr(libc::STDIN_FILENO, attrs.as_mut_ptr()) } != 0 {
                // Not a terminal (e.g. piped input): read as is.
                return Ok(Self { saved: None });
            }
            // SAFETY: `tcgetattr` succeeded and initialised `attrs`.
            let saved = unsafe { attrs.assume_init() };
            let mut raw = saved;
            // SAFETY: `raw` is a valid, initialised `termios`.
            unsafe { libc::cfmakeraw(&mut raw) };
            // SAFETY: `raw` is a valid `termios` for standard input.
            if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSADRAIN, &raw) } != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(Self { saved: Some(saved) })
        }
    }

    impl Drop for RawMode {
        fn drop(&mut self) {
            if let Some(saved) = self.saved.as_ref() {
                // SAFETY: restores attributes previously read from the same fd.
                unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSADRAIN, saved) };
            }
        }
    }
}

#[cfg(not(unix))]
mod raw_mode {
    use std::io;

    /// Line-buffered fallback where raw mode is unavailable.
    pub struct RawMode;

    impl RawMode {
        pub fn enter() -> io::Result<Self> {
            Ok(Self)
        }
    }
}

fn open_word_list(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening word list {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn load_words(reader: impl BufRead) -> Result<CharTrie<bool>> {
    let mut trie = CharTrie::new();
    for line in reader.lines() {
        let line = line.context("reading word list")?;
        let word = line.trim_end();
        if !word.is_empty() {
            trie.insert(word, true);
        }
    }
    Ok(trie)
}

/// What one key press did to the typed text.
#[derive(Debug, PartialEq, Eq)]
struct Step {
    is_word: bool,
    is_prefix: bool,
}

/// Appends `key` to `text` and classifies the result, clearing `text` when it
/// can no longer lead to a word.
fn step(trie: &CharTrie<bool>, text: &mut String, key: char) -> Step {
    text.push(key);
    let step = Step {
        is_word: trie.get(text.as_str()).copied().unwrap_or(false),
        is_prefix: trie.has_subtrie(text.as_str()),
    };
    if !step.is_prefix {
        text.clear();
    }
    step
}

fn run(trie: &CharTrie<bool>, keys: &mut impl KeySource, quiet: bool) -> Result<()> {
    println!("Start typing...");
    let mut text = String::new();
    while let Some(key) = keys.read_key().context("reading key")? {
        if u32::from(key) < 32 {
            break;
        }
        let typed = format!("{text}{key}");
        let outcome = step(trie, &mut text, key);
        if outcome.is_word {
            println!("{typed:?} is a word");
        }
        if quiet {
            continue;
        }
        if outcome.is_prefix {
            println!("{typed:?} is a prefix of a word");
        } else {
            println!("{typed:?} is not a prefix, going back to empty string");
        }
    }
    println!("Exiting");
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    println!("Dictionary test");
    println!("===============");
    println!("Load Dictionary");
    let trie = load_words(open_word_list(&cli.words)?)?;
    #[cfg(feature = "tracing")]
    tracing::info!(words = trie.len(), path = %cli.words.display(), "dictionary loaded");
    println!("Loaded Dictionary: {}", trie.len());

    run(&trie, &mut Terminal::new(), cli.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted(std::vec::IntoIter<char>);

    impl KeySource for Scripted {
        fn read_key(&mut self) -> io::Result<Option<char>> {
            Ok(self.0.next())
        }
    }

    fn words() -> CharTrie<bool> {
        load_words("man\nmanhole\nwoman\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_utf8_width_of_stray_bytes() {
        assert_eq!(utf8_width(b'a'), 1);
        assert_eq!(utf8_width(0xc3), 2);
        assert_eq!(utf8_width(0xe2), 3);
        assert_eq!(utf8_width(0xf0), 4);
        // Continuation and invalid lead bytes consume only themselves.
        assert_eq!(utf8_width(0x80), 1);
        assert_eq!(utf8_width(0xbf), 1);
        assert_eq!(utf8_width(0xf8), 1);
        assert_eq!(utf8_width(0xff), 1);
    }

    #[test]
    fn test_load_words_skips_blank_lines() {
        let trie = load_words("a\n\nb  \n".as_bytes()).unwrap();
        assert_eq!(trie.len(), 2);
        assert!(trie.has_key("b"));
    }

    #[test]
    fn test_step_tracks_words_and_resets() {
        let trie = words();
        let mut text = String::new();
        let expect = |is_word, is_prefix| Step { is_word, is_prefix };

        assert_eq!(step(&trie, &mut text, 'm'), expect(false, true));
        assert_eq!(step(&trie, &mut text, 'a'), expect(false, true));
        assert_eq!(step(&trie, &mut text, 'n'), expect(true, true));
        assert_eq!(text, "man");
        assert_eq!(step(&trie, &mut text, 'x'), expect(false, false));
        assert!(text.is_empty());
    }

    #[test]
    fn test_step_complete_leaf_word_resets() {
        let trie = words();
        let mut text = String::from("woma");
        assert_eq!(step(&trie, &mut text, 'n'), Step { is_word: true, is_prefix: false });
        assert!(text.is_empty());
    }

    #[test]
    fn test_run_stops_at_control_character() {
        let trie = words();
        let mut keys = Scripted(vec!['m', 'a', '\u{3}', 'n'].into_iter());
        run(&trie, &mut keys, true).unwrap();
        assert_eq!(keys.0.next(), Some('n'));
    }
}
