use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::ArgMatches;
use crossfill::crossword::solve::WordReuse;

#[derive(Clone, Debug)]
pub(crate) struct Options {
    structure_path: PathBuf,
    words_path: PathBuf,
    word_reuse: WordReuse,
    inference: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let path_of = |name: &str| {
            matches
                .value_of(name)
                .map(PathBuf::from)
                .ok_or_else(|| anyhow!("missing {} path", name))
        };
        Ok(Self {
            structure_path: path_of("structure")?,
            words_path: path_of("words")?,
            word_reuse: if matches.is_present("allow_word_reuse") {
                WordReuse::Allow
            } else {
                WordReuse::Forbid
            },
            inference: !matches.is_present("no_inference"),
        })
    }

    pub fn structure_path(&self) -> &Path {
        &self.structure_path
    }

    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    pub fn word_reuse(&self) -> WordReuse {
        self.word_reuse
    }

    /// returns true if arc consistency is maintained after each guess
    pub fn inference(&self) -> bool {
        self.inference
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("crossfill")
        .about("Fill a crossword structure with words")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .required(true)
                .value_name("STRUCTURE")
                .help("file with one line per row, '_' for open cells"),
        )
        .arg(
            Arg::with_name("words")
                .required(true)
                .value_name("WORDS")
                .help("file with one word per line"),
        )
        .arg(
            Arg::with_name("allow_word_reuse")
                .long("allow-word-reuse")
                .help("allow the same word to fill more than one slot"),
        )
        .arg(
            Arg::with_name("no_inference")
                .long("no-inference")
                .help("skip arc consistency after each guess during search"),
        )
}
