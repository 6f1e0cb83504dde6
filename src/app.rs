// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::IsTerminal;

use clap::CommandFactory;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{
    collection::WordBook,
    render, safety,
    speech::Speaker,
    storage::{JsonFileStore, WordStore},
    syllabifier,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            data_file = ?config.data_file,
            random_count = config.random_count,
            voice = ?config.speech.voice,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub async fn run(&mut self) -> Result<()> {
        let cmd = self.cli.command.clone().unwrap_or(Commands::Show);
        match cmd {
            Commands::Split { word } => self.split(&word),
            Commands::Check { word } => self.check(&word),
            Commands::Say { text } => self.speaker().speak(&text).await,
            Commands::Voices => self.list_voices().await,
            Commands::Config => self.show_config(),
            Commands::Init => self.init_config(),
            Commands::Completions { shell } => {
                clap_complete::generate(shell, &mut Cli::command(), "hecele", &mut std::io::stdout());
                Ok(())
            }
            cmd => {
                let mut book = self.open_book()?;
                let result = self.run_list_command(&cmd, &mut book).await;
                if let Some(warning) = book.take_save_warning() {
                    self.print_warning(&format!("Word list could not be saved: {warning}"));
                }
                result
            }
        }
    }

    fn open_book(&self) -> Result<WordBook<JsonFileStore>> {
        let path = self.config.data_path()?;
        debug!(path = %path.display(), "opening word list");
        let mut rng = rand::rng();
        Ok(WordBook::open(
            JsonFileStore::new(path),
            self.config.min_words,
            &mut rng,
        ))
    }

    fn speaker(&self) -> Speaker {
        Speaker::new(&self.config.speech)
    }

    async fn run_list_command(
        &self,
        cmd: &Commands,
        book: &mut WordBook<JsonFileStore>,
    ) -> Result<()> {
        match cmd {
            Commands::Show => {
                Self::show_cards(book);
                Ok(())
            }
            Commands::List => {
                Self::show_list(book);
                Ok(())
            }
            Commands::Add {
                word,
                syllables,
                allow_duplicate,
            } => self.add(book, word, syllables.as_deref(), *allow_duplicate),
            Commands::Delete { position } => self.delete(book, *position),
            Commands::Reset => {
                self.confirm("Load the default words? Current words will be lost.")?;
                book.reset_to_defaults();
                Self::show_cards(book);
                Ok(())
            }
            Commands::Clear => {
                self.confirm("Delete all words?")?;
                book.clear();
                self.print_info("All words deleted");
                Ok(())
            }
            Commands::Random { count } => {
                let count = count.unwrap_or(self.config.random_count);
                self.confirm(&format!(
                    "Replace the current words with {count} random words?"
                ))?;
                let mut rng = rand::rng();
                book.generate_random(count, &mut rng);
                eprintln!(
                    "{} {} random words added",
                    style("✓").green().bold(),
                    book.len()
                );
                Self::show_cards(book);
                Ok(())
            }
            Commands::Save => {
                if book.save() {
                    eprintln!(
                        "{} Saved ({})",
                        style("✓").green().bold(),
                        render::storage_status(book.store().last_saved())
                    );
                }
                Ok(())
            }
            Commands::Practice => self.practice(book).await,
            _ => Ok(()),
        }
    }

    fn add(
        &self,
        book: &mut WordBook<JsonFileStore>,
        word: &str,
        syllables: Option<&str>,
        allow_duplicate: bool,
    ) -> Result<()> {
        if !allow_duplicate && book.contains(word) {
            self.confirm(&format!(
                "\"{}\" is already in the list. Add it anyway?",
                word.trim()
            ))?;
        }

        let entry = book.add(word, syllables)?;
        eprintln!(
            "{} Added {}",
            style("✓").green().bold(),
            render::list_line(entry)
        );
        println!("{}", render::card(entry));
        Ok(())
    }

    fn delete(&self, book: &mut WordBook<JsonFileStore>, position: usize) -> Result<()> {
        if position == 0 || position > book.len() {
            return Err(Error::IndexOutOfRange {
                position,
                len: book.len(),
            });
        }
        let index = position - 1;
        self.confirm(&format!(
            "Delete {}?",
            render::list_line(&book.words()[index])
        ))?;
        let removed = book.delete(index)?;
        eprintln!("{} Deleted {}", style("✓").green().bold(), removed.word);
        Ok(())
    }

    fn split(&self, word: &str) -> Result<()> {
        if word.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        println!("{}", syllabifier::syllabify(word).join(","));
        self.print_info("Automatic splitting can be wrong; please check the syllables");
        Ok(())
    }

    fn check(&self, word: &str) -> Result<()> {
        let result = safety::validate_word(word);
        match result.reason {
            None => println!("{} {}", style("✓").green().bold(), word.trim()),
            Some(reason) => {
                println!("{} {}: {}", style("✗").red().bold(), word.trim(), reason);
                return Ok(());
            }
        }

        for syllable in syllabifier::syllabify(word) {
            match safety::validate_syllable(&syllable).reason {
                None => println!("  {} {}", style("✓").green(), syllable),
                Some(reason) => println!("  {} {}: {}", style("✗").red(), syllable, reason),
            }
        }
        Ok(())
    }

    fn show_cards<S: WordStore>(book: &WordBook<S>) {
        if book.is_empty() {
            Self::print_empty_hint();
            return;
        }
        for entry in book.words() {
            println!("{}", render::card(entry));
        }
    }

    fn show_list<S: WordStore>(book: &WordBook<S>) {
        eprintln!(
            "{} {} ({})",
            style("→").cyan(),
            render::word_count(book.len()),
            render::storage_status(book.store().last_saved())
        );
        if book.is_empty() {
            Self::print_empty_hint();
            return;
        }
        for (i, entry) in book.words().iter().enumerate() {
            println!("{:>3}. {}", i + 1, render::list_line(entry));
        }
    }

    fn print_empty_hint() {
        eprintln!(
            "No words yet. Add one with {}",
            style("hecele add <word>").yellow()
        );
    }

    // ─── Speech ───

    async fn list_voices(&self) -> Result<()> {
        let speaker = self.speaker();
        let voices = speaker.voices().await?;
        let selected = speaker.selected_voice().await.ok();

        let turkish = voices.iter().filter(|v| v.is_turkish()).count();
        eprintln!(
            "{} {} voices ({} Turkish)",
            style("✓").green().bold(),
            voices.len(),
            turkish
        );
        for voice in &voices {
            let marker = if selected.as_ref() == Some(voice) {
                style("*").green().bold().to_string()
            } else {
                " ".to_string()
            };
            println!("{} {:<8} {}", marker, voice.lang, voice.label());
        }
        Ok(())
    }

    async fn practice(&self, book: &WordBook<JsonFileStore>) -> Result<()> {
        if book.is_empty() {
            Self::print_empty_hint();
            return Ok(());
        }
        if !std::io::stdin().is_terminal() {
            return Err(Error::Dialog("practice needs an interactive terminal".into()));
        }

        let speaker = self.speaker();
        let voice = speaker.selected_voice().await?;
        let cards: Vec<String> = book.words().iter().map(render::card).collect();

        loop {
            let Some(word_idx) = Select::new()
                .with_prompt("Word (Esc to quit)")
                .items(&cards)
                .default(0)
                .interact_opt()?
            else {
                return Ok(());
            };

            let entry = &book.words()[word_idx];
            let syllables: Vec<String> = entry
                .syllables
                .iter()
                .map(|s| render::styled_syllable(s).to_string())
                .collect();

            let mut selected = 0;
            while let Some(idx) = Select::new()
                .with_prompt(format!("{} (Esc for words)", entry.word))
                .items(&syllables)
                .default(selected)
                .interact_opt()?
            {
                selected = idx;
                if let Err(e) = speaker.speak_with(&entry.syllables[idx].text, &voice).await {
                    self.print_warning(&e.to_string());
                }
            }
        }
    }

    // ─── Config ───

    fn show_config(&self) -> Result<()> {
        let text = toml::to_string_pretty(&self.config)
            .map_err(|e| Error::Config(e.to_string()))?;
        println!("{text}");
        if let Ok(path) = self.config.data_path() {
            eprintln!("{} word list: {}", style("info:").cyan(), path.display());
        }
        Ok(())
    }

    fn init_config(&self) -> Result<()> {
        if let Some(path) = Config::config_path() {
            if path.exists() {
                self.print_info(&format!("Config already exists at {}", path.display()));
                return Ok(());
            }
        }
        let path = Config::create_default()?;
        eprintln!(
            "{} Created {}",
            style("✓").green().bold(),
            path.display()
        );
        Ok(())
    }

    // ─── Prompts ───

    fn confirm(&self, prompt: &str) -> Result<()> {
        if self.cli.yes {
            return Ok(());
        }
        if !std::io::stdin().is_terminal() {
            return Err(Error::Cancelled);
        }
        let ok = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if ok { Ok(()) } else { Err(Error::Cancelled) }
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}
