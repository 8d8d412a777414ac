//! CoNLL-U reader.
//!
//! Splits the input into blank-line-separated blocks, parses the ten
//! tab-separated columns, and hands validated `Sentence` values to the
//! caller. Malformed blocks are rejected at this boundary: in lenient mode
//! (the default) they are logged and skipped so a batch run continues; in
//! strict mode the first bad block fails the whole read.

use crate::{ConlluError, ConlluResult};
use copa_core::{DepRel, MorphFeatures, Sentence, Token, UPos};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for CoNLL-U parsing.
#[derive(Debug, Clone)]
pub struct ConlluReaderConfig {
    /// Fail on the first malformed block instead of skipping it
    pub strict: bool,
    /// Skip multi-word token ranges (ids like `1-2`)
    pub skip_multiword_tokens: bool,
    /// Skip empty nodes (ids like `1.1`)
    pub skip_empty_nodes: bool,
    /// Stop after this many sentences
    pub max_sentences: Option<usize>,
}

impl Default for ConlluReaderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            skip_multiword_tokens: true,
            skip_empty_nodes: true,
            max_sentences: None,
        }
    }
}

/// Reader for CoNLL-U v2 documents.
pub struct ConlluReader {
    config: ConlluReaderConfig,
}

impl ConlluReader {
    /// Create a reader with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ConlluReaderConfig::default(),
        }
    }

    /// Create a reader with a custom configuration.
    pub fn with_config(config: ConlluReaderConfig) -> Self {
        Self { config }
    }

    /// Read a CoNLL-U file.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> ConlluResult<Vec<Sentence>> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .map_err(|e| ConlluError::io(format!("read {}", path.display()), e))?;
        self.read_str(&input)
    }

    /// Read CoNLL-U text.
    pub fn read_str(&self, input: &str) -> ConlluResult<Vec<Sentence>> {
        let mut sentences = Vec::new();
        let mut comments: Vec<&str> = Vec::new();
        let mut token_lines: Vec<&str> = Vec::new();
        let mut block_index = 0usize;

        let mut flush = |comments: &mut Vec<&str>,
                         token_lines: &mut Vec<&str>,
                         sentences: &mut Vec<Sentence>,
                         block_index: &mut usize|
         -> ConlluResult<()> {
            if token_lines.is_empty() {
                comments.clear();
                return Ok(());
            }
            *block_index += 1;
            match self.parse_block(comments, token_lines, *block_index) {
                Ok(sentence) => sentences.push(sentence),
                Err(e) if self.config.strict => return Err(e),
                Err(e) => warn!("skipping block {}: {}", block_index, e),
            }
            comments.clear();
            token_lines.clear();
            Ok(())
        };

        for line in input.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                flush(
                    &mut comments,
                    &mut token_lines,
                    &mut sentences,
                    &mut block_index,
                )?;
                if let Some(max) = self.config.max_sentences {
                    if sentences.len() >= max {
                        return Ok(sentences);
                    }
                }
            } else if line.starts_with('#') {
                comments.push(line);
            } else {
                token_lines.push(line);
            }
        }
        flush(
            &mut comments,
            &mut token_lines,
            &mut sentences,
            &mut block_index,
        )?;

        if let Some(max) = self.config.max_sentences {
            sentences.truncate(max);
        }
        debug!("parsed {} sentences", sentences.len());
        Ok(sentences)
    }

    /// Parse one comment-plus-token block into a `Sentence`.
    fn parse_block(
        &self,
        comments: &[&str],
        token_lines: &[&str],
        block_index: usize,
    ) -> ConlluResult<Sentence> {
        let mut sent_id = None;
        let mut text = None;
        for comment in comments {
            if let Some(content) = comment.strip_prefix('#') {
                if let Some((key, value)) = content.split_once('=') {
                    match key.trim() {
                        "sent_id" => sent_id = Some(value.trim().to_string()),
                        "text" => text = Some(value.trim().to_string()),
                        _ => {}
                    }
                }
            }
        }
        let sent_id = sent_id.unwrap_or_else(|| format!("sent-{block_index:04}"));

        let mut tokens = Vec::new();
        for line in token_lines {
            if let Some(token) = self.parse_token_line(line, &sent_id)? {
                tokens.push(token);
            }
        }

        // Token text joined as a fallback when the block carries no # text.
        let text = text.unwrap_or_else(|| {
            tokens
                .iter()
                .map(|t| t.form.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });

        Sentence::new(&sent_id, text, tokens)
            .map_err(|e| ConlluError::malformed(&sent_id, e.to_string()))
    }

    /// Parse a single token line; `Ok(None)` for skipped ranges and nodes.
    fn parse_token_line(&self, line: &str, sent_id: &str) -> ConlluResult<Option<Token>> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 10 {
            return Err(ConlluError::malformed(
                sent_id,
                format!("expected 10 columns, got {}: {line}", fields.len()),
            ));
        }

        let id_str = fields[0];
        if id_str.contains('-') {
            if self.config.skip_multiword_tokens {
                return Ok(None);
            }
            return Err(ConlluError::malformed(
                sent_id,
                format!("multi-word token range {id_str}"),
            ));
        }
        if id_str.contains('.') {
            if self.config.skip_empty_nodes {
                return Ok(None);
            }
            return Err(ConlluError::malformed(
                sent_id,
                format!("empty node {id_str}"),
            ));
        }
        let id: u32 = id_str
            .parse()
            .map_err(|_| ConlluError::malformed(sent_id, format!("invalid token id {id_str}")))?;

        let form = fields[1].to_string();
        let lemma = if fields[2] == "_" {
            form.clone()
        } else {
            fields[2].to_string()
        };
        let upos = UPos::from(fields[3]);
        let xpos = (fields[4] != "_").then(|| fields[4].to_string());
        let feats = MorphFeatures::parse(fields[5]);
        let head: u32 = fields[6]
            .parse()
            .map_err(|_| ConlluError::malformed(sent_id, format!("non-integer head {}", fields[6])))?;
        let deprel = DepRel::from(fields[7]);

        Ok(Some(Token {
            id,
            form,
            lemma,
            upos,
            xpos,
            feats,
            head,
            deprel,
        }))
    }
}

impl Default for ConlluReader {
    fn default() -> Self {
        Self::new()
    }
}
