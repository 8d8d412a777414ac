//! Arena-based sentence model.
//!
//! A `Sentence` owns its tokens in sentence order and precomputes a
//! children-by-index table, so tree navigation is index arithmetic with no
//! cyclic ownership. Construction validates head indices and acyclicity;
//! everything downstream may assume a well-formed tree.

use crate::{DepRel, ModelError, ModelResult, Token};
use serde::{Deserialize, Serialize};

/// Arena index of a token within its sentence (0-based).
pub type TokenId = usize;

/// An immutable parsed sentence with its induced dependency tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    sent_id: String,
    text: String,
    tokens: Vec<Token>,
    /// children[i] lists the dependents of token i, in sentence order
    children: Vec<Vec<TokenId>>,
    root: TokenId,
}

impl Sentence {
    /// Build a sentence from tokens in sentence order.
    ///
    /// Token ids must run 1..=n; heads must be 0 or a valid id; the head
    /// chain of every token must reach the root.
    pub fn new(
        sent_id: impl Into<String>,
        text: impl Into<String>,
        tokens: Vec<Token>,
    ) -> ModelResult<Self> {
        if tokens.is_empty() {
            return Err(ModelError::EmptySentence);
        }
        for (position, token) in tokens.iter().enumerate() {
            if token.id as usize != position + 1 {
                return Err(ModelError::NonContiguousIds {
                    position,
                    id: token.id,
                });
            }
            if token.head as usize > tokens.len() || token.head == token.id {
                return Err(ModelError::InvalidHead {
                    id: token.id,
                    head: token.head,
                });
            }
        }

        let root = tokens
            .iter()
            .position(|t| t.head == 0)
            .ok_or(ModelError::MissingRoot)?;

        // Every head chain must terminate at the root within n steps.
        for token in &tokens {
            let mut current = token;
            let mut steps = 0;
            while current.head != 0 {
                current = &tokens[current.head as usize - 1];
                steps += 1;
                if steps > tokens.len() {
                    return Err(ModelError::HeadCycle { id: token.id });
                }
            }
        }

        let mut children: Vec<Vec<TokenId>> = vec![Vec::new(); tokens.len()];
        for (idx, token) in tokens.iter().enumerate() {
            if token.head != 0 {
                children[token.head as usize - 1].push(idx);
            }
        }

        Ok(Self {
            sent_id: sent_id.into(),
            text: text.into(),
            tokens,
            children,
            root,
        })
    }

    /// Sentence identifier from the source document.
    pub fn sent_id(&self) -> &str {
        &self.sent_id
    }

    /// Original surface text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence holds no tokens (never true after `new`).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in sentence order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at an arena index.
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id]
    }

    /// Arena index of the root token.
    pub fn root(&self) -> TokenId {
        self.root
    }

    /// Parent of a token, `None` for the root.
    pub fn parent(&self, id: TokenId) -> Option<TokenId> {
        let head = self.tokens[id].head;
        if head == 0 {
            None
        } else {
            Some(head as usize - 1)
        }
    }

    /// Dependents of a token, in sentence order.
    pub fn children(&self, id: TokenId) -> &[TokenId] {
        &self.children[id]
    }

    /// First dependent carrying the given relation, in sentence order.
    pub fn child_by_dep(&self, id: TokenId, rel: &DepRel) -> Option<TokenId> {
        self.children[id]
            .iter()
            .copied()
            .find(|&c| &self.tokens[c].deprel == rel)
    }

    /// All dependents carrying the given relation, in sentence order.
    pub fn children_by_dep(&self, id: TokenId, rel: &DepRel) -> Vec<TokenId> {
        self.children[id]
            .iter()
            .copied()
            .filter(|&c| &self.tokens[c].deprel == rel)
            .collect()
    }

    /// Whether the sentence contains any VERB or AUX token.
    pub fn has_verb(&self) -> bool {
        self.tokens.iter().any(Token::is_verbal)
    }
}
