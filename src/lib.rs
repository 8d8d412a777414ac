//! copa: Open Information Extraction for Portuguese over Universal
//! Dependencies.
//!
//! This facade re-exports the workspace crates. The usual flow: read
//! CoNLL-U with [`conllu`], run [`extractor::extract`] per sentence, and
//! render the resulting set with [`output`].
//!
//! ```
//! use copa::conllu::ConlluReader;
//! use copa::extractor::{extract, ExtractorConfig};
//!
//! let doc = "# text = O menino correu.\n\
//! 1\tO\to\tDET\t_\t_\t2\tdet\t_\t_\n\
//! 2\tmenino\tmenino\tNOUN\t_\t_\t3\tnsubj\t_\t_\n\
//! 3\tcorreu\tcorrer\tVERB\t_\t_\t0\troot\t_\t_\n\
//! 4\t.\t.\tPUNCT\t_\t_\t3\tpunct\t_\t_\n";
//! let sentences = ConlluReader::new().read_str(doc).unwrap();
//! let set = extract(&sentences[0], &ExtractorConfig::default()).unwrap();
//! assert_eq!(set.render(&sentences[0]), "(O menino; correu; )");
//! ```

pub use copa_conllu as conllu;
pub use copa_core as model;
pub use copa_extractor as extractor;
pub use copa_output as output;
