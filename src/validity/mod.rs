//! Word validity oracle
//!
//! Decides whether a submitted string is a real word using the dictionary, a
//! process-wide verdict cache, and (as a last resort) an external lookup service.

pub mod cache;
pub mod oracle;
mod validator;

pub use cache::{BoundedCache, Verdict, VerdictCache};
pub use oracle::{
    DictionaryApiOracle, LookupOutcome, OfflineOracle, WordOracle, oracle_from_config,
};
pub use validator::{MAX_WORD_LEN, MIN_WORD_LEN, WordCheck, WordValidator, is_well_formed};
