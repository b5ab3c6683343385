//! Validation modules

pub mod cnpj;

pub use cnpj::{is_valid_cnpj, normalize_cnpj, validate_cnpj, CNPJ_DIGITS};
