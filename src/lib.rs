pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SnippetConfig;
pub use crate::core::{
    arith::add,
    sequence::{double_all, doubled, NUMBERS},
    snippet::Snippet,
    threshold::{classify, write_age_group, ADULT_AGE_THRESHOLD},
};
pub use domain::model::{default_user, AgeGroup, User};
pub use utils::error::{Result, SnippetError};
