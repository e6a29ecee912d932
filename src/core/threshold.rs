use crate::domain::model::{AgeGroup, User};
use crate::utils::error::Result;
use std::io::Write;

pub const ADULT_AGE_THRESHOLD: u32 = 18;

/// 嚴格大於門檻才算成人，剛好 18 歲仍為 Minor
pub fn classify(user: &User) -> AgeGroup {
    if user.age > ADULT_AGE_THRESHOLD {
        AgeGroup::Adult
    } else {
        AgeGroup::Minor
    }
}

pub fn write_age_group<W: Write>(user: &User, out: &mut W) -> Result<AgeGroup> {
    let group = classify(user);
    tracing::debug!("Classified {} (age {}) as {}", user.name, user.age, group);
    writeln!(out, "{}", group)?;
    Ok(group)
}
