pub mod arith;
pub mod sequence;
pub mod snippet;
pub mod threshold;
