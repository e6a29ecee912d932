// Domain layer: the user record and the age classification it feeds.

pub mod model;
