//! Shared text fixtures

pub const SENTENCE: &str = "This is a test";

pub const POEM: &str = "The fog comes
on little cat feet.

It sits looking
over harbor and city
on silent haunches
and then moves on.
";
