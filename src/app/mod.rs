// Application layer: front ends that own a ScoringSession.

pub mod batch;
pub mod interactive;
