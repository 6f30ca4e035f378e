//! Topic catalog used to vary generated exercises.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const TOPICS: &[&str] = &[
    "a production incident and its postmortem",
    "a flaky test blocking the CI pipeline",
    "a database migration that needs a maintenance window",
    "a pull request review with requested changes",
    "an API deprecation affecting a partner team",
    "a latency regression after the last release",
    "a security vulnerability in a third-party dependency",
    "sprint planning and an overcommitted backlog",
    "a proposal to split a monolith into services",
    "onboarding a new engineer to the codebase",
    "a feature request from an important customer",
    "on-call handover after a noisy weekend",
    "cloud cost overruns on the staging environment",
    "a disagreement about the release date of a feature",
];

/// Picks a topic uniformly at random.
pub fn pick_topic<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TOPICS.choose(rng).copied().unwrap_or(TOPICS[0])
}

pub fn random_topic() -> &'static str {
    pick_topic(&mut rand::rng())
}
