pub const DEFAULT_ROUNDS: [&str; 4] = ["round1", "round2", "round3", "round4"];
pub const DEFAULT_TESTS: [&str; 9] = [
    "test1", "test2", "test3", "test4", "test5", "test6", "test7", "test8", "test9",
];
pub const DEFAULT_RESOLVERS: [&str; 2] = ["dns1.jwijenbergh.com", "dns2.jwijenbergh.com"];

/// Known round, test and resolver labels. Lookups return the first entry that matches,
/// so the order of each list is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentLabels {
    pub rounds: Vec<String>,
    pub tests: Vec<String>,
    pub resolvers: Vec<String>,
}

impl ExperimentLabels {
    pub fn new(rounds: Vec<String>, tests: Vec<String>, resolvers: Vec<String>) -> Self {
        Self {
            rounds,
            tests,
            resolvers,
        }
    }

    /// First round label occurring anywhere in `path`.
    pub fn round_in(&self, path: &str) -> Option<&str> {
        first_substring(&self.rounds, path)
    }

    /// First test label occurring anywhere in `path`.
    pub fn test_in(&self, path: &str) -> Option<&str> {
        first_substring(&self.tests, path)
    }

    /// First resolver that is one of the command line tokens.
    pub fn resolver_in(&self, tokens: &[String]) -> Option<&str> {
        self.resolvers
            .iter()
            .find(|resolver| tokens.iter().any(|token| token == *resolver))
            .map(String::as_str)
    }
}

impl Default for ExperimentLabels {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS.iter().map(|s| s.to_string()).collect(),
            tests: DEFAULT_TESTS.iter().map(|s| s.to_string()).collect(),
            resolvers: DEFAULT_RESOLVERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn first_substring<'a>(candidates: &'a [String], haystack: &str) -> Option<&'a str> {
    candidates
        .iter()
        .find(|candidate| haystack.contains(candidate.as_str()))
        .map(String::as_str)
}
