use crate::plot::PlotKind;
use clap::{Parser, ValueEnum};
use flamethrower_report::grouping_mode::GroupingMode;
use flamethrower_report::labels::{
    ExperimentLabels, DEFAULT_RESOLVERS, DEFAULT_ROUNDS, DEFAULT_TESTS,
};
use std::path::PathBuf;

const DEFAULT_SUBDIR: &str = "nocaching";
const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct FlamethrowerArgs {
    /// Directories to scan recursively for flamethrower result files
    #[arg(short, long, num_args = 1.., required = true, value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Prefix used for chart captions
    #[arg(short, long, default_value = "", value_name = "LABEL")]
    pub label: String,

    /// Plots to create, nothing is rendered when omitted
    #[arg(short, long, num_args = 1.., value_enum, value_name = "PLOTS")]
    pub plots: Vec<PlotKind>,

    /// How result files are grouped before aggregation
    #[arg(short = 't', long = "type", value_enum, default_value_t = GroupingArg::Combined)]
    pub grouping: GroupingArg,

    /// Resolvers to look for in the flamethrower command lines, used by `resolver` grouping
    #[arg(short, long, num_args = 1.., default_values_t = DEFAULT_RESOLVERS.map(String::from))]
    pub resolvers: Vec<String>,

    /// Directory name a result file must be located under
    #[arg(short, long, default_value = DEFAULT_SUBDIR)]
    pub subdir: String,

    /// Round labels searched for in result file paths, in matching order
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_ROUNDS.map(String::from))]
    pub rounds: Vec<String>,

    /// Test labels searched for in result file paths, in matching order
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_TESTS.map(String::from))]
    pub tests: Vec<String>,

    /// Directory the charts are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingArg {
    /// Group by protocol and test
    Combined,
    /// Group by protocol, test and round
    Foreach,
    /// Group by protocol, test and resolver
    Resolver,
}

impl From<GroupingArg> for GroupingMode {
    fn from(value: GroupingArg) -> Self {
        match value {
            GroupingArg::Combined => GroupingMode::Combined,
            GroupingArg::Foreach => GroupingMode::Foreach,
            GroupingArg::Resolver => GroupingMode::Resolver,
        }
    }
}

impl FlamethrowerArgs {
    pub fn grouping_mode(&self) -> GroupingMode {
        self.grouping.into()
    }

    pub fn labels(&self) -> ExperimentLabels {
        ExperimentLabels::new(
            self.rounds.clone(),
            self.tests.clone(),
            self.resolvers.clone(),
        )
    }
}
