use flamethrower_report::grouping_mode::GroupingMode;
use flamethrower_report::labels::ExperimentLabels;
use flamethrower_report::params::{ExperimentParams, DEFAULT_CONCURRENCY};
use flamethrower_report::protocol::{Protocol, DEFAULT_PROTOCOL};
use flamethrower_report::FlamethrowerError;
use std::path::Path;
use std::str::FromStr;

const CONCURRENCY_FLAG: &str = "-c";
const PROTOCOL_FLAG: &str = "-P";
const METHOD_FLAG: &str = "-M";

/// Value following the first occurrence of `flag`, `None` when the flag is absent.
/// A flag in last position has no value and is reported as an error instead of
/// falling back to a default.
pub fn argument<'a>(
    tokens: &'a [String],
    flag: &str,
) -> Result<Option<&'a str>, FlamethrowerError> {
    match tokens.iter().position(|token| token == flag) {
        None => Ok(None),
        Some(index) => tokens
            .get(index + 1)
            .map(|value| Some(value.as_str()))
            .ok_or_else(|| FlamethrowerError::MissingArgumentValue(flag.to_owned())),
    }
}

pub fn argument_or<'a>(
    tokens: &'a [String],
    flag: &str,
    default: &'a str,
) -> Result<&'a str, FlamethrowerError> {
    Ok(argument(tokens, flag)?.unwrap_or(default))
}

/// Parses the flag's value, keeping `default` only when the flag is absent.
pub fn parse_argument<T: FromStr>(
    tokens: &[String],
    flag: &str,
    default: T,
) -> Result<T, FlamethrowerError> {
    match argument(tokens, flag)? {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| FlamethrowerError::InvalidArgumentValue {
                flag: flag.to_owned(),
                value: value.to_owned(),
            }),
    }
}

/// `-P` defaults to udp; for https the `-M` method (GET unless given) is part of the protocol.
pub fn protocol(tokens: &[String]) -> Result<Protocol, FlamethrowerError> {
    let transport = argument_or(tokens, PROTOCOL_FLAG, DEFAULT_PROTOCOL)?;
    let method = if transport == "https" {
        argument(tokens, METHOD_FLAG)?
    } else {
        None
    };
    Protocol::from_flags(transport, method)
}

/// Number of concurrent generators (`-c`), which must be positive.
pub fn concurrency(tokens: &[String]) -> Result<usize, FlamethrowerError> {
    let concurrency = parse_argument(tokens, CONCURRENCY_FLAG, DEFAULT_CONCURRENCY)?;
    if concurrency == 0 {
        return Err(FlamethrowerError::InvalidArgumentValue {
            flag: CONCURRENCY_FLAG.to_owned(),
            value: concurrency.to_string(),
        });
    }
    Ok(concurrency)
}

pub fn resolver(tokens: &[String], labels: &ExperimentLabels) -> Result<String, FlamethrowerError> {
    labels
        .resolver_in(tokens)
        .map(str::to_owned)
        .ok_or_else(|| FlamethrowerError::ResolverNotFound {
            resolvers: labels.resolvers.clone(),
        })
}

pub fn round(path: &Path, labels: &ExperimentLabels) -> Result<String, FlamethrowerError> {
    labels
        .round_in(&path.to_string_lossy())
        .map(str::to_owned)
        .ok_or_else(|| FlamethrowerError::RoundNotFound(path.to_path_buf()))
}

pub fn test(path: &Path, labels: &ExperimentLabels) -> Result<String, FlamethrowerError> {
    labels
        .test_in(&path.to_string_lossy())
        .map(str::to_owned)
        .ok_or_else(|| FlamethrowerError::TestNotFound(path.to_path_buf()))
}

/// Recovers the parameters of one run. The round is only looked up when grouping per
/// round and the resolver only when grouping per resolver.
pub fn extract_params(
    tokens: &[String],
    path: &Path,
    mode: GroupingMode,
    labels: &ExperimentLabels,
) -> Result<ExperimentParams, FlamethrowerError> {
    let concurrency = concurrency(tokens)?;
    let protocol = protocol(tokens)?;
    let test = test(path, labels)?;
    let round = match mode {
        GroupingMode::Foreach => Some(round(path, labels)?),
        _ => None,
    };
    let resolver = match mode {
        GroupingMode::Resolver => Some(resolver(tokens, labels)?),
        _ => None,
    };
    Ok(ExperimentParams::new(
        protocol,
        concurrency,
        test,
        round,
        resolver,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flamethrower_report::ErrorKind;
    use test_case::test_case;

    fn tokens(command_line: &str) -> Vec<String> {
        command_line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn should_return_value_following_flag() {
        assert_eq!(argument_or(&tokens("-c 5"), "-c", "10").unwrap(), "5");
        assert_eq!(argument_or(&tokens("flame -q x"), "-c", "10").unwrap(), "10");
    }

    #[test]
    fn should_fail_when_flag_has_no_value() {
        let error = argument_or(&tokens("-c"), "-c", "10").unwrap_err();
        assert!(
            matches!(error, FlamethrowerError::MissingArgumentValue(ref flag) if flag == "-c")
        );
        assert_eq!(error.kind(), ErrorKind::Lookup);
    }

    #[test_case("flame 127.0.0.1", 10; "default")]
    #[test_case("flame -c 5 127.0.0.1", 5; "explicit")]
    #[test_case("flame -c 3 -c 7", 3; "first occurrence wins")]
    fn should_read_concurrency(command_line: &str, expected: usize) {
        assert_eq!(concurrency(&tokens(command_line)).unwrap(), expected);
    }

    #[test_case("flame -c abc"; "not a number")]
    #[test_case("flame -c 0"; "zero")]
    #[test_case("flame -c -1"; "negative")]
    fn should_reject_invalid_concurrency(command_line: &str) {
        assert!(matches!(
            concurrency(&tokens(command_line)),
            Err(FlamethrowerError::InvalidArgumentValue { .. })
        ));
    }

    #[test_case("flame", Protocol::Udp; "default udp")]
    #[test_case("flame -P udp -M POST", Protocol::Udp; "method ignored for udp")]
    #[test_case("flame -P https", Protocol::HttpsGet; "default get")]
    #[test_case("flame -P https -M POST", Protocol::HttpsPost; "post")]
    #[test_case("flame -M GET -P https", Protocol::HttpsGet; "flag order")]
    fn should_resolve_protocol(command_line: &str, expected: Protocol) {
        assert_eq!(protocol(&tokens(command_line)).unwrap(), expected);
    }

    #[test]
    fn should_fail_on_unsupported_protocol() {
        assert!(matches!(
            protocol(&tokens("flame -P tcp")),
            Err(FlamethrowerError::UnsupportedProtocol(_))
        ));
    }

    #[test]
    fn should_find_round_and_test_in_path() {
        let labels = ExperimentLabels::default();
        let path = Path::new("/data/round3/test2/x.json");
        assert_eq!(round(path, &labels).unwrap(), "round3");
        assert_eq!(test(path, &labels).unwrap(), "test2");

        let error = round(Path::new("/data/test2/x.json"), &labels).unwrap_err();
        assert!(matches!(error, FlamethrowerError::RoundNotFound(_)));
        assert_eq!(error.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn should_find_first_configured_resolver() {
        let labels = ExperimentLabels::default();
        let found = resolver(&tokens("flame dns2.jwijenbergh.com -P https"), &labels).unwrap();
        assert_eq!(found, "dns2.jwijenbergh.com");
        assert!(matches!(
            resolver(&tokens("flame 127.0.0.1"), &labels),
            Err(FlamethrowerError::ResolverNotFound { .. })
        ));
    }

    #[test]
    fn should_extract_only_parameters_required_by_mode() {
        let labels = ExperimentLabels::default();
        let path = Path::new("/data/test4/udp.json");
        let tokens = tokens("flame -c 2 127.0.0.1");

        let params = extract_params(&tokens, path, GroupingMode::Combined, &labels).unwrap();
        assert_eq!(
            params,
            ExperimentParams::new(Protocol::Udp, 2, "test4".to_owned(), None, None)
        );
        assert!(matches!(
            extract_params(&tokens, path, GroupingMode::Foreach, &labels),
            Err(FlamethrowerError::RoundNotFound(_))
        ));
        assert!(matches!(
            extract_params(&tokens, path, GroupingMode::Resolver, &labels),
            Err(FlamethrowerError::ResolverNotFound { .. })
        ));
    }
}
