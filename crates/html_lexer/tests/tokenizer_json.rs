use html_lexer::{
    CollectingSink, ContentModelFlag, InputSource, TokenCollector, Tokenizer, TokenizerConfig,
};
use html_lexer_test_support::tokenizer_json::{LoadedCase, load_fixture_dir, render, tokens_to_json};
use html_lexer_test_support::{diff_lines, env_filter, parse_env_bool};
use std::path::PathBuf;

const FILTER_ENV: &str = "HTML_LEXER_FIXTURE_FILTER";
const VERBOSE_ENV: &str = "HTML_LEXER_FIXTURE_VERBOSE";

/// Window sizes that force refills inside every construct.
const CHUNKED_WINDOWS: [usize; 3] = [2, 3, 7];

#[derive(Clone, Debug)]
struct Failure {
    id: String,
    message: String,
}

struct Outcome {
    lines: Vec<String>,
    errors: usize,
}

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tokenizer")
}

fn run_case(
    loaded: &LoadedCase,
    flag: ContentModelFlag,
    buffer_size: Option<usize>,
) -> Result<Outcome, String> {
    let case = &loaded.case;
    let units = case.input_units();
    let mut config = TokenizerConfig {
        initial_content_model: flag,
        initial_content_model_element: case.last_start_tag.clone(),
        ..TokenizerConfig::default()
    };
    config.buffer_size = buffer_size.unwrap_or_else(|| units.len().max(config.buffer_size));
    let mut tokenizer = Tokenizer::with_sink(TokenCollector::new(), CollectingSink::new(), config);
    tokenizer
        .tokenize(InputSource::from_utf16(units))
        .map_err(|err| format!("tokenize failed: {err}"))?;
    let (collector, sink) = tokenizer.into_parts();
    Ok(Outcome {
        lines: render(&tokens_to_json(collector.tokens())),
        errors: sink.error_count(),
    })
}

fn check_case(loaded: &LoadedCase) -> Result<(), String> {
    let case = &loaded.case;
    let expected = render(&case.expected_tokens()?);
    for flag in case.content_models()? {
        let whole = run_case(loaded, flag, None)?;
        if whole.lines != expected {
            return Err(format!(
                "token mismatch [{flag:?}, whole]\ninput: {:?}\n{}",
                case.input,
                diff_lines(&expected, &whole.lines)
            ));
        }
        if let Some(count) = case.expected_error_count()
            && count != whole.errors
        {
            return Err(format!(
                "error count mismatch [{flag:?}]: expected {count}, got {}\ninput: {:?}",
                whole.errors, case.input
            ));
        }
        for size in CHUNKED_WINDOWS {
            let chunked = run_case(loaded, flag, Some(size))?;
            if chunked.lines != whole.lines || chunked.errors != whole.errors {
                return Err(format!(
                    "window {size} diverged from whole input [{flag:?}] (errors {} vs {})\ninput: {:?}\n{}",
                    chunked.errors,
                    whole.errors,
                    case.input,
                    diff_lines(&whole.lines, &chunked.lines)
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn html5lib_format_tokenizer_fixtures() {
    let root = fixture_root();
    let cases = load_fixture_dir(&root).unwrap_or_else(|err| panic!("{err}"));
    assert!(!cases.is_empty(), "no tokenizer fixtures found in {root:?}");

    let filter = env_filter(FILTER_ENV);
    let verbose = parse_env_bool(VERBOSE_ENV);
    let mut failures = Vec::<Failure>::new();
    let mut ran = 0usize;

    for loaded in &cases {
        if let Some(filter) = filter.as_deref()
            && !loaded.case.description.contains(filter)
        {
            continue;
        }
        ran += 1;
        if verbose {
            eprintln!("running {} ({})", loaded.id, loaded.case.description);
        }
        if let Err(message) = check_case(loaded) {
            failures.push(Failure {
                id: format!("{} ({})", loaded.id, loaded.case.description),
                message,
            });
        }
    }

    assert!(ran > 0, "{FILTER_ENV} matched no fixture descriptions");
    if !failures.is_empty() {
        let mut report = format!("{} of {ran} tokenizer fixtures failed:\n", failures.len());
        for failure in &failures {
            report.push_str(&format!("\n== {}\n{}\n", failure.id, failure.message));
        }
        panic!("{report}");
    }
}
