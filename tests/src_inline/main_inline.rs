use super::*;
use iota_score::input::centers::NO_BASELINE_WARNING;

fn run_args(extra: &[&str]) -> RunArgs {
    let mut argv = vec!["iota-score", "run", "--summary", "s.csv", "--center", "AAAA"];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Run(args) => args,
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_run_defaults() {
    let args = run_args(&[]);
    assert_eq!(args.refs.summary, PathBuf::from("s.csv"));
    assert!(args.refs.graft.is_none());
    assert_eq!(args.center, "AAAA");
    assert!(!args.details);
    assert!(!args.json);
    assert!(args.seed.is_none());
    assert!(args.out.is_none());
}

#[test]
fn test_parse_run_full() {
    let cli = Cli::try_parse_from([
        "iota-score",
        "run",
        "--summary",
        "s.csv.gz",
        "--graft",
        "g.csv",
        "--centers",
        "c.csv",
        "--center",
        "casf",
        "--transplants",
        "361",
        "--acceptance",
        "1.53",
        "--graft-survival",
        "95.4",
        "--details",
        "--seed",
        "9",
        "--out",
        "out",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.refs.graft, Some(PathBuf::from("g.csv")));
    assert_eq!(args.refs.centers, Some(PathBuf::from("c.csv")));
    assert_eq!(args.transplants.as_deref(), Some("361"));
    assert_eq!(args.graft_survival.as_deref(), Some("95.4"));
    assert!(args.details);
    assert_eq!(args.seed, Some(9));
    assert_eq!(args.out, Some(PathBuf::from("out")));
}

#[test]
fn test_parse_lookup() {
    let cli =
        Cli::try_parse_from(["iota-score", "lookup", "--summary", "s.csv", "--center", "ZZZZ"])
            .unwrap();
    let Command::Lookup(args) = cli.command else {
        panic!("expected lookup");
    };
    assert_eq!(args.center, "ZZZZ");
}

#[test]
fn test_run_requires_summary_and_center() {
    assert!(Cli::try_parse_from(["iota-score", "run", "--center", "AAAA"]).is_err());
    assert!(Cli::try_parse_from(["iota-score", "run", "--summary", "s.csv"]).is_err());
}

#[test]
fn test_build_input_prefers_explicit_values() {
    let args = run_args(&["--transplants", "150.9", "--acceptance", "abc"]);
    let prefill = Prefill {
        num_transplants: Some(120.0),
        offer_accept_rate: Some(1.0),
        graft_survival: Some(95.0),
    };
    let input = build_input(&args, Some(&prefill));
    assert_eq!(input.center_code, "AAAA");
    assert_eq!(input.num_transplants, 150);
    assert_eq!(input.offer_accept_rate, 0.0);
    assert_eq!(input.graft_survival, 95.0);
}

#[test]
fn test_build_input_without_prefill_defaults_to_zero() {
    let input = build_input(&run_args(&["--transplants=-5"]), None);
    assert_eq!(input.num_transplants, 0);
    assert_eq!(input.offer_accept_rate, 0.0);
    assert_eq!(input.graft_survival, 0.0);
}

#[test]
fn test_render_lookup() {
    let lookup = CenterLookup {
        code: "ZZZZ".to_string(),
        name: None,
        exists: false,
        participating: false,
        prefill: None,
        warning: Some(NO_BASELINE_WARNING),
    };
    let text = render_lookup(&lookup);
    assert!(text.contains("Center: ZZZZ"));
    assert!(text.contains("Name: unknown"));
    assert!(text.contains("In reference data: no"));
    assert!(text.contains(&format!("Warning: {NO_BASELINE_WARNING}")));
    assert!(!text.contains("Last reported"));

    let lookup = CenterLookup {
        code: "AAAA".to_string(),
        name: Some("Alpha".to_string()),
        exists: true,
        participating: true,
        prefill: Some(Prefill {
            num_transplants: Some(120.0),
            offer_accept_rate: None,
            graft_survival: Some(95.4),
        }),
        warning: None,
    };
    let text = render_lookup(&lookup);
    assert!(text.contains("Participating in IOTA: yes"));
    assert!(text.contains("Last reported transplants: 120.00"));
    assert!(text.contains("Last reported offer acceptance rate: n/a"));
    assert!(text.contains("Last reported graft survival: 95.40"));
    assert!(!text.contains("Warning"));
}
