//! Integration tests for subcommand scoping.

use klarg::{Args, Config, Handlers, Lookup, LookupError, Number, ScopeError};
use rstest::{fixture, rstest};

#[fixture]
fn args() -> Args {
    Args::new(["-f", "reply", "-n", "12", "example.txt"])
}

#[rstest]
fn scope_yields_tokens_after_anchor(args: Args) -> Result<(), ScopeError> {
    let reply = args.scope("reply")?;
    assert_eq!(reply.anchor(), "reply");
    assert_eq!(reply.all(), ["-n", "12", "example.txt"]);
    assert_eq!(reply.get_num(("number", "n")), Ok(Some(Number::Int(12))));
    Ok(())
}

#[rstest]
fn missing_anchor_is_an_error(args: Args) {
    assert_eq!(
        args.scope("forward"),
        Err(ScopeError::AnchorNotFound {
            anchor: "forward".to_owned(),
        })
    );
}

#[rstest]
fn scope_hides_tokens_before_anchor(args: Args) -> Result<(), ScopeError> {
    let reply = args.scope("reply")?;
    assert!(args.get_bool(("force", "f")).unwrap_or(false));
    assert_eq!(reply.get_bool(("force", "f")), Ok(false));
    assert!(!reply.exists("reply"));
    Ok(())
}

#[test]
fn scope_uses_first_occurrence_of_anchor() -> Result<(), ScopeError> {
    let args = Args::new(["run", "--level", "1", "run", "--level", "2"]);
    let run = args.scope("run")?;
    assert_eq!(run.all().len(), 5);
    assert_eq!(
        run.get_num("level"),
        Err(LookupError::MultipleProvided {
            flag: "--level".to_owned(),
        })
    );
    Ok(())
}

#[test]
fn scopes_nest() -> Result<(), ScopeError> {
    let args = Args::new(["remote", "add", "--name", "origin"]);
    let add = args.scope("remote")?.scope("add")?.get_str("name").ok().flatten().map(str::to_owned);
    assert_eq!(add.as_deref(), Some("origin"));
    Ok(())
}

#[test]
fn scope_inherits_configuration() -> Result<(), ScopeError> {
    let args = Args::new(["deploy", "--env"]).with_config(Config::default().with_short_flags_required(true));
    let deploy = args.scope("deploy")?;
    assert!(matches!(deploy.get_str("env"), Err(LookupError::Usage(_))));
    assert!(deploy.get_str(("env", "e")).is_err());
    Ok(())
}

#[rstest]
fn scope_queries_can_use_handlers(args: Args) -> Result<(), ScopeError> {
    let reply = args.scope("reply")?;
    let mut bad = None;
    let number = Handlers::new()
        .on_not_a_number(|raw| bad = Some(raw.to_owned()))
        .resolve(reply.get_num(("number", "n")));
    assert_eq!(number, Some(Number::Int(12)));
    assert_eq!(bad, None);
    Ok(())
}

#[test]
fn scope_help_is_local() -> Result<(), ScopeError> {
    let args = Args::new(["--help", "reply", "-n", "1"]);
    let reply = args.scope("reply")?;
    assert!(args.wants_help());
    assert!(!reply.wants_help());
    Ok(())
}
