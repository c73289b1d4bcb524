use super::*;

#[test]
fn discover_defaults() {
    let cli = Cli::try_parse_from(["sitescout", "discover"]).expect("expected valid cli args");
    match cli.command {
        Commands::Discover {
            plan,
            output,
            target,
            dry_run,
        } => {
            assert!(plan.is_none());
            assert_eq!(output, PathBuf::from("discovered_locations.csv"));
            assert!(target.is_none());
            assert!(!dry_run);
        }
        Commands::Solar { .. } => panic!("expected discover"),
    }
}

#[test]
fn discover_with_overrides() {
    let cli = Cli::try_parse_from([
        "sitescout",
        "discover",
        "--plan",
        "plans/atl.yaml",
        "--output",
        "out.csv",
        "--target",
        "25",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Discover {
            plan: Some(ref p),
            target: Some(25),
            dry_run: true,
            ..
        } if p == &PathBuf::from("plans/atl.yaml")
    ));
}

#[test]
fn discover_rejects_non_numeric_target() {
    assert!(Cli::try_parse_from(["sitescout", "discover", "--target", "many"]).is_err());
}

#[test]
fn solar_defaults() {
    let cli = Cli::try_parse_from(["sitescout", "solar"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Solar {
            ref input,
            output: None,
            output_dir: None,
        } if input == &PathBuf::from("discovered_locations.csv")
    ));
}

#[test]
fn solar_with_paths() {
    let cli = Cli::try_parse_from([
        "sitescout",
        "solar",
        "--input",
        "in.csv",
        "--output",
        "enriched.csv",
        "--output-dir",
        "artifacts",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Solar {
            output: Some(ref o),
            output_dir: Some(ref d),
            ..
        } if o == &PathBuf::from("enriched.csv") && d == &PathBuf::from("artifacts")
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["sitescout"]).is_err());
}
