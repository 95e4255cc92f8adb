// Tests for command-line parsing and the build command
use clap::Parser;
use partner_builder::cli::{Cli, Commands, build_command};
use partner_builder::dump::OutputFormat;

#[test]
fn test_build_defaults() {
    let cli = Cli::try_parse_from(["partner-builder", "build"]).unwrap();

    match cli.cmd {
        Commands::Build {
            data,
            components,
            format,
            output_path,
        } => {
            assert!(data.is_none());
            assert_eq!(components, vec!["partners", "addresses", "phones"]);
            assert_eq!(format, OutputFormat::Json);
            assert!(output_path.is_none());
        }
        Commands::Components => panic!("parsed the wrong subcommand"),
    }
}

#[test]
fn test_build_with_components_and_format() {
    let cli = Cli::try_parse_from([
        "partner-builder",
        "build",
        "--components",
        "partners,phones",
        "--format",
        "text",
    ])
    .unwrap();

    match cli.cmd {
        Commands::Build {
            components, format, ..
        } => {
            assert_eq!(components, vec!["partners", "phones"]);
            assert_eq!(format, OutputFormat::Text);
        }
        Commands::Components => panic!("parsed the wrong subcommand"),
    }
}

#[test]
fn test_components_subcommand() {
    let cli = Cli::try_parse_from(["partner-builder", "components"]).unwrap();
    assert!(matches!(cli.cmd, Commands::Components));
}

#[test]
fn test_unknown_format_rejected() {
    let result = Cli::try_parse_from(["partner-builder", "build", "--format", "xml"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_build_command_writes_output() {
    let path = std::env::temp_dir().join(format!("partner_builder_{}_out.json", std::process::id()));

    build_command(
        None,
        vec!["partners".to_string(), "addresses".to_string()],
        OutputFormat::Json,
        Some(path.clone()),
    )
    .await
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["addresses"].as_array().unwrap().len(), 3);
    assert!(value[0]["phone_numbers"].as_array().unwrap().is_empty());
}

#[test]
fn test_build_output_flag() {
    let long = Cli::try_parse_from(["partner-builder", "build", "--output", "out.json"]).unwrap();
    let short = Cli::try_parse_from(["partner-builder", "build", "-o", "out.json"]).unwrap();

    for cli in [long, short] {
        match cli.cmd {
            Commands::Build { output_path, .. } => {
                assert_eq!(output_path, Some(std::path::PathBuf::from("out.json")));
            }
            Commands::Components => panic!("parsed the wrong subcommand"),
        }
    }
}
