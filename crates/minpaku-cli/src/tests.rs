use super::*;

#[test]
fn parses_geocode_command() {
    let cli = Cli::try_parse_from(["minpaku-cli", "geocode", "東京都新宿区歌舞伎町1-1-5"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Geocode { ref address } if address == "東京都新宿区歌舞伎町1-1-5"
    ));
}

#[test]
fn parses_negative_coordinates() {
    let cli = Cli::try_parse_from(["minpaku-cli", "reverse", "-33.8688", "151.2093"])
        .expect("expected valid cli args");

    let Commands::Reverse { lat, lon } = cli.command else {
        panic!("expected reverse command");
    };
    assert!((lat + 33.8688).abs() < f64::EPSILON);
    assert!((lon - 151.2093).abs() < f64::EPSILON);
}

#[test]
fn parses_zoning_command() {
    let cli = Cli::try_parse_from(["minpaku-cli", "zoning", "35.6938", "139.7029"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Zoning { .. }));
}

#[test]
fn parses_check_command() {
    let cli = Cli::try_parse_from(["minpaku-cli", "check", "京都府京都市東山区祇園町"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Check { .. }));
}

#[test]
fn rejects_non_numeric_coordinates() {
    assert!(Cli::try_parse_from(["minpaku-cli", "zoning", "north", "139.7"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["minpaku-cli"]).is_err());
}
