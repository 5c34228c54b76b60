use clap::Parser;
use deckurl::cli::{AddonCommand, Cli, Command, DeckCommand, ProfileCommand};

#[test]
fn parses_reveal() {
    let cli = Cli::try_parse_from([
        "deckurl",
        "reveal",
        "--deck",
        "Spanish",
        "--field",
        "Front=hola",
        "--field",
        "Back=hello",
        "--dry-run",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Reveal(reveal) => {
            assert_eq!(reveal.deck, "Spanish");
            assert_eq!(reveal.fields, ["Front=hola", "Back=hello"]);
            assert!(reveal.dry_run);
            assert!(reveal.card_json.is_none());
        }
        _ => panic!("expected reveal command"),
    }
}

#[test]
fn reveal_requires_deck() {
    assert!(Cli::try_parse_from(["deckurl", "reveal", "--field", "Front=hola"]).is_err());
}

#[test]
fn parses_profile_add() {
    let cli = Cli::try_parse_from([
        "deckurl",
        "profile",
        "add",
        "spanish",
        "--field",
        "Front",
        "--url",
        "https://x.com/?q={{field_content}}",
        "--deck",
        "Spanish",
        "--deck",
        "Spanish::Verbs",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Profile(profile) => match profile.command {
            ProfileCommand::Add(add) => {
                assert_eq!(add.name, "spanish");
                assert_eq!(add.field.as_deref(), Some("Front"));
                assert_eq!(add.decks, ["Spanish", "Spanish::Verbs"]);
                assert!(add.app.is_none());
                assert!(!add.disabled);
            }
            _ => panic!("expected profile add"),
        },
        _ => panic!("expected profile command"),
    }
}

#[test]
fn parses_deck_rm_with_many_decks() {
    let cli = Cli::try_parse_from(["deckurl", "deck", "rm", "spanish", "A", "B"])
        .expect("cli parse should work");
    match cli.command {
        Command::Deck(deck) => match deck.command {
            DeckCommand::Rm(args) => {
                assert_eq!(args.profile, "spanish");
                assert_eq!(args.decks, ["A", "B"]);
            }
            _ => panic!("expected deck rm"),
        },
        _ => panic!("expected deck command"),
    }
}

#[test]
fn deck_add_requires_a_deck() {
    assert!(Cli::try_parse_from(["deckurl", "deck", "add", "spanish"]).is_err());
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "deckurl",
        "addon",
        "toggle",
        "--json",
        "-vv",
        "--config",
        "/tmp/deckurl.json",
    ])
    .expect("cli parse should work");
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/deckurl.json"))
    );
    match cli.command {
        Command::Addon(addon) => assert!(matches!(addon.command, AddonCommand::Toggle)),
        _ => panic!("expected addon command"),
    }
}
